use std::time::SystemTime;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Error when decoding an event payload.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("payload error in {event_name}: {message}")]
pub struct PayloadError {
    pub event_name: String,
    pub message: String,
}

/// One digested event: a name, a bitcode payload and its position in the log.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct EventRecord {
    pub event_name: String,
    #[serde(with = "payload_serde")]
    pub payload: Vec<u8>,
    pub sequence: u64,
    pub timestamp: SystemTime,
}

// Payload bytes render as base64 so a history reads cleanly as JSON.
mod payload_serde {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(payload: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        STANDARD.encode(payload).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

impl EventRecord {
    pub fn new(event_name: impl Into<String>, payload: Vec<u8>, sequence: u64) -> Self {
        EventRecord {
            event_name: event_name.into(),
            payload,
            sequence,
            timestamp: SystemTime::now(),
        }
    }

    /// Deserialize the payload into the specified type.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, PayloadError> {
        bitcode::deserialize(&self.payload).map_err(|e| PayloadError {
            event_name: self.event_name.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let payload = bitcode::serialize(&(1u32, 2u32)).unwrap();
        let record = EventRecord::new("ItemAdded", payload.clone(), 1);
        assert_eq!(record.event_name, "ItemAdded");
        assert_eq!(record.payload, payload);
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn decode_payload() {
        let payload = bitcode::serialize(&(7u32, "Унты".to_string(), 15900u64)).unwrap();
        let record = EventRecord::new("ItemAdded", payload, 1);
        let decoded: (u32, String, u64) = record.decode().unwrap();
        assert_eq!(decoded, (7, "Унты".to_string(), 15900));
    }

    #[test]
    fn decode_wrong_shape_names_the_event() {
        let record = EventRecord::new("QuantityUpdated", Vec::new(), 3);
        let err = record.decode::<(u32, u32)>().unwrap_err();
        assert_eq!(err.event_name, "QuantityUpdated");
        assert!(err.to_string().starts_with("payload error in QuantityUpdated"));
    }

    #[test]
    fn json_renders_payload_as_base64() {
        let record = EventRecord::new("ItemRemoved", vec![0xff, 0x00, 0xab], 2);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"payload\":\"/wCr\""));

        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
