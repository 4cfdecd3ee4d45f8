use std::fmt;

use crate::entity::{Entity, EventRecord};
use crate::error::StorefrontError;

/// A domain type whose state is rebuilt by replaying its entity's events.
pub trait Aggregate: Sized + Default {
    type ReplayError: fmt::Display;

    fn new_empty() -> Self {
        Self::default()
    }
    fn entity(&self) -> &Entity;
    fn entity_mut(&mut self) -> &mut Entity;
    fn replay_event(&mut self, event: &EventRecord) -> Result<(), Self::ReplayError>;
}

#[macro_export]
macro_rules! impl_aggregate {
    ($ty:ty, $entity:ident, $replay:ident) => {
        $crate::impl_aggregate!($ty, $entity, $replay, String);
    };
    ($ty:ty, $entity:ident, $replay:ident, $err:ty) => {
        impl $crate::Aggregate for $ty {
            type ReplayError = $err;

            fn entity(&self) -> &$crate::Entity {
                &self.$entity
            }

            fn entity_mut(&mut self) -> &mut $crate::Entity {
                &mut self.$entity
            }

            fn replay_event(
                &mut self,
                event: &$crate::EventRecord,
            ) -> Result<(), Self::ReplayError> {
                Self::$replay(self, event)
            }
        }
    };
}

/// Hydrate an aggregate from an entity by replaying its events.
///
/// Event sequences must run from 1 without gaps, so that later digests
/// continue the log instead of reusing a number.
pub fn hydrate<A: Aggregate>(entity: Entity) -> Result<A, StorefrontError> {
    let mut agg = A::new_empty();
    *agg.entity_mut() = entity;

    let events = agg.entity().events().to_vec();
    agg.entity_mut().set_replaying(true);
    for (expected, event) in (1u64..).zip(&events) {
        if event.sequence != expected {
            agg.entity_mut().set_replaying(false);
            return Err(StorefrontError::Replay {
                sequence: event.sequence,
                message: format!("expected sequence {}", expected),
            });
        }
        if let Err(err) = agg.replay_event(event) {
            agg.entity_mut().set_replaying(false);
            return Err(StorefrontError::Replay {
                sequence: event.sequence,
                message: err.to_string(),
            });
        }
    }
    agg.entity_mut().set_replaying(false);

    tracing::debug!(
        id = agg.entity().id(),
        events = events.len(),
        "hydrated aggregate"
    );
    Ok(agg)
}
