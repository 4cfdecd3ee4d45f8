use crate::catalog::{Product, ProductId};
use crate::entity::{Entity, EventRecord};
use crate::impl_aggregate;

use super::CartItem;

/// Event-sourced shopping cart.
///
/// Lines keep the order in which their product was first added. Every
/// effective change is digested into the entity; no-ops record nothing.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    entity: Entity,
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: impl Into<String>) -> Self {
        Cart {
            entity: Entity::with_id(id),
            items: Vec::new(),
        }
    }

    /// Add one unit of `product`, creating its line on first add.
    ///
    /// Returns `false` without recording anything when the line is already
    /// at `u32::MAX`.
    pub fn add(&mut self, product: &Product) -> bool {
        self.add_line(CartItem::first_of(product))
    }

    fn add_line(&mut self, line: CartItem) -> bool {
        let id = line.id;
        let index = self.position(id);
        if let Some(index) = index {
            if self.items[index].quantity == u32::MAX {
                tracing::warn!(
                    cart = self.entity.id(),
                    product_id = id,
                    "line quantity is at its maximum"
                );
                return false;
            }
        }

        self.entity.digest(
            "ItemAdded",
            &(line.id, &line.name, line.price, &line.image),
        );

        let quantity = match index {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.quantity += 1;
                existing.quantity
            }
            None => {
                self.items.push(line);
                1
            }
        };

        tracing::debug!(cart = self.entity.id(), product_id = id, quantity, "item added");
        true
    }

    /// Replace the quantity of an existing line.
    ///
    /// Returns `false` without recording anything when the line is absent,
    /// the quantity is unchanged, or `quantity` is zero. Dropping a line goes
    /// through [`Cart::remove`].
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            tracing::warn!(
                cart = self.entity.id(),
                product_id = id,
                "ignoring zero quantity update"
            );
            return false;
        }

        let Some(index) = self.position(id) else {
            tracing::debug!(cart = self.entity.id(), product_id = id, "no line to update");
            return false;
        };
        if self.items[index].quantity == quantity {
            return false;
        }

        self.entity.digest("QuantityUpdated", &(id, quantity));
        self.items[index].quantity = quantity;

        tracing::debug!(cart = self.entity.id(), product_id = id, quantity, "quantity updated");
        true
    }

    /// Drop the line for `id`. Returns `false` when there was none.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.entity.digest("ItemRemoved", &(id,));
        self.items.remove(index);

        tracing::debug!(cart = self.entity.id(), product_id = id, "item removed");
        true
    }

    // -- Queries --

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines, shown on the cart badge.
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |sum, item| sum.saturating_add(item.line_total()))
    }

    pub fn history(&self) -> &[EventRecord] {
        self.entity.events()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    // -- Replay (called during hydration) --

    fn replay(&mut self, event: &EventRecord) -> Result<(), String> {
        match event.event_name.as_str() {
            "ItemAdded" => {
                let (id, name, price, image): (ProductId, String, u64, String) =
                    event.decode().map_err(|e| e.to_string())?;
                self.add_line(CartItem {
                    id,
                    name,
                    price,
                    image,
                    quantity: 1,
                });
            }
            "QuantityUpdated" => {
                let (id, quantity): (ProductId, u32) =
                    event.decode().map_err(|e| e.to_string())?;
                self.update_quantity(id, quantity);
            }
            "ItemRemoved" => {
                let (id,): (ProductId,) = event.decode().map_err(|e| e.to_string())?;
                self.remove(id);
            }
            other => return Err(format!("unknown cart event {}", other)),
        }
        Ok(())
    }
}

impl_aggregate!(Cart, entity, replay);
