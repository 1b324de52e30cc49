use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plipshop_catalog::Product;
use plipshop_core::{Aggregate, AggregateRoot, ProductId, SessionId};
use plipshop_events::Event;

/// Cart entry: a product and how many units of it were picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// Aggregate root: Cart.
///
/// Entries are unique by product id and always hold at least one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: SessionId,
    items: Vec<CartItem>,
    version: u64,
}

impl Cart {
    pub fn empty(id: SessionId) -> Self {
        Self {
            id,
            items: Vec::new(),
            version: 0,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Number of distinct products in the cart (not the sum of quantities).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl AggregateRoot for Cart {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem (one more unit of `product`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetQuantity. Negative quantities clamp to zero, which removes the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetQuantity {
    pub product_id: ProductId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveItem {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCart {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    AddItem(AddItem),
    SetQuantity(SetQuantity),
    RemoveItem(RemoveItem),
    ClearCart(ClearCart),
}

/// Event: ItemAdded (new entry at quantity 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: SessionId,
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityChanged (existing entry, new quantity >= 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub cart_id: SessionId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub cart_id: SessionId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: SessionId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityChanged(QuantityChanged),
    ItemRemoved(ItemRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::QuantityChanged(_) => "cart.item.quantity_changed",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    // Every cart command is total: bad input is clamped, never rejected.
    type Error = core::convert::Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.items.push(CartItem {
                    product: e.product.clone(),
                    quantity: 1,
                });
            }
            CartEvent::QuantityChanged(e) => {
                if let Some(item) = self.items.iter_mut().find(|i| i.product.id == e.product_id) {
                    item.quantity = e.quantity;
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.items.retain(|i| i.product.id != e.product_id);
            }
            CartEvent::CartCleared(_) => {
                self.items.clear();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = match command {
            CartCommand::AddItem(cmd) => self.handle_add(cmd),
            CartCommand::SetQuantity(cmd) => self.handle_set_quantity(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove(cmd),
            CartCommand::ClearCart(cmd) => self.handle_clear(cmd),
        };
        Ok(events)
    }
}

impl Cart {
    fn handle_add(&self, cmd: &AddItem) -> Vec<CartEvent> {
        match self.item(cmd.product.id) {
            Some(item) => vec![CartEvent::QuantityChanged(QuantityChanged {
                cart_id: self.id,
                product_id: cmd.product.id,
                quantity: item.quantity.saturating_add(1),
                occurred_at: cmd.occurred_at,
            })],
            None => vec![CartEvent::ItemAdded(ItemAdded {
                cart_id: self.id,
                product: cmd.product.clone(),
                occurred_at: cmd.occurred_at,
            })],
        }
    }

    fn handle_set_quantity(&self, cmd: &SetQuantity) -> Vec<CartEvent> {
        // Only existing entries can be edited; unknown products are ignored.
        let Some(item) = self.item(cmd.product_id) else {
            return Vec::new();
        };

        let quantity = u32::try_from(cmd.quantity.max(0)).unwrap_or(u32::MAX);
        if quantity == 0 {
            return vec![CartEvent::ItemRemoved(ItemRemoved {
                cart_id: self.id,
                product_id: cmd.product_id,
                occurred_at: cmd.occurred_at,
            })];
        }
        if quantity == item.quantity {
            return Vec::new();
        }

        vec![CartEvent::QuantityChanged(QuantityChanged {
            cart_id: self.id,
            product_id: cmd.product_id,
            quantity,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Vec<CartEvent> {
        if self.item(cmd.product_id).is_none() {
            return Vec::new();
        }
        vec![CartEvent::ItemRemoved(ItemRemoved {
            cart_id: self.id,
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })]
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Vec<CartEvent> {
        if self.items.is_empty() {
            return Vec::new();
        }
        vec![CartEvent::CartCleared(CartCleared {
            cart_id: self.id,
            occurred_at: cmd.occurred_at,
        })]
    }
}
