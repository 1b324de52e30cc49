//! Session cart store: direct cart operations plus derived badge/hint state.

use chrono::Utc;

use plipshop_catalog::Product;
use plipshop_core::{Aggregate, AggregateRoot, ProductId, SessionId};

use crate::cart::{AddItem, Cart, CartCommand, CartItem, ClearCart, RemoveItem, SetQuantity};

/// Outcome of a cart mutation, as seen by the cart affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartUpdate {
    pub previous_count: usize,
    pub item_count: usize,
    /// True exactly once per session: on the first 0 -> 1 distinct-entry transition.
    pub show_onboarding_hint: bool,
}

impl CartUpdate {
    /// Whether the badge count moved (drives the bump animation).
    pub fn count_changed(&self) -> bool {
        self.previous_count != self.item_count
    }
}

/// Single-session cart. Every operation is total.
#[derive(Debug, Clone)]
pub struct CartStore {
    cart: Cart,
    onboarding_shown: bool,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_session(SessionId::new())
    }

    pub fn with_session(session: SessionId) -> Self {
        Self {
            cart: Cart::empty(session),
            onboarding_shown: false,
        }
    }

    pub fn session(&self) -> SessionId {
        *self.cart.id()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn item_count(&self) -> usize {
        self.cart.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.cart.item(product_id).map_or(0, |i| i.quantity)
    }

    /// Badge value for the cart button; hidden while the cart is empty.
    pub fn badge(&self) -> Option<usize> {
        let count = self.item_count();
        (count > 0).then_some(count)
    }

    pub fn add(&mut self, product: &Product) -> CartUpdate {
        self.execute(CartCommand::AddItem(AddItem {
            product: product.clone(),
            occurred_at: Utc::now(),
        }))
    }

    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> CartUpdate {
        self.execute(CartCommand::SetQuantity(SetQuantity {
            product_id,
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    pub fn remove(&mut self, product_id: ProductId) -> CartUpdate {
        self.execute(CartCommand::RemoveItem(RemoveItem {
            product_id,
            occurred_at: Utc::now(),
        }))
    }

    pub fn clear(&mut self) -> CartUpdate {
        self.execute(CartCommand::ClearCart(ClearCart {
            occurred_at: Utc::now(),
        }))
    }

    fn execute(&mut self, command: CartCommand) -> CartUpdate {
        let previous_count = self.cart.item_count();
        let Ok(events) = self.cart.execute(&command);
        let item_count = self.cart.item_count();

        tracing::debug!(
            session = %self.cart.id(),
            events = events.len(),
            previous_count,
            item_count,
            "cart updated"
        );

        let show_onboarding_hint =
            !self.onboarding_shown && previous_count == 0 && item_count == 1;
        if show_onboarding_hint {
            self.onboarding_shown = true;
            tracing::debug!(session = %self.cart.id(), "first product added to cart");
        }

        CartUpdate {
            previous_count,
            item_count,
            show_onboarding_hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plipshop_catalog::ProductCategory;

    fn product(id: u64) -> Product {
        Product::new(ProductId::new(id), format!("Producto {id}"), ProductCategory::Otros)
    }

    #[test]
    fn adding_the_same_product_three_times_counts_once() {
        let mut store = CartStore::new();
        let p = product(1);
        store.add(&p);
        store.add(&p);
        store.add(&p);

        assert_eq!(store.item_count(), 1);
        assert_eq!(store.quantity_of(p.id), 3);
        assert_eq!(store.badge(), Some(1));
    }

    #[test]
    fn set_quantity_zero_removes_entry() {
        let mut store = CartStore::new();
        store.add(&product(1));
        let update = store.set_quantity(ProductId::new(1), 0);

        assert!(store.is_empty());
        assert_eq!(update.item_count, 0);
        assert!(update.count_changed());
        assert_eq!(store.badge(), None);
    }

    #[test]
    fn set_quantity_never_creates_entries() {
        let mut store = CartStore::new();
        store.set_quantity(ProductId::new(5), 3);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_is_unconditional() {
        let mut store = CartStore::new();
        store.add(&product(1));
        store.set_quantity(ProductId::new(1), 12);
        store.remove(ProductId::new(1));
        store.remove(ProductId::new(1));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = CartStore::new();
        store.add(&product(1));
        store.add(&product(2));
        let update = store.clear();
        assert_eq!(update.previous_count, 2);
        assert!(store.is_empty());
    }

    #[test]
    fn onboarding_hint_fires_once_on_first_entry() {
        let mut store = CartStore::new();

        let first = store.add(&product(1));
        assert!(first.show_onboarding_hint);

        let second = store.add(&product(2));
        assert!(!second.show_onboarding_hint);

        store.clear();
        let again = store.add(&product(3));
        assert!(!again.show_onboarding_hint);
        assert_eq!(again.item_count, 1);
    }

    #[test]
    fn incrementing_does_not_fire_the_hint() {
        let mut store = CartStore::new();
        store.add(&product(1));
        let update = store.add(&product(1));
        assert!(!update.show_onboarding_hint);
        assert!(!update.count_changed());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u64),
            Set(u64, i64),
            Remove(u64),
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u64..5).prop_map(Op::Add),
                (0u64..5, -10i64..10).prop_map(|(id, q)| Op::Set(id, q)),
                (0u64..5).prop_map(Op::Remove),
                Just(Op::Clear),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: entries stay unique with quantity >= 1, and the hint fires at most once.
            #[test]
            fn cart_invariants_hold(ops in prop::collection::vec(op(), 0..60)) {
                let mut store = CartStore::new();
                let mut hints = 0;

                for op in ops {
                    let update = match op {
                        Op::Add(id) => store.add(&product(id)),
                        Op::Set(id, q) => store.set_quantity(ProductId::new(id), q),
                        Op::Remove(id) => store.remove(ProductId::new(id)),
                        Op::Clear => store.clear(),
                    };
                    if update.show_onboarding_hint {
                        prop_assert_eq!(update.previous_count, 0);
                        prop_assert_eq!(update.item_count, 1);
                        hints += 1;
                    }

                    let mut ids: Vec<_> = store.items().iter().map(|i| i.product.id).collect();
                    let len = ids.len();
                    ids.sort();
                    ids.dedup();
                    prop_assert_eq!(ids.len(), len);
                    prop_assert!(store.items().iter().all(|i| i.quantity >= 1));
                    prop_assert_eq!(store.item_count(), len);
                }

                prop_assert!(hints <= 1);
            }
        }
    }
}
