//! Shopping cart domain module.
//!
//! The cart is an in-memory, single-session aggregate. `CartStore` wraps it
//! with the direct operations the storefront uses, and `checkout` turns its
//! contents into a WhatsApp order handoff.

pub mod cart;
pub mod checkout;
pub mod store;

pub use cart::{
    AddItem, Cart, CartCleared, CartCommand, CartEvent, CartItem, ClearCart, ItemAdded,
    ItemRemoved, QuantityChanged, RemoveItem, SetQuantity,
};
pub use checkout::{CheckoutError, CheckoutLink, WhatsAppCheckout};
pub use store::{CartStore, CartUpdate};
