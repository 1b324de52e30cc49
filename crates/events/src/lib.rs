//! Domain events emitted by the storefront stores.

pub mod event;

pub use event::Event;
