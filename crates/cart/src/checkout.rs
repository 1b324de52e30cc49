//! WhatsApp checkout handoff.
//!
//! "Checkout" is a `wa.me` deep link that pre-fills a human-readable order
//! summary: one line per cart entry, `quantity x product name`.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use plipshop_catalog::Product;

use crate::cart::CartItem;
use crate::store::CartStore;

const ORDER_GREETING: &str = "¡Hola! Me gustaría hacer un pedido:";
const ORDER_CLOSING: &str = "Por favor, ¿podrían darme más información?";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("the cart is empty")]
    EmptyCart,

    #[error("invalid WhatsApp phone number: {0:?}")]
    InvalidPhone(String),

    #[error("could not build checkout link: {0}")]
    Url(#[from] url::ParseError),
}

/// A ready-to-open deep link plus the message it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLink {
    pub url: Url,
    pub message: String,
}

/// Builds WhatsApp links towards the store's phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppCheckout {
    phone: String,
}

impl WhatsAppCheckout {
    /// `phone` may contain `+`, spaces or dashes; only the digits are kept.
    pub fn new(phone: &str) -> Result<Self, CheckoutError> {
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(CheckoutError::InvalidPhone(phone.to_string()));
        }
        Ok(Self { phone: digits })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Order summary for the given entries.
    pub fn order_message(items: &[CartItem]) -> Result<String, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let lines = items
            .iter()
            .map(|item| format!("• {}x {}", item.quantity, item.product.name))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(format!("{ORDER_GREETING}\n\n{lines}\n\n{ORDER_CLOSING}"))
    }

    pub fn inquiry_message(product: &Product) -> String {
        format!(
            "¡Hola! Me interesa el producto \"{}\". ¿Podrían darme más información?",
            product.name
        )
    }

    /// Deep link carrying the whole cart.
    pub fn order_link(&self, cart: &CartStore) -> Result<CheckoutLink, CheckoutError> {
        let message = Self::order_message(cart.items())?;
        let link = self.link(message)?;
        tracing::info!(
            session = %cart.session(),
            items = cart.item_count(),
            "whatsapp order link created"
        );
        Ok(link)
    }

    /// Deep link asking about a single product.
    pub fn inquiry_link(&self, product: &Product) -> Result<CheckoutLink, CheckoutError> {
        self.link(Self::inquiry_message(product))
    }

    fn link(&self, message: String) -> Result<CheckoutLink, CheckoutError> {
        let base = format!("https://wa.me/{}", self.phone);
        let url = Url::parse_with_params(&base, &[("text", message.as_str())])?;
        Ok(CheckoutLink { url, message })
    }
}
