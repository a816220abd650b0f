//! Order export
//!
//! Turns a cart into the order summary a shopper sends to the store over
//! WhatsApp, and builds the pre-filled deep link carrying it.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

use crate::cart::Cart;

/// Characters left untouched by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Default store name printed in the message header.
pub const DEFAULT_STORE_NAME: &str = "Espaço das Divas";

/// Default messaging deep link base.
pub const DEFAULT_MESSAGING_URL: &str = "https://wa.me/";

/// Errors raised while exporting an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// There is nothing to order.
    #[error("Carrinho vazio!")]
    EmptyCart,
}

/// Message layout and link target for exported orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTemplate {
    store_name: String,
    messaging_url: String,
}

impl Default for OrderTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_NAME, DEFAULT_MESSAGING_URL)
    }
}

impl OrderTemplate {
    /// Create a template for the given store and messaging base URL.
    pub fn new(store_name: impl Into<String>, messaging_url: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            messaging_url: messaging_url.into(),
        }
    }

    /// Store name used in the header line.
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Render the plain-text order summary.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] when the cart has no lines.
    pub fn render(&self, cart: &Cart) -> Result<String, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let mut message = format!("*🛍️ Pedido - {}*\n\n*Produtos:*\n", self.store_name);

        for (idx, item) in cart.items().iter().enumerate() {
            message.push_str(&format!(
                "{}. {}\n   • Código: {}\n   • Quantidade: {}\n   • Valor unitário: {}\n   • Subtotal: {}\n\n",
                idx + 1,
                item.name(),
                item.code(),
                item.quantity().get(),
                item.unit_price(),
                item.subtotal(),
            ));
        }

        message.push_str(&format!(
            "*Total do Pedido: {}*\n\nGostaria de finalizar este pedido! 😊",
            cart.grand_total()
        ));

        Ok(message)
    }

    /// Percent-encoded order summary, safe for a URL query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] when the cart has no lines.
    pub fn encoded(&self, cart: &Cart) -> Result<String, OrderError> {
        self.render(cart).map(|message| encode_component(&message))
    }

    /// Messaging deep link with the order summary pre-filled.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] when the cart has no lines.
    pub fn link(&self, cart: &Cart) -> Result<String, OrderError> {
        let encoded = self.encoded(cart)?;

        Ok(format!("{}?text={encoded}", self.messaging_url))
    }
}

/// Percent-encode a string the way `encodeURIComponent` does.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}
