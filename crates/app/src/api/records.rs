//! Wire records returned by the product service.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use vitrine::{
    prices::{Price, PriceError},
    products::{Product, ProductId},
};

/// Errors raised while converting a wire record into a [`Product`].
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// Price could not be represented.
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// Price text was not a decimal number.
    #[error("malformed price: {0}")]
    MalformedPrice(String),

    /// Stock below zero.
    #[error("negative stock: {0}")]
    NegativeStock(i64),

    /// Stock too large to represent.
    #[error("stock out of range: {0}")]
    StockOutOfRange(i64),

    /// Record without a name.
    #[error("product has no name")]
    MissingName,
}

/// List envelope: `{ "produtos": [...] }`.
///
/// Records are kept as raw JSON so one malformed record doesn't discard the
/// rest of the listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsEnvelope {
    /// Raw product records
    #[serde(default)]
    pub produtos: Vec<serde_json::Value>,
}

/// Price as sent on the wire: a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WirePrice {
    /// JSON number
    Number(f64),

    /// Decimal string
    Text(String),
}

impl Default for WirePrice {
    fn default() -> Self {
        WirePrice::Number(0.0)
    }
}

impl TryFrom<WirePrice> for Price {
    type Error = ProductError;

    fn try_from(price: WirePrice) -> Result<Self, Self::Error> {
        match price {
            WirePrice::Number(amount) => Ok(Price::from_f64(amount)?),
            WirePrice::Text(text) => {
                let amount = Decimal::from_str(text.trim())
                    .map_err(|error| ProductError::MalformedPrice(format!("{text}: {error}")))?;

                Ok(Price::from_decimal(amount)?)
            }
        }
    }
}

/// Product or variation record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRecord {
    /// Product id
    pub id: ProductId,

    /// Display name
    #[serde(rename = "nome", default)]
    pub name: String,

    /// SKU
    #[serde(rename = "codigo", default)]
    pub code: Option<String>,

    /// Unit price
    #[serde(rename = "preco", default)]
    pub price: WirePrice,

    /// Units in stock
    #[serde(rename = "estoque", default)]
    pub stock: i64,

    /// Visible to shoppers
    #[serde(rename = "ativo", default)]
    pub active: bool,

    /// Image file name
    #[serde(rename = "img_url", default)]
    pub image: Option<String>,

    /// Short description, possibly HTML
    #[serde(rename = "descricao_curta", default)]
    pub short_description: Option<String>,

    /// Whether variations exist
    #[serde(rename = "temVariacoes", default)]
    pub has_variations: bool,
}

impl ProductRecord {
    /// Convert into a domain product, attaching the parent id for variations.
    ///
    /// # Errors
    ///
    /// Returns an error for a missing name, a negative or malformed price, or
    /// a stock value that doesn't fit.
    pub fn into_product(self, parent: Option<&ProductId>) -> Result<Product, ProductError> {
        let name = self.name.trim().to_string();

        if name.is_empty() {
            return Err(ProductError::MissingName);
        }

        if self.stock < 0 {
            return Err(ProductError::NegativeStock(self.stock));
        }

        let stock =
            u32::try_from(self.stock).map_err(|_error| ProductError::StockOutOfRange(self.stock))?;

        Ok(Product {
            id: self.id,
            parent: parent.cloned(),
            name,
            code: self.code.unwrap_or_default(),
            price: Price::try_from(self.price)?,
            stock,
            active: self.active,
            image: self.image.filter(|image| !image.trim().is_empty()),
            short_description: self.short_description,
            has_variations: self.has_variations,
        })
    }
}
