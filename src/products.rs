//! Products

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    cart::{LineItem, Quantity},
    prices::Price,
};

/// Identifier of a product or a product variation.
///
/// The product service hands out numeric ids, but nothing here relies on that:
/// both JSON numbers and strings deserialize into an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => ProductId(id),
            RawId::Number(id) => ProductId::from(id),
        })
    }
}

/// Product (or variation) as listed by the product service.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Parent product, set when this product is a variation
    pub parent: Option<ProductId>,

    /// Display name
    pub name: String,

    /// SKU
    pub code: String,

    /// Unit price
    pub price: Price,

    /// Units in stock
    pub stock: u32,

    /// Whether shoppers can see the product
    pub active: bool,

    /// Stored image file name
    pub image: Option<String>,

    /// Short description, possibly containing HTML
    pub short_description: Option<String>,

    /// Whether the product has variations
    pub has_variations: bool,
}

impl Product {
    /// Whether the product is a variation of a parent product.
    pub fn is_variation(&self) -> bool {
        self.parent.is_some()
    }

    /// Whether the product is out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Human readable stock label, e.g. `"Sem estoque"` or `"3 em estoque"`.
    pub fn stock_label(&self) -> String {
        if self.is_out_of_stock() {
            "Sem estoque".to_string()
        } else {
            format!("{} em estoque", self.stock)
        }
    }

    /// Short description with markup removed.
    pub fn description_text(&self) -> Option<String> {
        self.short_description
            .as_deref()
            .map(strip_html_tags)
            .filter(|text| !text.is_empty())
    }

    /// Public URL of the product image under the given uploads base URL.
    pub fn image_url(&self, uploads_base: &str) -> Option<String> {
        self.image
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("{}/{name}", uploads_base.trim_end_matches('/')))
    }

    /// Whether a quantity selector sitting at `current` may go one higher.
    ///
    /// Variations are capped by their own stock; parent products are not.
    pub fn can_increment(&self, current: Quantity) -> bool {
        !self.is_variation() || u64::from(current.get()) < u64::from(self.stock)
    }

    /// Build a cart line for this product.
    pub fn to_line_item(&self, quantity: Quantity) -> LineItem {
        LineItem::new(
            self.id.clone(),
            self.name.clone(),
            self.code.clone(),
            self.price,
            quantity,
        )
        .with_variation(self.is_variation())
    }
}

/// Remove anything that looks like a markup tag and collapse whitespace.
pub fn strip_html_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
