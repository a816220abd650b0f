//! Cart Fixtures

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    cart::{Cart, LineItem, Quantity},
    fixtures::{FixtureError, parse_price},
    products::ProductId,
};

/// Wrapper for cart lines in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Cart lines in insertion order
    #[serde(default)]
    pub items: Vec<CartItemFixture>,
}

/// Cart line as written in YAML
#[derive(Debug, Deserialize)]
pub struct CartItemFixture {
    /// Product or variation id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// SKU
    #[serde(default)]
    pub code: String,

    /// Unit price, e.g. `"19.90"` or `"19.90 BRL"`
    pub price: String,

    /// Quantity, defaults to one
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Whether the line refers to a variation
    #[serde(default)]
    pub variation: bool,
}

fn default_quantity() -> u32 {
    1
}

impl CartFixture {
    /// Parse a cart fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Read and parse a cart fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Build a cart, adding lines in fixture order.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed price or a zero quantity.
    pub fn into_cart(self) -> Result<Cart, FixtureError> {
        let mut cart = Cart::new();

        for item in self.items {
            cart.add_to_cart(item.into_line_item()?);
        }

        Ok(cart)
    }
}

impl CartItemFixture {
    /// Convert into a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed price or a zero quantity.
    pub fn into_line_item(self) -> Result<LineItem, FixtureError> {
        let unit_price = parse_price(&self.price)?;

        let quantity = Quantity::new(self.quantity)
            .ok_or_else(|| FixtureError::ZeroQuantity(self.id.to_string()))?;

        Ok(LineItem::new(self.id, self.name, self.code, unit_price, quantity)
            .with_variation(self.variation))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;
    use crate::prices::Price;

    const CART: &str = r#"
items:
  - id: 12
    name: Batom Matte
    code: BM-12
    price: "19.90"
    quantity: 2
  - id: "31"
    name: Base Líquida - Tom 2
    code: BL-31
    price: "45.00 BRL"
    variation: true
"#;

    #[test]
    fn from_yaml_builds_cart_in_order() -> TestResult {
        let cart = CartFixture::from_yaml(CART)?.into_cart()?;

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.grand_total(), Price::from_minor(1990 * 2 + 4500));

        let first = cart.items().first().ok_or("missing first line")?;
        let second = cart.items().get(1).ok_or("missing second line")?;

        assert_eq!(first.id(), &ProductId::from("12"));
        assert_eq!(first.code(), "BM-12");
        assert!(!first.is_variation());
        assert_eq!(second.quantity(), Quantity::ONE);
        assert!(second.is_variation());

        Ok(())
    }

    #[test]
    fn repeated_ids_are_merged() -> TestResult {
        let yaml = r#"
items:
  - { id: 1, name: Batom, price: "10.00" }
  - { id: 1, name: Batom, price: "10.00", quantity: 3 }
"#;

        let cart = CartFixture::from_yaml(yaml)?.into_cart()?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 4);

        Ok(())
    }

    #[test]
    fn from_path_reads_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cart.yml");

        fs::write(&path, CART)?;

        let cart = CartFixture::from_path(&path)?.into_cart()?;

        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = CartFixture::from_path("/nonexistent/cart.yml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn empty_fixture_gives_empty_cart() -> TestResult {
        assert!(CartFixture::from_yaml("items: []")?.into_cart()?.is_empty());
        assert!(CartFixture::from_yaml("{}")?.into_cart()?.is_empty());

        Ok(())
    }

    #[test]
    fn zero_quantity_is_rejected() -> TestResult {
        let yaml = r#"
items:
  - { id: 5, name: Batom, price: "10.00", quantity: 0 }
"#;

        let result = CartFixture::from_yaml(yaml)?.into_cart();

        assert!(matches!(result, Err(FixtureError::ZeroQuantity(id)) if id == "5"));

        Ok(())
    }
}
