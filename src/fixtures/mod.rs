//! Fixtures
//!
//! YAML documents describing carts, used by the order command and tests.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::prices::{CURRENCY, Price, PriceError};

pub mod cart;

pub use cart::{CartFixture, CartItemFixture};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Price could not be represented
    #[error("Invalid price {price}: {source}")]
    Price {
        /// Price as written in the fixture
        price: String,

        /// Conversion failure
        source: PriceError,
    },

    /// Currency other than the storefront currency
    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(String),

    /// Line with a zero quantity
    #[error("Item {0} has a zero quantity")]
    ZeroQuantity(String),
}

/// Parse a fixture price such as `"19.90"` or `"19.90 BRL"`.
///
/// # Errors
///
/// Returns an error for malformed amounts, negative amounts or a currency
/// other than the storefront's.
pub fn parse_price(s: &str) -> Result<Price, FixtureError> {
    let mut parts = s.split_whitespace();

    let amount = parts
        .next()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    if let Some(code) = parts.next()
        && !code.eq_ignore_ascii_case(CURRENCY.iso_alpha_code)
    {
        return Err(FixtureError::UnsupportedCurrency(code.to_string()));
    }

    if parts.next().is_some() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let amount = Decimal::from_str(amount)
        .map_err(|err| FixtureError::InvalidPrice(format!("{s}: {err}")))?;

    Price::from_decimal(amount).map_err(|source| FixtureError::Price {
        price: s.to_string(),
        source,
    })
}
