//! Prices

use std::{
    fmt::{self, Display, Formatter},
    iter::Sum,
    ops::Deref,
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Currency every storefront price is expressed in.
pub const CURRENCY: &Currency = iso::BRL;

/// Errors raised while converting external amounts into a [`Price`].
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// Prices can't be negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),

    /// The amount doesn't fit into centavos.
    #[error("price is out of range: {0}")]
    OutOfRange(Decimal),

    /// The amount was not a finite number.
    #[error("price is not a finite number")]
    NotFinite,

    /// The money value was expressed in another currency.
    #[error("expected a {expected} amount, got {found}")]
    CurrencyMismatch {
        /// Storefront currency code.
        expected: &'static str,

        /// Currency code of the rejected value.
        found: &'static str,
    },
}

/// Represents a non-negative price in centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: u64,
}

impl Price {
    /// The zero price.
    pub const ZERO: Price = Price { value: 0 };

    /// Creates a new Price from centavos.
    pub const fn from_minor(value: u64) -> Self {
        Price { value }
    }

    /// Creates a price from a decimal amount in reais, rounded to whole centavos.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] when the amount is negative or too large.
    pub fn from_decimal(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }

        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|centavos| {
                centavos
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u64()
            })
            .map(Price::from_minor)
            .ok_or(PriceError::OutOfRange(amount))
    }

    /// Creates a price from a floating point amount in reais.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] when the amount is not finite, negative or too large.
    pub fn from_f64(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotFinite);
        }

        let decimal = Decimal::try_from(amount).map_err(|_err| PriceError::NotFinite)?;

        Self::from_decimal(decimal)
    }

    /// Creates a price from a money value in the storefront currency.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] on a currency mismatch or a negative amount.
    pub fn from_money(money: &Money<'_, Currency>) -> Result<Self, PriceError> {
        if money.currency() != CURRENCY {
            return Err(PriceError::CurrencyMismatch {
                expected: CURRENCY.iso_alpha_code,
                found: money.currency().iso_alpha_code,
            });
        }

        let minor = money.to_minor_units();

        u64::try_from(minor)
            .map(Price::from_minor)
            .map_err(|_err| PriceError::Negative(Decimal::new(minor, 2)))
    }

    /// Price as a money value in the storefront currency.
    pub fn to_money(self) -> Money<'static, Currency> {
        Money::from_minor(i64::try_from(self.value).unwrap_or(i64::MAX), CURRENCY)
    }

    /// Multiplies the price by a quantity, saturating at the maximum.
    #[must_use]
    pub fn times(self, quantity: u64) -> Self {
        Price::from_minor(self.value.saturating_mul(quantity))
    }

    /// Adds two prices, saturating at the maximum.
    #[must_use]
    pub fn saturating_add(self, other: Price) -> Self {
        Price::from_minor(self.value.saturating_add(other.value))
    }

    /// Whether this is the zero price.
    pub fn is_zero(self) -> bool {
        self.value == 0
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::money::format_brl(*self))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() {
        let price = Price::from_minor(1000);

        assert_eq!(price.value, 1000);
    }

    #[test]
    fn price_derefs_to_u64() {
        let price = Price { value: 100 };

        assert_eq!(*price, 100);
    }

    #[test]
    fn from_decimal_rounds_to_centavos() -> TestResult {
        assert_eq!(Price::from_decimal(Decimal::new(19_905, 3))?, Price::from_minor(1991));
        assert_eq!(Price::from_decimal(Decimal::new(199, 1))?, Price::from_minor(1990));

        Ok(())
    }

    #[test]
    fn from_decimal_rejects_negative_amounts() {
        let result = Price::from_decimal(Decimal::new(-1, 2));

        assert_eq!(result, Err(PriceError::Negative(Decimal::new(-1, 2))));
    }

    #[test]
    fn from_f64_handles_binary_fractions() -> TestResult {
        assert_eq!(Price::from_f64(19.9)?, Price::from_minor(1990));
        assert_eq!(Price::from_f64(0.1)?, Price::from_minor(10));
        assert_eq!(Price::from_f64(0.0)?, Price::ZERO);

        Ok(())
    }

    #[test]
    fn from_f64_rejects_nan() {
        assert_eq!(Price::from_f64(f64::NAN), Err(PriceError::NotFinite));
    }

    #[test]
    fn from_money_requires_brl() -> TestResult {
        let brl = Money::from_minor(1250, iso::BRL);
        let usd = Money::from_minor(1250, iso::USD);

        assert_eq!(Price::from_money(&brl)?, Price::from_minor(1250));
        assert!(matches!(
            Price::from_money(&usd),
            Err(PriceError::CurrencyMismatch { found: "USD", .. })
        ));

        Ok(())
    }

    #[test]
    fn to_money_uses_brl() {
        let money = Price::from_minor(3980).to_money();

        assert_eq!(money, Money::from_minor(3980, iso::BRL));
    }

    #[test]
    fn times_and_sum_saturate() {
        let total: Price = [Price::from_minor(u64::MAX), Price::from_minor(1)]
            .into_iter()
            .sum();

        assert_eq!(total, Price::from_minor(u64::MAX));
        assert_eq!(Price::from_minor(u64::MAX).times(2), Price::from_minor(u64::MAX));
        assert_eq!(Price::from_minor(1990).times(2), Price::from_minor(3980));
    }
}
