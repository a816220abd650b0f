//! Line items

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{prices::Price, products::ProductId};

/// A line quantity, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Returns `None` for zero.
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Quantity(value)),
            None => None,
        }
    }

    /// The quantity as a plain integer.
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Adds two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Quantity) -> Self {
        Quantity(self.0.saturating_add(other.0.get()))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ZeroQuantity;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Quantity::new(value).ok_or(ZeroQuantity)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

/// Zero was supplied where a quantity of at least one is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("quantity must be at least 1")]
pub struct ZeroQuantity;

/// One product or variation entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    id: ProductId,
    name: String,
    code: String,
    unit_price: Price,
    quantity: Quantity,
    variation: bool,
}

impl LineItem {
    /// Creates a line for a parent product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        code: impl Into<String>,
        unit_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            unit_price,
            quantity,
            variation: false,
        }
    }

    /// Marks the line as referring to a variation rather than its parent.
    #[must_use]
    pub fn with_variation(mut self, variation: bool) -> Self {
        self.variation = variation;
        self
    }

    /// Product or variation id
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// SKU
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Unit price
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Quantity
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Whether the id refers to a variation.
    pub fn is_variation(&self) -> bool {
        self.variation
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(u64::from(self.quantity.get()))
    }

    pub(super) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// Folds a repeated add of the same id into this line.
    pub(super) fn merge(&mut self, other: LineItem) {
        self.quantity = self.quantity.saturating_add(other.quantity);
        self.name = other.name;
        self.code = other.code;
        self.unit_price = other.unit_price;
        self.variation = other.variation;
    }
}
