//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, LineItem, Quantity, ZeroQuantity},
    fixtures::{CartFixture, FixtureError},
    generation::{RequestGeneration, Ticket},
    listing::{
        ADMIN_PAGE_SIZE, CATALOG_PAGE_SIZE, InventoryStats, ListingError, ListingQuery, Page,
        StatusFilter,
    },
    money::format_brl,
    order::{OrderError, OrderTemplate},
    prices::{Price, PriceError},
    products::{Product, ProductId},
    session::{AccessDenied, AuthState, Session},
    uploads::{UploadGuard, UploadTracker},
};
