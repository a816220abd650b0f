//! Vitrine
//!
//! Vitrine is the storefront core for a small cosmetics shop: cart aggregation,
//! order messages for a chat link, catalog listing and the admin session gate.

pub mod cart;
pub mod collation;
pub mod fixtures;
pub mod generation;
pub mod listing;
pub mod money;
pub mod order;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod session;
pub mod uploads;
