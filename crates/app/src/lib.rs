//! Storefront application: product service client, authentication, catalog
//! and admin services.

pub mod admin;
pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod context;
pub mod observability;
pub mod store;
