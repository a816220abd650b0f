//! Product service API

mod client;
mod errors;
pub mod records;

pub use client::*;
pub use errors::*;
