//! Admin panel

mod errors;
mod service;

pub use errors::AdminServiceError;
pub use service::*;
