//! Axum extractors for request handling
//!
//! Custom extractors for client identity and validated JSON bodies.

mod identity;
mod validated;

pub use identity::{ClientId, IDENTITY_HEADER};
pub use validated::ValidatedJson;
