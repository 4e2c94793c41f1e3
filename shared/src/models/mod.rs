//! Data models
//!
//! Shared between the HTTP backend layer and the front end.
//! All IDs are opaque strings assigned by the backend.

pub mod filter;
pub mod price_range;
pub mod restaurant;

// Re-exports
pub use filter::*;
pub use price_range::*;
pub use restaurant::*;
