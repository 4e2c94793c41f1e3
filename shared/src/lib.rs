//! Shared types for Munchies
//!
//! Data models returned by the restaurant backend and the per-endpoint
//! response envelopes used to decode them.

pub mod models;
pub mod response;

// Re-exports
pub use models::{EnrichedRestaurant, Filter, OpenStatus, PriceRange, Restaurant};
pub use response::{FiltersResponse, OpenStatusResponse, PriceRangesResponse, RestaurantsResponse};
pub use serde::{Deserialize, Serialize};
