//! API Response types
//!
//! One envelope per backend endpoint. The endpoints do not agree on a shape
//! (`/api/price-range` returns a bare array while the others wrap their list),
//! so each envelope normalizes into the plain model type.

use serde::{Deserialize, Serialize};

use crate::models::{Filter, OpenStatus, PriceRange, Restaurant};

/// `GET /api/restaurants`
///
/// ```json
/// { "restaurants": [ ... ] }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct RestaurantsResponse {
    pub restaurants: Vec<Restaurant>,
}

impl RestaurantsResponse {
    pub fn into_inner(self) -> Vec<Restaurant> {
        self.restaurants
    }
}

/// `GET /api/filter`
///
/// ```json
/// { "filters": [ ... ] }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct FiltersResponse {
    pub filters: Vec<Filter>,
}

impl FiltersResponse {
    pub fn into_inner(self) -> Vec<Filter> {
        self.filters
    }
}

/// `GET /api/price-range`
///
/// The contract is a bare array. A wrapped `{ "price_ranges": [...] }` is
/// accepted as well.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceRangesResponse {
    Bare(Vec<PriceRange>),
    Wrapped { price_ranges: Vec<PriceRange> },
}

impl PriceRangesResponse {
    pub fn into_inner(self) -> Vec<PriceRange> {
        match self {
            Self::Bare(ranges) => ranges,
            Self::Wrapped { price_ranges } => price_ranges,
        }
    }
}

/// `GET /api/open/{restaurant_id}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OpenStatusResponse {
    pub is_open: bool,
}

impl OpenStatusResponse {
    pub fn status(&self) -> OpenStatus {
        OpenStatus::from_is_open(self.is_open)
    }
}
