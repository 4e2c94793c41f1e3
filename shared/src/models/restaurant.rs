//! Restaurant Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Restaurant entity as returned by `GET /api/restaurants`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    /// Category filter IDs (junction with `Filter::id`)
    #[serde(default)]
    pub filter_ids: Vec<String>,
    /// Relative image path, joined with the backend base URL for display
    #[serde(default)]
    pub image_url: String,
    pub delivery_time_minutes: u32,
    /// Price range reference (`PriceRange::id`)
    #[serde(default)]
    pub price_range_id: Option<String>,
}

/// Live open/closed status of a restaurant
///
/// `Unknown` means the status lookup failed. It is not the same as `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenStatus {
    Open,
    Closed,
    Unknown,
}

impl OpenStatus {
    pub fn from_is_open(is_open: bool) -> Self {
        if is_open { Self::Open } else { Self::Closed }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for OpenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restaurant with its status attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub status: OpenStatus,
}

impl EnrichedRestaurant {
    pub fn new(restaurant: Restaurant, status: OpenStatus) -> Self {
        Self { restaurant, status }
    }

    pub fn id(&self) -> &str {
        &self.restaurant.id
    }
}

impl std::ops::Deref for EnrichedRestaurant {
    type Target = Restaurant;

    fn deref(&self) -> &Self::Target {
        &self.restaurant
    }
}
