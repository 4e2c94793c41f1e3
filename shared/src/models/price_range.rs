//! Price Range Model

use serde::{Deserialize, Serialize};

/// Price range entity (`GET /api/price-range`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub id: String,
    /// Display label, e.g. "$$"
    pub range: String,
}
