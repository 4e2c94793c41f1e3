//! Filter Model

use serde::{Deserialize, Serialize};

/// Category filter entity (`GET /api/filter`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}
