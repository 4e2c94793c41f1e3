//! Munchies Client - restaurant directory client
//!
//! Fetches restaurants, category filters and price ranges from the backend,
//! enriches every restaurant with its live open status, and narrows the list
//! by the user's facet selections.

pub mod config;
pub mod enrich;
pub mod error;
pub mod facets;
pub mod http;
pub mod selection;
pub mod storefront;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ClientConfig;
pub use enrich::enrich_statuses;
pub use error::{ClientError, ClientResult};
pub use facets::delivery_time_facet;
pub use http::{Backend, NetworkBackend};
pub use selection::Selection;
pub use storefront::{Directory, DirectoryLoader, PageState, Storefront};
pub use view::{FacetControls, FacetOption, RestaurantCard};

// Re-export shared types for convenience
pub use shared::{EnrichedRestaurant, Filter, OpenStatus, PriceRange, Restaurant};
pub use tokio_util::sync::CancellationToken;
