//! Card and facet view models
//!
//! Display-ready projections of the directory state. Rendering itself is left
//! to the front end.

use shared::{EnrichedRestaurant, OpenStatus};

use crate::{ClientConfig, Directory, Selection};

/// Shown on cards of closed restaurants
pub const CLOSED_NOTICE: &str = "Opens tomorrow at 12 pm";

/// Summary card of one restaurant
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantCard {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub status: OpenStatus,
    /// Status chip label
    pub status_label: &'static str,
    /// Delivery chip, only for open restaurants
    pub delivery_label: Option<String>,
    /// Only for closed restaurants
    pub closed_notice: Option<&'static str>,
    /// Absolute image URL
    pub image_url: String,
}

impl RestaurantCard {
    pub fn new(restaurant: &EnrichedRestaurant, config: &ClientConfig) -> Self {
        let status = restaurant.status;
        Self {
            id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            rating: restaurant.rating,
            status,
            status_label: status.as_str(),
            delivery_label: status
                .is_open()
                .then(|| delivery_label(restaurant.delivery_time_minutes)),
            closed_notice: (status == OpenStatus::Closed).then_some(CLOSED_NOTICE),
            image_url: config.resolve(&restaurant.image_url),
        }
    }
}

/// `"{n} min"`
pub fn delivery_label(minutes: u32) -> String {
    format!("{} min", minutes)
}

/// One toggle control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption<K> {
    pub key: K,
    pub label: String,
    pub image_url: Option<String>,
    pub selected: bool,
}

/// Toggle controls for every facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetControls {
    pub categories: Vec<FacetOption<String>>,
    pub price_ranges: Vec<FacetOption<String>>,
    pub delivery_times: Vec<FacetOption<u32>>,
}

impl FacetControls {
    pub fn new(directory: &Directory, selection: &Selection, config: &ClientConfig) -> Self {
        let categories = directory
            .filters
            .iter()
            .map(|f| FacetOption {
                key: f.id.clone(),
                label: f.name.clone(),
                image_url: (!f.image_url.is_empty()).then(|| config.resolve(&f.image_url)),
                selected: selection.is_category_selected(&f.id),
            })
            .collect();

        let price_ranges = directory
            .price_ranges
            .iter()
            .map(|p| FacetOption {
                key: p.id.clone(),
                label: p.range.clone(),
                image_url: None,
                selected: selection.is_price_range_selected(&p.id),
            })
            .collect();

        let delivery_times = directory
            .delivery_times
            .iter()
            .map(|&minutes| FacetOption {
                key: minutes,
                label: delivery_label(minutes),
                image_url: None,
                selected: selection.is_delivery_time_selected(minutes),
            })
            .collect();

        Self {
            categories,
            price_ranges,
            delivery_times,
        }
    }
}
