//! Filter selections and the predicate engine
//!
//! A [`Selection`] holds one set per facet. Within a facet the selected values
//! are OR-ed; across facets the non-empty ones are AND-ed; an empty facet is
//! not applied.

use std::collections::BTreeSet;

use shared::{EnrichedRestaurant, Restaurant};

/// The user's current facet selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    categories: BTreeSet<String>,
    price_ranges: BTreeSet<String>,
    delivery_times: BTreeSet<u32>,
}

/// Add `value` if absent, remove it if present. Returns whether it is now selected.
fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_category(&mut self, filter_id: impl Into<String>) -> bool {
        toggle(&mut self.categories, filter_id.into())
    }

    pub fn toggle_price_range(&mut self, price_range_id: impl Into<String>) -> bool {
        toggle(&mut self.price_ranges, price_range_id.into())
    }

    pub fn toggle_delivery_time(&mut self, minutes: u32) -> bool {
        toggle(&mut self.delivery_times, minutes)
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn price_ranges(&self) -> &BTreeSet<String> {
        &self.price_ranges
    }

    pub fn delivery_times(&self) -> &BTreeSet<u32> {
        &self.delivery_times
    }

    pub fn is_category_selected(&self, filter_id: &str) -> bool {
        self.categories.contains(filter_id)
    }

    pub fn is_price_range_selected(&self, price_range_id: &str) -> bool {
        self.price_ranges.contains(price_range_id)
    }

    pub fn is_delivery_time_selected(&self, minutes: u32) -> bool {
        self.delivery_times.contains(&minutes)
    }

    /// No facet is applied
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.price_ranges.is_empty() && self.delivery_times.is_empty()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.price_ranges.clear();
        self.delivery_times.clear();
    }

    /// Whether `restaurant` passes every applied facet
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        let category_ok = self.categories.is_empty()
            || restaurant
                .filter_ids
                .iter()
                .any(|id| self.categories.contains(id));

        let price_ok = self.price_ranges.is_empty()
            || restaurant
                .price_range_id
                .as_ref()
                .is_some_and(|id| self.price_ranges.contains(id));

        let delivery_ok = self.delivery_times.is_empty()
            || self.delivery_times.contains(&restaurant.delivery_time_minutes);

        category_ok && price_ok && delivery_ok
    }

    /// The visible subset of `restaurants`, in source order
    ///
    /// Always evaluated against the full list passed in; an empty result is a
    /// valid answer.
    pub fn apply<'a>(&self, restaurants: &'a [EnrichedRestaurant]) -> Vec<&'a EnrichedRestaurant> {
        restaurants.iter().filter(|r| self.matches(r)).collect()
    }
}
