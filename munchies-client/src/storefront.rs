//! Page state container
//!
//! [`DirectoryLoader`] runs the three page-level fetches plus status
//! enrichment and settles into a [`PageState`]. [`Storefront`] owns that state
//! together with the user's [`Selection`] and keeps the visible set in step
//! with both.

use std::sync::Arc;

use shared::{EnrichedRestaurant, Filter, PriceRange};
use tokio_util::sync::CancellationToken;

use crate::config::DEFAULT_STATUS_CONCURRENCY;
use crate::view::{FacetControls, RestaurantCard};
use crate::{
    Backend, ClientConfig, ClientError, ClientResult, Selection, delivery_time_facet,
    enrich_statuses,
};

/// Everything fetched for one page view
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub restaurants: Vec<EnrichedRestaurant>,
    pub filters: Vec<Filter>,
    pub price_ranges: Vec<PriceRange>,
    /// Derived from `restaurants`
    pub delivery_times: Vec<u32>,
}

impl Directory {
    pub fn new(
        restaurants: Vec<EnrichedRestaurant>,
        filters: Vec<Filter>,
        price_ranges: Vec<PriceRange>,
    ) -> Self {
        let delivery_times = delivery_time_facet(restaurants.iter().map(|r| &r.restaurant));
        Self {
            restaurants,
            filters,
            price_ranges,
            delivery_times,
        }
    }
}

/// Page-level data readiness
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Ready(Directory),
    /// A page-level fetch failed; carries a non-empty message
    Error(String),
}

/// Fetches and assembles a [`Directory`]
pub struct DirectoryLoader<B: ?Sized> {
    backend: Arc<B>,
    status_concurrency: usize,
}

impl<B: Backend + ?Sized> DirectoryLoader<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            status_concurrency: DEFAULT_STATUS_CONCURRENCY,
        }
    }

    pub fn from_config(backend: Arc<B>, config: &ClientConfig) -> Self {
        Self::new(backend).with_status_concurrency(config.status_concurrency)
    }

    pub fn with_status_concurrency(mut self, limit: usize) -> Self {
        self.status_concurrency = limit.max(1);
        self
    }

    /// List fetch followed by status enrichment
    async fn load_restaurants(
        &self,
        cancel: &CancellationToken,
    ) -> ClientResult<Vec<EnrichedRestaurant>> {
        let raw = self.backend.restaurants(cancel).await?;
        tracing::debug!(count = raw.len(), "Fetched restaurants");
        enrich_statuses(&*self.backend, raw, self.status_concurrency, cancel).await
    }

    /// Run the page load.
    ///
    /// Returns `None` if `cancel` fired; the caller is gone and nothing should
    /// be written back.
    pub async fn load(&self, cancel: &CancellationToken) -> Option<PageState> {
        let (restaurants, filters, price_ranges) = tokio::join!(
            self.load_restaurants(cancel),
            self.backend.filters(cancel),
            self.backend.price_ranges(cancel)
        );

        if cancel.is_cancelled() {
            tracing::debug!("Directory load cancelled");
            return None;
        }

        // The restaurant list decides the page error when several fetches fail.
        let restaurants = match restaurants {
            Ok(r) => r,
            Err(e) => return Some(page_error("restaurants", e)),
        };
        let filters = match filters {
            Ok(f) => f,
            Err(e) => return Some(page_error("filters", e)),
        };
        let price_ranges = match price_ranges {
            Ok(p) => p,
            Err(e) => return Some(page_error("price ranges", e)),
        };

        tracing::info!(
            restaurants = restaurants.len(),
            filters = filters.len(),
            price_ranges = price_ranges.len(),
            "Directory loaded"
        );
        Some(PageState::Ready(Directory::new(
            restaurants,
            filters,
            price_ranges,
        )))
    }
}

fn page_error(what: &str, error: ClientError) -> PageState {
    tracing::error!(error = %error, "Failed to load {}", what);
    PageState::Error(format!("Failed to load {}: {}", what, error))
}

/// State container for the directory page
#[derive(Debug, Clone)]
pub struct Storefront {
    state: PageState,
    selection: Selection,
    /// Indices into the directory's restaurants, rebuilt on every change
    visible: Vec<usize>,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}

impl Storefront {
    pub fn new() -> Self {
        Self {
            state: PageState::Loading,
            selection: Selection::new(),
            visible: Vec::new(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn directory(&self) -> Option<&Directory> {
        match &self.state {
            PageState::Ready(directory) => Some(directory),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            PageState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PageState::Loading)
    }

    /// Replace the page state (new source data); selections are kept
    pub fn set_state(&mut self, state: PageState) {
        self.state = state;
        self.recompute();
    }

    /// Load the page through `loader`. A cancelled load leaves the state untouched.
    pub async fn load<B>(&mut self, loader: &DirectoryLoader<B>, cancel: &CancellationToken)
    where
        B: Backend + ?Sized,
    {
        if let Some(state) = loader.load(cancel).await {
            self.set_state(state);
        }
    }

    pub fn toggle_category(&mut self, filter_id: impl Into<String>) -> bool {
        let selected = self.selection.toggle_category(filter_id);
        self.recompute();
        selected
    }

    pub fn toggle_price_range(&mut self, price_range_id: impl Into<String>) -> bool {
        let selected = self.selection.toggle_price_range(price_range_id);
        self.recompute();
        selected
    }

    pub fn toggle_delivery_time(&mut self, minutes: u32) -> bool {
        let selected = self.selection.toggle_delivery_time(minutes);
        self.recompute();
        selected
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.recompute();
    }

    /// Restaurants passing the current selection, in source order
    pub fn visible(&self) -> Vec<&EnrichedRestaurant> {
        match self.directory() {
            Some(directory) => self
                .visible
                .iter()
                .filter_map(|&i| directory.restaurants.get(i))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn cards(&self, config: &ClientConfig) -> Vec<RestaurantCard> {
        self.visible()
            .into_iter()
            .map(|r| RestaurantCard::new(r, config))
            .collect()
    }

    pub fn facet_controls(&self, config: &ClientConfig) -> Option<FacetControls> {
        self.directory()
            .map(|directory| FacetControls::new(directory, &self.selection, config))
    }

    fn recompute(&mut self) {
        self.visible = match &self.state {
            PageState::Ready(directory) => directory
                .restaurants
                .iter()
                .enumerate()
                .filter(|(_, r)| self.selection.matches(r))
                .map(|(i, _)| i)
                .collect(),
            _ => Vec::new(),
        };
    }
}
