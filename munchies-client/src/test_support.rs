//! In-memory backend for unit tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::{Filter, OpenStatus, PriceRange, Restaurant};
use tokio_util::sync::CancellationToken;

use crate::{Backend, ClientError, ClientResult};

pub(crate) fn restaurant(
    id: &str,
    filter_ids: &[&str],
    price_range_id: Option<&str>,
    delivery_time_minutes: u32,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: format!("Restaurant {}", id),
        rating: 4.5,
        filter_ids: filter_ids.iter().map(|s| s.to_string()).collect(),
        image_url: format!("/images/{}.png", id),
        delivery_time_minutes,
        price_range_id: price_range_id.map(str::to_string),
    }
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    restaurants: Option<Vec<Restaurant>>,
    filters: Option<Vec<Filter>>,
    price_ranges: Option<Vec<PriceRange>>,
    /// `None` makes the lookup fail
    statuses: HashMap<String, Option<bool>>,
    delay_yields: usize,
    /// Per-restaurant override of `delay_yields`
    delays: HashMap<String, usize>,
    /// Restaurant ids in the order their lookups answered
    pub(crate) completed: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    pub(crate) max_in_flight: AtomicUsize,
    pub(crate) status_calls: AtomicUsize,
}

impl FakeBackend {
    /// Backend with empty facet lists and no restaurants
    pub(crate) fn new() -> Self {
        Self {
            restaurants: Some(Vec::new()),
            filters: Some(Vec::new()),
            price_ranges: Some(Vec::new()),
            ..Default::default()
        }
    }

    pub(crate) fn with_restaurants(mut self, restaurants: Vec<Restaurant>) -> Self {
        self.restaurants = Some(restaurants);
        self
    }

    pub(crate) fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = Some(filters);
        self
    }

    pub(crate) fn with_price_ranges(mut self, price_ranges: Vec<PriceRange>) -> Self {
        self.price_ranges = Some(price_ranges);
        self
    }

    pub(crate) fn failing_restaurants(mut self) -> Self {
        self.restaurants = None;
        self
    }

    pub(crate) fn failing_filters(mut self) -> Self {
        self.filters = None;
        self
    }

    pub(crate) fn failing_price_ranges(mut self) -> Self {
        self.price_ranges = None;
        self
    }

    pub(crate) fn with_status(mut self, id: &str, is_open: bool) -> Self {
        self.statuses.insert(id.to_string(), Some(is_open));
        self
    }

    pub(crate) fn with_status_error(mut self, id: &str) -> Self {
        self.statuses.insert(id.to_string(), None);
        self
    }

    /// Make each status lookup yield this many times before answering
    pub(crate) fn with_delay_yields(mut self, yields: usize) -> Self {
        self.delay_yields = yields;
        self
    }

    /// Make the lookup for `id` yield `yields` times before answering
    pub(crate) fn with_delay_for(mut self, id: &str, yields: usize) -> Self {
        self.delays.insert(id.to_string(), yields);
        self
    }

    fn server_error() -> ClientError {
        ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into())
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn restaurants(&self, cancel: &CancellationToken) -> ClientResult<Vec<Restaurant>> {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        self.restaurants.clone().ok_or_else(Self::server_error)
    }

    async fn filters(&self, cancel: &CancellationToken) -> ClientResult<Vec<Filter>> {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        self.filters.clone().ok_or_else(Self::server_error)
    }

    async fn price_ranges(&self, cancel: &CancellationToken) -> ClientResult<Vec<PriceRange>> {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        self.price_ranges.clone().ok_or_else(Self::server_error)
    }

    async fn open_status(
        &self,
        restaurant_id: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<OpenStatus> {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let yields = self
            .delays
            .get(restaurant_id)
            .copied()
            .unwrap_or(self.delay_yields);
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if let Ok(mut completed) = self.completed.lock() {
            completed.push(restaurant_id.to_string());
        }
        match self.statuses.get(restaurant_id) {
            Some(Some(is_open)) => Ok(OpenStatus::from_is_open(*is_open)),
            Some(None) => Err(ClientError::from_status(
                StatusCode::SERVICE_UNAVAILABLE,
                String::new(),
            )),
            None => Err(ClientError::NotFound(restaurant_id.to_string())),
        }
    }
}
