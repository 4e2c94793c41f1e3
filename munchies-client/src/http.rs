//! HTTP backend for the restaurant API
//!
//! [`Backend`] is the seam between the directory pipeline and the network.
//! [`NetworkBackend`] talks to the real service; tests substitute in-memory
//! implementations.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    Filter, FiltersResponse, OpenStatus, OpenStatusResponse, PriceRange, PriceRangesResponse,
    Restaurant, RestaurantsResponse,
};
use tokio_util::sync::CancellationToken;
use urlencoding::encode;

use crate::{ClientConfig, ClientError, ClientResult};

/// Restaurant backend operations
///
/// Every call takes a cancellation token and resolves to
/// [`ClientError::Cancelled`] once it fires.
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /api/restaurants`
    async fn restaurants(&self, cancel: &CancellationToken) -> ClientResult<Vec<Restaurant>>;

    /// `GET /api/filter`
    async fn filters(&self, cancel: &CancellationToken) -> ClientResult<Vec<Filter>>;

    /// `GET /api/price-range`
    async fn price_ranges(&self, cancel: &CancellationToken) -> ClientResult<Vec<PriceRange>>;

    /// `GET /api/open/{restaurant_id}`
    async fn open_status(
        &self,
        restaurant_id: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<OpenStatus>;
}

/// Network backend over `reqwest`
#[derive(Debug, Clone)]
pub struct NetworkBackend {
    client: Client,
    base_url: String,
}

impl NetworkBackend {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(url = %url, "GET");

        tokio::select! {
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            result = async {
                let response = self.client.get(&url).send().await?;
                Self::handle_response(response).await
            } => result,
        }
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, text));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl Backend for NetworkBackend {
    async fn restaurants(&self, cancel: &CancellationToken) -> ClientResult<Vec<Restaurant>> {
        let resp: RestaurantsResponse = self.get("/api/restaurants", cancel).await?;
        Ok(resp.into_inner())
    }

    async fn filters(&self, cancel: &CancellationToken) -> ClientResult<Vec<Filter>> {
        let resp: FiltersResponse = self.get("/api/filter", cancel).await?;
        Ok(resp.into_inner())
    }

    async fn price_ranges(&self, cancel: &CancellationToken) -> ClientResult<Vec<PriceRange>> {
        let resp: PriceRangesResponse = self.get("/api/price-range", cancel).await?;
        Ok(resp.into_inner())
    }

    async fn open_status(
        &self,
        restaurant_id: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<OpenStatus> {
        if restaurant_id.is_empty() {
            return Err(ClientError::InvalidResponse("Empty restaurant id".into()));
        }
        let resp: OpenStatusResponse = self
            .get(&format!("/api/open/{}", encode(restaurant_id)), cancel)
            .await?;
        Ok(resp.status())
    }
}
