//! Status enrichment
//!
//! Attaches the live open/closed status to every restaurant of a list fetch.
//! A failed lookup never fails the stage: the restaurant keeps its place in
//! the list with [`OpenStatus::Unknown`].

use futures::future::join_all;
use shared::{EnrichedRestaurant, OpenStatus, Restaurant};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::{Backend, ClientError, ClientResult};

/// Resolve the status of every restaurant, at most `concurrency` at a time.
///
/// The result has the same length and order as `restaurants`. The only error
/// is [`ClientError::Cancelled`], returned when `cancel` fired while lookups
/// were outstanding.
pub async fn enrich_statuses<B>(
    backend: &B,
    restaurants: Vec<Restaurant>,
    concurrency: usize,
    cancel: &CancellationToken,
) -> ClientResult<Vec<EnrichedRestaurant>>
where
    B: Backend + ?Sized,
{
    let semaphore = Semaphore::new(concurrency.max(1));

    let lookups = restaurants
        .iter()
        .map(|restaurant| lookup_status(backend, &semaphore, &restaurant.id, cancel));
    let statuses = join_all(lookups).await;

    if cancel.is_cancelled() {
        return Err(ClientError::Cancelled);
    }

    let unknown = statuses
        .iter()
        .filter(|s| **s == OpenStatus::Unknown)
        .count();
    if unknown > 0 {
        tracing::info!(
            total = restaurants.len(),
            unknown,
            "Status enrichment finished with unresolved restaurants"
        );
    }

    Ok(restaurants
        .into_iter()
        .zip(statuses)
        .map(|(restaurant, status)| EnrichedRestaurant::new(restaurant, status))
        .collect())
}

async fn lookup_status<B>(
    backend: &B,
    semaphore: &Semaphore,
    restaurant_id: &str,
    cancel: &CancellationToken,
) -> OpenStatus
where
    B: Backend + ?Sized,
{
    // The semaphore is never closed while the join is alive.
    let Ok(_permit) = semaphore.acquire().await else {
        return OpenStatus::Unknown;
    };

    match backend.open_status(restaurant_id, cancel).await {
        Ok(status) => status,
        Err(ClientError::Cancelled) => OpenStatus::Unknown,
        Err(e) => {
            tracing::warn!(restaurant_id = %restaurant_id, error = %e, "Status lookup failed");
            OpenStatus::Unknown
        }
    }
}
