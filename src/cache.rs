//! Short-lived cache for the reservation summary list.
//!
//! The cache holds a single value: the full list produced by [`summarize`].
//! It is owned by the HTTP state and shared through an `Arc`, never global.

use crate::core::{ReservationSummary, summarize};
use crate::db::{JsonStore, load_snapshot};
use crate::errors::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

/// How long a stored summary list stays fresh unless configured otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Shared, cheaply clonable summary list.
pub type SharedSummaries = Arc<Vec<ReservationSummary>>;

#[derive(Debug)]
struct CachedSummaries {
    summaries: SharedSummaries,
    stored_at: Instant,
}

/// Single-slot TTL cache.
///
/// Either empty or populated with one value and the instant it was stored.
/// Expired values are dropped lazily by [`ReservationCache::fetch`].
#[derive(Debug)]
pub struct ReservationCache {
    slot: RwLock<Option<CachedSummaries>>,
    ttl: Duration,
}

impl Default for ReservationCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ReservationCache {
    /// Creates an empty cache whose values stay fresh for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// Freshness window of stored values.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Replaces the cached value and restarts its freshness window.
    pub async fn store(&self, summaries: SharedSummaries) {
        let mut slot = self.slot.write().await;
        *slot = Some(CachedSummaries {
            summaries,
            stored_at: Instant::now(),
        });
    }

    /// Returns the cached value if it was stored no more than `ttl` ago.
    ///
    /// An expired value is cleared, leaving the cache empty.
    pub async fn fetch(&self) -> Option<SharedSummaries> {
        {
            let slot = self.slot.read().await;
            match slot.as_ref() {
                None => return None,
                Some(cached) if self.is_fresh(cached) => {
                    return Some(Arc::clone(&cached.summaries));
                }
                Some(_) => {}
            }
        }

        let mut slot = self.slot.write().await;
        // Another task may have stored a fresh value between the two locks
        match slot.as_ref() {
            Some(cached) if self.is_fresh(cached) => Some(Arc::clone(&cached.summaries)),
            Some(_) => {
                debug!("Reservation summaries cache expired after {:?}", self.ttl);
                *slot = None;
                None
            }
            None => None,
        }
    }

    /// Empties the cache regardless of freshness.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }

    fn is_fresh(&self, cached: &CachedSummaries) -> bool {
        cached.stored_at.elapsed() <= self.ttl
    }
}

/// Returns the reservation summaries, recomputing them only on a cache miss.
///
/// On a miss both datasets are read, summarized on a blocking worker and stored
/// before returning. Concurrent misses may each recompute; the last store wins.
///
/// # Errors
/// Returns [`Error::Aggregation`](crate::errors::Error::Aggregation) if the summarizing task panics. Nothing is
/// stored in that case.
pub async fn get_reservation_summaries(
    store: &JsonStore,
    cache: &ReservationCache,
) -> Result<SharedSummaries> {
    if let Some(summaries) = cache.fetch().await {
        debug!("Serving {} reservation summaries from cache", summaries.len());
        return Ok(summaries);
    }

    info!("Refreshing reservation summaries cache...");
    let snapshot = load_snapshot(store).await;
    let summaries: SharedSummaries = Arc::new(
        tokio::task::spawn_blocking(move || {
            summarize(&snapshot.assignments, &snapshot.charges)
        })
        .await?,
    );
    cache.store(Arc::clone(&summaries)).await;
    info!(
        "Reservation summaries cache refreshed with {} reservations.",
        summaries.len()
    );
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{assignment, charge, init_test_tracing, write_datasets};

    fn sample() -> SharedSummaries {
        Arc::new(summarize(
            &[assignment(1, "Spa", "R1")],
            &[charge(1, true, 50.0)],
        ))
    }

    #[tokio::test]
    async fn test_fetch_on_empty_cache_misses() {
        let cache = ReservationCache::default();
        assert!(cache.fetch().await.is_none());
        assert_eq!(cache.ttl(), Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_store_then_fetch_returns_value() {
        let cache = ReservationCache::default();
        let summaries = sample();
        cache.store(Arc::clone(&summaries)).await;

        let fetched = cache.fetch().await.unwrap();
        assert!(Arc::ptr_eq(&fetched, &summaries));
    }

    #[tokio::test(start_paused = true)]
    async fn test_value_expires_after_ttl() {
        let cache = ReservationCache::new(Duration::from_secs(60));
        cache.store(sample()).await;

        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(cache.fetch().await.is_some(), "exactly at the TTL is still fresh");

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(cache.fetch().await.is_none());

        // Expired values are gone for good, not just hidden
        assert!(cache.slot.read().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_restarts_freshness_window() {
        let cache = ReservationCache::new(Duration::from_secs(60));
        cache.store(sample()).await;

        tokio::time::advance(Duration::from_secs(45)).await;
        cache.store(sample()).await;
        tokio::time::advance(Duration::from_secs(45)).await;

        assert!(cache.fetch().await.is_some());
    }

    #[tokio::test]
    async fn test_invalidate_clears_fresh_value() {
        let cache = ReservationCache::default();
        cache.store(sample()).await;

        cache.invalidate().await;
        assert!(cache.fetch().await.is_none());

        // Invalidating an empty cache is harmless
        cache.invalidate().await;
        assert!(cache.fetch().await.is_none());
    }

    #[tokio::test]
    async fn test_get_reservation_summaries_caches_until_invalidated() -> Result<()> {
        init_test_tracing();
        let dir = tempfile::tempdir().unwrap();
        write_datasets(
            dir.path(),
            &[assignment(1, "Spa", "R1")],
            &[charge(1, true, 50.0)],
        );
        let store = JsonStore::new(dir.path());
        let cache = ReservationCache::default();

        let first = get_reservation_summaries(&store, &cache).await?;
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].amount, 50.0);

        // Changes on disk are not visible while the cache is fresh
        write_datasets(
            dir.path(),
            &[assignment(1, "Spa", "R1"), assignment(2, "Dinner", "R2")],
            &[charge(1, true, 50.0), charge(2, true, 30.0)],
        );
        let second = get_reservation_summaries(&store, &cache).await?;
        assert!(Arc::ptr_eq(&first, &second));

        cache.invalidate().await;
        let third = get_reservation_summaries(&store, &cache).await?;
        assert_eq!(third.len(), 2);
        assert_eq!(third[1].reservation_uuid, "R2");
        assert_eq!(third[1].amount, 30.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_reservation_summaries_with_no_data_is_empty() -> Result<()> {
        init_test_tracing();
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let cache = ReservationCache::default();

        let summaries = get_reservation_summaries(&store, &cache).await?;
        assert!(summaries.is_empty());
        // The empty result is cached like any other
        assert!(cache.fetch().await.is_some());
        Ok(())
    }
}
