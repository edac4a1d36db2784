//! Handler state: the dataset store and the summary cache.

use crate::cache::ReservationCache;
use crate::db::JsonStore;
use std::sync::Arc;

/// Shared state handed to every handler.
///
/// Built once at startup; the cache lives here instead of in a global.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Dataset reader
    pub store: Arc<JsonStore>,
    /// Summary cache
    pub cache: Arc<ReservationCache>,
}

impl AppState {
    /// Bundles a store and a cache into handler state.
    #[must_use]
    pub fn new(store: JsonStore, cache: ReservationCache) -> Self {
        Self {
            store: Arc::new(store),
            cache: Arc::new(cache),
        }
    }
}
