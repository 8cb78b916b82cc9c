//! Shared request-handler state

use price_store::PriceStore;
use std::sync::Arc;
use std::time::Duration;

/// State injected into every request handler.
///
/// The store is constructed before the server binds and never mutated
/// afterwards, so handlers share it without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Immutable reshaped price table
    pub store: Arc<PriceStore>,
    /// Upper bound on a single model fit
    pub fit_timeout: Duration,
}

impl AppState {
    pub fn new(store: PriceStore, fit_timeout: Duration) -> Self {
        Self {
            store: Arc::new(store),
            fit_timeout,
        }
    }
}
