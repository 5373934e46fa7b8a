//! Shared session state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::OfferLedger;
use crate::service::AssetCache;

/// State shared between the event loop and any presentation consumer.
///
/// The ledger and cache are single-writer (the event loop and the
/// resolution tasks respectively) and freely readable from elsewhere.
pub struct AppState {
    ledger: OfferLedger,
    assets: Arc<AssetCache>,
    num_peers: AtomicUsize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ledger: OfferLedger::new(),
            assets: Arc::new(AssetCache::new()),
            num_peers: AtomicUsize::new(0),
        }
    }

    pub fn ledger(&self) -> &OfferLedger {
        &self.ledger
    }

    pub fn assets(&self) -> &Arc<AssetCache> {
        &self.assets
    }

    pub fn num_peers(&self) -> usize {
        self.num_peers.load(Ordering::Relaxed)
    }

    pub fn set_num_peers(&self, count: usize) {
        self.num_peers.store(count, Ordering::Relaxed);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
