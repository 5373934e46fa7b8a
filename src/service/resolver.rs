//! Resolution driver: keeps the asset cache in step with the ledger.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::{AssetId, OfferLedger};
use crate::port::MetadataSource;

use super::cache::AssetCache;

/// Drives metadata resolution after every ledger change.
///
/// Each pass takes the asset-id union of the entire ledger, not just the
/// newest offer, so identifiers that failed to resolve earlier are retried
/// as long as any live offer still references them. Resolution is
/// best-effort enrichment: a failing identifier never blocks other
/// identifiers or ledger updates.
pub struct Resolver {
    cache: Arc<AssetCache>,
    source: Arc<dyn MetadataSource>,
    in_flight: Arc<Mutex<HashSet<AssetId>>>,
}

impl Resolver {
    pub fn new(cache: Arc<AssetCache>, source: Arc<dyn MetadataSource>) -> Self {
        Self {
            cache,
            source,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn cache(&self) -> &Arc<AssetCache> {
        &self.cache
    }

    /// Spawn one resolution task per referenced identifier that is neither
    /// cached nor already in flight. Tasks for distinct identifiers run
    /// concurrently with no ordering guarantee.
    pub fn resolve_missing(&self, ledger: &OfferLedger) {
        for asset_id in ledger.asset_ids() {
            if self.cache.contains(&asset_id) {
                continue;
            }
            if !self.in_flight.lock().insert(asset_id.clone()) {
                continue;
            }

            let cache = Arc::clone(&self.cache);
            let source = Arc::clone(&self.source);
            let in_flight = Arc::clone(&self.in_flight);

            tokio::spawn(async move {
                match cache.resolve(&asset_id, source.as_ref()).await {
                    Ok(metadata) => {
                        debug!(
                            asset_id = %asset_id,
                            name = metadata.display_name(),
                            "asset resolved"
                        );
                    }
                    // Not cached; retried on the next pass that sees it.
                    Err(error) => {
                        warn!(asset_id = %asset_id, error = %error, "metadata fetch failed");
                    }
                }
                in_flight.lock().remove(&asset_id);
            });
        }
    }
}
