//! Thread-safe working set of live offers.

use std::collections::HashSet;

use parking_lot::RwLock;

use super::asset::AssetId;
use super::offer::{Offer, OfferId};

/// Deduplicated, newest-first sequence of offers.
///
/// Single-writer (the event loop), multi-reader. Updates happen under one
/// write lock, so readers never observe a half-applied update. The ledger
/// itself is unbounded; any display bounding is a presentation concern.
pub struct OfferLedger {
    offers: RwLock<Vec<Offer>>,
}

impl OfferLedger {
    pub fn new() -> Self {
        Self {
            offers: RwLock::new(Vec::new()),
        }
    }

    /// Apply an incoming offer: drop any previous entry with the same id,
    /// then prepend. Last write wins for re-delivered offers.
    pub fn apply(&self, offer: Offer) {
        let mut offers = self.offers.write();
        offers.retain(|existing| existing.id != offer.id);
        offers.insert(0, offer);
    }

    /// Snapshot of the current sequence, newest first.
    pub fn snapshot(&self) -> Vec<Offer> {
        self.offers.read().clone()
    }

    pub fn get(&self, id: &OfferId) -> Option<Offer> {
        self.offers
            .read()
            .iter()
            .find(|offer| &offer.id == id)
            .cloned()
    }

    /// Union of every asset identifier referenced by any live offer, on
    /// either side. The resolution driver works from this set so that
    /// identifiers from older offers still resolve eventually.
    pub fn asset_ids(&self) -> HashSet<AssetId> {
        let offers = self.offers.read();
        let mut ids = HashSet::new();
        for offer in offers.iter() {
            ids.extend(offer.offered_assets.keys().cloned());
            ids.extend(offer.requested_assets.keys().cloned());
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.offers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OfferLedger {
    fn default() -> Self {
        Self::new()
    }
}
