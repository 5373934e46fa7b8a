//! Session-lifetime cache of resolved asset metadata.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{AssetId, AssetKind, AssetMetadata};
use crate::error::Result;
use crate::port::MetadataSource;

/// Lazily-populated, never-evicted map from asset identifier to resolved
/// metadata.
///
/// Entries are written exactly once per identifier under normal operation.
/// Two racing resolutions of the same unseen id may both fetch; that is
/// tolerated because the fetch is idempotent and the last write wins on an
/// equivalent value. Fetch failures are never cached, so a failed id is
/// retried the next time a resolution pass encounters it.
pub struct AssetCache {
    assets: RwLock<HashMap<AssetId, AssetMetadata>>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self {
            assets: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshot of the cached metadata for an identifier. XCH is a
    /// constant and always resolvable without occupying a cache entry.
    pub fn get(&self, asset_id: &AssetId) -> Option<AssetMetadata> {
        if asset_id.is_xch() {
            return Some(AssetMetadata::xch());
        }
        self.assets.read().get(asset_id).cloned()
    }

    pub fn contains(&self, asset_id: &AssetId) -> bool {
        asset_id.is_xch() || self.assets.read().contains_key(asset_id)
    }

    /// Resolve an identifier to metadata: constant for XCH, cached value
    /// when present, otherwise a remote fetch routed by asset class and
    /// committed to the cache before returning.
    pub async fn resolve(
        &self,
        asset_id: &AssetId,
        source: &dyn MetadataSource,
    ) -> Result<AssetMetadata> {
        if let Some(metadata) = self.get(asset_id) {
            debug!(asset_id = %asset_id, "cache hit");
            return Ok(metadata);
        }

        let metadata = match asset_id.kind() {
            AssetKind::Xch => return Ok(AssetMetadata::xch()),
            AssetKind::Nft => AssetMetadata::Nft(source.fetch_nft_metadata(asset_id).await?),
            AssetKind::Cat => AssetMetadata::Cat(source.fetch_asset(asset_id).await?),
        };

        self.assets
            .write()
            .insert(asset_id.clone(), metadata.clone());

        Ok(metadata)
    }

    /// Number of cached entries (the XCH constant is not counted).
    pub fn len(&self) -> usize {
        self.assets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new()
    }
}
