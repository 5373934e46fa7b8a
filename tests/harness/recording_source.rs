use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use offerdeck::domain::{AssetId, CatInfo, NftCollection, NftInfo};
use offerdeck::error::{Error, Result};
use offerdeck::port::MetadataSource;

/// Scripted in-memory metadata source that records every fetch.
#[derive(Clone, Default)]
pub struct RecordingSource {
    cats: Arc<Mutex<HashMap<String, CatInfo>>>,
    nfts: Arc<Mutex<HashMap<String, NftInfo>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

impl RecordingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cat(self, id: &str, code: &str, name: &str) -> Self {
        self.cats.lock().insert(
            id.to_string(),
            CatInfo {
                id: id.to_string(),
                code: code.to_string(),
                name: name.to_string(),
            },
        );
        self
    }

    pub fn with_nft(self, id: &str, name: &str, collection: &str) -> Self {
        self.nfts.lock().insert(
            id.to_string(),
            NftInfo {
                id: id.to_string(),
                name: name.to_string(),
                collection: NftCollection {
                    name: collection.to_string(),
                },
                description: String::new(),
                thumbnail_uri: format!("https://thumbs.test/{id}.png"),
            },
        );
        self
    }

    /// Make every fetch of `id` fail until `heal` is called for it.
    pub fn failing(self, id: &str) -> Self {
        self.failing.lock().insert(id.to_string());
        self
    }

    pub fn heal(&self, id: &str) {
        self.failing.lock().remove(id);
    }

    /// Delay every fetch, to hold resolutions in flight during a test.
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock() = Some(delay);
        self
    }

    /// Identifiers fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, id: &str) -> usize {
        self.calls.lock().iter().filter(|c| *c == id).count()
    }

    async fn record(&self, asset_id: &AssetId) -> Result<()> {
        self.calls.lock().push(asset_id.as_str().to_string());

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().contains(asset_id.as_str()) {
            return Err(Error::metadata_fetch(asset_id.as_str(), "scripted failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl MetadataSource for RecordingSource {
    async fn fetch_asset(&self, asset_id: &AssetId) -> Result<CatInfo> {
        self.record(asset_id).await?;
        self.cats
            .lock()
            .get(asset_id.as_str())
            .cloned()
            .ok_or_else(|| Error::metadata_fetch(asset_id.as_str(), "unknown CAT"))
    }

    async fn fetch_nft_metadata(&self, asset_id: &AssetId) -> Result<NftInfo> {
        self.record(asset_id).await?;
        self.nfts
            .lock()
            .get(asset_id.as_str())
            .cloned()
            .ok_or_else(|| Error::metadata_fetch(asset_id.as_str(), "unknown NFT"))
    }
}
