//! HTTP metadata adapter backed by the Dexie and MintGarden REST APIs.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::MetadataConfig;
use crate::domain::{AssetId, CatInfo, NftCollection, NftInfo};
use crate::error::{Error, Result};
use crate::port::MetadataSource;

/// Metadata source over the public Dexie (CATs) and MintGarden (NFTs)
/// APIs.
pub struct HttpMetadataSource {
    client: Client,
    dexie_url: String,
    mintgarden_url: String,
}

impl HttpMetadataSource {
    #[must_use]
    pub fn new(config: MetadataConfig) -> Self {
        Self {
            client: Client::new(),
            dexie_url: config.dexie_url,
            mintgarden_url: config.mintgarden_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DexieAssetsResponse {
    #[serde(default)]
    assets: Vec<DexieAsset>,
}

#[derive(Debug, Deserialize)]
struct DexieAsset {
    id: String,
    code: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct MintGardenNft {
    id: String,
    data: MintGardenData,
}

#[derive(Debug, Deserialize)]
struct MintGardenData {
    metadata_json: MintGardenMetadata,
    thumbnail_uri: String,
}

#[derive(Debug, Deserialize)]
struct MintGardenMetadata {
    name: String,
    collection: MintGardenCollection,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct MintGardenCollection {
    name: String,
}

#[async_trait]
impl MetadataSource for HttpMetadataSource {
    async fn fetch_asset(&self, asset_id: &AssetId) -> Result<CatInfo> {
        let url = format!(
            "{}/assets?page_size=25&page=1&type=all&code={}",
            self.dexie_url, asset_id
        );

        debug!(asset_id = %asset_id, url = %url, "fetching CAT metadata");

        let response: DexieAssetsResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::metadata_fetch(asset_id.as_str(), e))?
            .json()
            .await
            .map_err(|e| Error::metadata_fetch(asset_id.as_str(), e))?;

        // Unknown tail hashes come back with an empty asset list; keep a
        // sentinel entry rather than refetching forever.
        let Some(asset) = response.assets.into_iter().next() else {
            info!(asset_id = %asset_id, "asset unknown to dexie");
            return Ok(CatInfo {
                id: "unknown".to_string(),
                code: "unknown".to_string(),
                name: "unknown".to_string(),
            });
        };

        Ok(CatInfo {
            id: asset.id,
            code: asset.code,
            name: asset.name,
        })
    }

    async fn fetch_nft_metadata(&self, asset_id: &AssetId) -> Result<NftInfo> {
        let url = format!("{}/nfts/{}", self.mintgarden_url, asset_id);

        debug!(asset_id = %asset_id, url = %url, "fetching NFT metadata");

        let nft: MintGardenNft = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::metadata_fetch(asset_id.as_str(), e))?
            .json()
            .await
            .map_err(|e| Error::metadata_fetch(asset_id.as_str(), e))?;

        Ok(NftInfo {
            id: nft.id,
            name: nft.data.metadata_json.name,
            collection: NftCollection {
                name: nft.data.metadata_json.collection.name,
            },
            description: nft.data.metadata_json.description,
            thumbnail_uri: nft.data.thumbnail_uri,
        })
    }
}
