//! Metadata source trait boundary.
//!
//! Any remote service able to describe CATs and NFTs can back the asset
//! cache through this trait.

use async_trait::async_trait;

use crate::domain::{AssetId, CatInfo, NftInfo};
use crate::error::Result;

/// Remote supplier of human-readable asset metadata.
///
/// Implementations must be idempotent per identifier: the cache tolerates
/// duplicate in-flight fetches of the same id and keeps the last result.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Look up a fungible token by its asset identifier.
    async fn fetch_asset(&self, asset_id: &AssetId) -> Result<CatInfo>;

    /// Look up an NFT by its launcher identifier.
    async fn fetch_nft_metadata(&self, asset_id: &AssetId) -> Result<NftInfo>;
}
