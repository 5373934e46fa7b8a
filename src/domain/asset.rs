//! Asset identifiers, classification, and resolved metadata.
//!
//! Every asset referenced by an offer is named by an opaque string
//! identifier. Classification into XCH / NFT / CAT is a pure function of
//! that string and never touches the network.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Short alias for the native currency.
pub const XCH_ALIAS: &str = "xch";

/// Long-form identifier for the native currency (64 zero hex digits).
pub const XCH_ASSET_ID: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Bech32m prefix carried by every NFT launcher identifier.
pub const NFT_PREFIX: &str = "nft1";

/// Mojos per XCH.
pub const MOJOS_PER_XCH: u64 = 1_000_000_000_000;

/// CAT tokens carry three decimal places of on-chain precision.
pub const CAT_PRECISION: u64 = 1_000;

/// Asset identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

/// The three disjoint asset classes an identifier can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// The native currency (XCH), by alias or by all-zero identifier.
    Xch,
    /// A non-fungible token, identified by its `nft1` launcher address.
    Nft,
    /// A fungible CAT token, identified by its tail hash.
    Cat,
}

impl AssetId {
    /// Create a new AssetId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the asset ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this identifier. Total and pure: every string maps to
    /// exactly one class.
    pub fn kind(&self) -> AssetKind {
        if self.0 == XCH_ALIAS || self.0 == XCH_ASSET_ID {
            AssetKind::Xch
        } else if self.0.starts_with(NFT_PREFIX) {
            AssetKind::Nft
        } else {
            AssetKind::Cat
        }
    }

    pub fn is_xch(&self) -> bool {
        self.kind() == AssetKind::Xch
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Resolved metadata for a fungible asset (CAT or the native currency).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatInfo {
    pub id: String,
    /// Short ticker, e.g. `XCH` or `SBX`.
    pub code: String,
    pub name: String,
}

/// Resolved metadata for an NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftInfo {
    pub id: String,
    pub name: String,
    pub collection: NftCollection,
    pub description: String,
    pub thumbnail_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftCollection {
    pub name: String,
}

/// Resolved asset metadata, tagged by asset class.
///
/// The variant is always determined by [`AssetId::kind`], never by probing
/// which fields happen to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetMetadata {
    Nft(NftInfo),
    Cat(CatInfo),
}

impl AssetMetadata {
    /// Metadata for the native currency. A well-known constant, never
    /// fetched remotely.
    pub fn xch() -> Self {
        AssetMetadata::Cat(CatInfo {
            id: XCH_ALIAS.to_string(),
            code: "XCH".to_string(),
            name: "Chia".to_string(),
        })
    }

    /// Short human-readable label: ticker code for CATs, name for NFTs.
    pub fn display_name(&self) -> &str {
        match self {
            AssetMetadata::Cat(cat) => &cat.code,
            AssetMetadata::Nft(nft) => &nft.name,
        }
    }

    /// Icon location for this asset, if it has one.
    pub fn icon_uri(&self) -> Option<String> {
        match self {
            AssetMetadata::Cat(cat) if cat.id == XCH_ALIAS => {
                Some("https://icons.dexie.space/xch.webp".to_string())
            }
            AssetMetadata::Cat(cat) => Some(format!("https://icons.dexie.space/{}.webp", cat.id)),
            AssetMetadata::Nft(nft) if nft.thumbnail_uri.is_empty() => None,
            AssetMetadata::Nft(nft) => Some(nft.thumbnail_uri.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_xch_by_alias_and_by_zero_id() {
        assert_eq!(AssetId::from("xch").kind(), AssetKind::Xch);
        assert_eq!(AssetId::from(XCH_ASSET_ID).kind(), AssetKind::Xch);
        assert!(AssetId::from("xch").is_xch());
    }

    #[test]
    fn classifies_nft_by_prefix() {
        let id = AssetId::from("nft1qqk4rg0kvqrpdgvmlrxpslt0rx2mhvg0m228wqtqpsqde2rz7ufsqx5c0dt");
        assert_eq!(id.kind(), AssetKind::Nft);
    }

    #[test]
    fn classifies_everything_else_as_cat() {
        let tail = "a628c1c2c6fcb74d53746157e438e108eab5c0bb3e5c80ff9b1910b3e4832e3d";
        assert_eq!(AssetId::from(tail).kind(), AssetKind::Cat);
        assert_eq!(AssetId::from("").kind(), AssetKind::Cat);
        assert_eq!(AssetId::from("nft").kind(), AssetKind::Cat);
    }

    #[test]
    fn classification_is_pure() {
        let id = AssetId::from("xch");
        assert_eq!(id.kind(), id.kind());
    }

    #[test]
    fn xch_constant_metadata() {
        let meta = AssetMetadata::xch();
        assert_eq!(meta.display_name(), "XCH");
        assert_eq!(
            meta.icon_uri().as_deref(),
            Some("https://icons.dexie.space/xch.webp")
        );
    }

    #[test]
    fn cat_icon_is_derived_from_id() {
        let meta = AssetMetadata::Cat(CatInfo {
            id: "abc123".into(),
            code: "TST".into(),
            name: "Test".into(),
        });
        assert_eq!(
            meta.icon_uri().as_deref(),
            Some("https://icons.dexie.space/abc123.webp")
        );
    }
}
