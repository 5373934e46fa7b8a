//! Offer payloads as delivered by the peer network.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::asset::AssetId;

/// Asset identifier to raw amount, in wire order.
///
/// Insertion order is load-bearing: the price deriver picks the first
/// non-native entry of a side, so the map must preserve the order the
/// transport supplied.
pub type AssetAmounts = IndexMap<AssetId, u64>;

/// Offer identifier - newtype for type safety.
///
/// Stable across re-delivery of the same offer; the ledger deduplicates
/// on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OfferId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for OfferId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A trade proposal received from the peer network.
///
/// Immutable once constructed; the ledger replaces entries wholesale and
/// never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub offered_assets: AssetAmounts,
    pub requested_assets: AssetAmounts,
    /// The serialized, re-broadcastable offer. Opaque here, preserved
    /// verbatim.
    pub offer_string: String,
}
