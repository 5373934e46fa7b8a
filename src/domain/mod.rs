//! Transport-agnostic domain logic: asset classification, amount and
//! price formatting, and the live offer ledger.

mod amount;
mod asset;
mod ledger;
mod offer;
mod price;

pub use amount::{format_amount, format_scaled};
pub use asset::{
    AssetId, AssetKind, AssetMetadata, CatInfo, NftCollection, NftInfo, CAT_PRECISION,
    MOJOS_PER_XCH, NFT_PREFIX, XCH_ALIAS, XCH_ASSET_ID,
};
pub use ledger::OfferLedger;
pub use offer::{AssetAmounts, Offer, OfferId};
pub use price::derive_price;
