//! Display formatting for raw on-chain amounts.
//!
//! Amounts arrive as raw unsigned integers (mojos for XCH, thousandths for
//! CATs, whole units for NFTs). Display values are always truncated toward
//! zero, never rounded up: `1_999_999_999_999` mojos is `1.9999` XCH, not
//! `2`.

use rust_decimal::{Decimal, RoundingStrategy};

use super::asset::{AssetId, AssetKind, CAT_PRECISION, MOJOS_PER_XCH};

/// Format a raw integer amount for display, scaled by asset class.
pub fn format_amount(amount: u64, asset_id: &AssetId) -> String {
    format_scaled(Decimal::from(amount), asset_id)
}

/// Format an already-fractional raw amount, scaled by asset class.
///
/// The price deriver feeds intermediate quotients through here so that the
/// final value picks up the counterpart asset's scaling.
pub fn format_scaled(amount: Decimal, asset_id: &AssetId) -> String {
    match asset_id.kind() {
        AssetKind::Xch => truncate_4dp(amount / Decimal::from(MOJOS_PER_XCH)),
        // NFT amounts are counts, not scaled currency.
        AssetKind::Nft => amount.normalize().to_string(),
        AssetKind::Cat => truncate_4dp(amount / Decimal::from(CAT_PRECISION)),
    }
}

fn truncate_4dp(value: Decimal) -> String {
    value
        .round_dp_with_strategy(4, RoundingStrategy::ToZero)
        .normalize()
        .to_string()
}
