//! Native-currency price derivation for display.
//!
//! This is a product decision, not a pricing engine: an offer gets exactly
//! one XCH-denominated price against exactly one counterpart asset. When a
//! side carries several non-native assets, the first one in wire order is
//! taken and the price is approximate. That tie-break is deliberate; keep
//! it.

use rust_decimal::Decimal;

use super::amount::{format_amount, format_scaled};
use super::asset::{AssetId, AssetKind, CAT_PRECISION, MOJOS_PER_XCH, XCH_ALIAS};
use super::offer::AssetAmounts;

const NOT_AVAILABLE: &str = "N/A";

/// Derive a display price in XCH for an offer, or `"N/A"` when no
/// native-currency side exists or no counterpart asset is available.
pub fn derive_price(offered: &AssetAmounts, requested: &AssetAmounts) -> String {
    if let Some(xch_requested) = native_amount(requested) {
        counterpart_price(xch_requested, offered, |xch, counterpart| {
            (xch / Decimal::from(MOJOS_PER_XCH))
                .checked_div(counterpart / Decimal::from(CAT_PRECISION))
                .map(|price| price * Decimal::from(CAT_PRECISION))
        })
    } else if let Some(xch_offered) = native_amount(offered) {
        counterpart_price(xch_offered, requested, |xch, counterpart| {
            (xch / Decimal::from(1_000_000_000u64))
                .checked_div(counterpart / Decimal::from(CAT_PRECISION))
        })
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Raw amount of the native-currency key on a side, if present.
fn native_amount(side: &AssetAmounts) -> Option<u64> {
    side.iter()
        .find(|(id, _)| id.is_xch())
        .map(|(_, amount)| *amount)
}

/// Price the given XCH amount against the first non-native entry of the
/// counterpart side.
fn counterpart_price(
    xch_amount: u64,
    counterpart_side: &AssetAmounts,
    per_unit: impl Fn(Decimal, Decimal) -> Option<Decimal>,
) -> String {
    let Some((other_id, other_amount)) = counterpart_side.iter().find(|(id, _)| !id.is_xch())
    else {
        return NOT_AVAILABLE.to_string();
    };

    // NFTs trade in whole units; the XCH side is the price.
    if other_id.kind() == AssetKind::Nft {
        return format!("{} XCH", format_amount(xch_amount, &AssetId::from(XCH_ALIAS)));
    }

    match per_unit(Decimal::from(xch_amount), Decimal::from(*other_amount)) {
        Some(price) => format!("{} XCH", format_scaled(price, other_id)),
        // Zero-amount counterpart; no meaningful price.
        None => NOT_AVAILABLE.to_string(),
    }
}
