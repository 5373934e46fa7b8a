//! Integration tests for the asset cache and resolution driver.

mod harness;

use std::sync::Arc;
use std::time::Duration;

use harness::recording_source::RecordingSource;
use indexmap::IndexMap;
use offerdeck::domain::{AssetId, AssetMetadata, Offer, OfferId, OfferLedger};
use offerdeck::service::{AssetCache, Resolver};

const CAT_ID: &str = "a628c1c2c6fcb74d53746157e438e108eab5c0bb3e5c80ff9b1910b3e4832e3d";
const NFT_ID: &str = "nft1qqk4rg0kvqrpdgvmlrxpslt0rx2mhvg0m228wqtqpsqde2rz7ufsqx5c0dt";

fn offer(id: &str, offered: &[(&str, u64)], requested: &[(&str, u64)]) -> Offer {
    let build = |entries: &[(&str, u64)]| -> IndexMap<AssetId, u64> {
        entries
            .iter()
            .map(|(asset, amount)| (AssetId::from(*asset), *amount))
            .collect()
    };

    Offer {
        id: OfferId::from(id),
        offered_assets: build(offered),
        requested_assets: build(requested),
        offer_string: format!("offer1{id}"),
    }
}

async fn wait_for(mut condition: impl FnMut() -> bool) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not met within 1s");
}

#[tokio::test]
async fn resolves_every_referenced_asset_across_the_ledger() {
    let source = RecordingSource::new()
        .with_cat(CAT_ID, "SBX", "Spacebucks")
        .with_nft(NFT_ID, "Cool NFT #1", "Cool Collection");

    let cache = Arc::new(AssetCache::new());
    let resolver = Resolver::new(cache.clone(), Arc::new(source.clone()));

    let ledger = OfferLedger::new();
    ledger.apply(offer("a", &[("xch", 1_000_000_000_000)], &[(CAT_ID, 2000)]));
    ledger.apply(offer("b", &[(NFT_ID, 1)], &[("xch", 5_000_000_000_000)]));

    resolver.resolve_missing(&ledger);

    let cache_check = cache.clone();
    wait_for(move || {
        cache_check.contains(&AssetId::from(CAT_ID)) && cache_check.contains(&AssetId::from(NFT_ID))
    })
    .await;

    match cache.get(&AssetId::from(CAT_ID)) {
        Some(AssetMetadata::Cat(cat)) => assert_eq!(cat.code, "SBX"),
        other => panic!("expected CAT metadata, got {other:?}"),
    }
    match cache.get(&AssetId::from(NFT_ID)) {
        Some(AssetMetadata::Nft(nft)) => {
            assert_eq!(nft.collection.name, "Cool Collection");
        }
        other => panic!("expected NFT metadata, got {other:?}"),
    }

    // XCH appears in both offers and must never reach the source.
    assert!(!source.calls().iter().any(|c| c == "xch"));
}

#[tokio::test]
async fn cached_identifiers_are_never_refetched() {
    let source = RecordingSource::new().with_cat(CAT_ID, "SBX", "Spacebucks");
    let cache = Arc::new(AssetCache::new());
    let resolver = Resolver::new(cache.clone(), Arc::new(source.clone()));

    let ledger = OfferLedger::new();
    ledger.apply(offer("a", &[(CAT_ID, 1000)], &[("xch", 1)]));

    resolver.resolve_missing(&ledger);
    let cache_check = cache.clone();
    wait_for(move || cache_check.contains(&AssetId::from(CAT_ID))).await;

    // Further ledger changes referencing the same asset are no-ops for it.
    ledger.apply(offer("b", &[(CAT_ID, 3000)], &[("xch", 2)]));
    resolver.resolve_missing(&ledger);
    resolver.resolve_missing(&ledger);
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(source.call_count(CAT_ID), 1);
}

#[tokio::test]
async fn racing_resolutions_of_one_unseen_id_leave_one_consistent_entry() {
    let source = RecordingSource::new()
        .with_cat(CAT_ID, "SBX", "Spacebucks")
        .with_delay(Duration::from_millis(20));
    let cache = Arc::new(AssetCache::new());
    let id = AssetId::from(CAT_ID);

    // Second resolve starts before the first completes; both may fetch.
    let (first, second) = tokio::join!(
        cache.resolve(&id, &source),
        cache.resolve(&id, &source),
    );

    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&id), Some(first));
}

#[tokio::test]
async fn failed_fetch_is_retried_on_the_next_pass() {
    let source = RecordingSource::new()
        .with_cat(CAT_ID, "SBX", "Spacebucks")
        .failing(CAT_ID);
    let cache = Arc::new(AssetCache::new());
    let resolver = Resolver::new(cache.clone(), Arc::new(source.clone()));

    let ledger = OfferLedger::new();
    ledger.apply(offer("a", &[(CAT_ID, 1000)], &[("xch", 1)]));

    resolver.resolve_missing(&ledger);
    let source_check = source.clone();
    wait_for(move || source_check.call_count(CAT_ID) == 1).await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    // Failure is not cached.
    assert!(!cache.contains(&AssetId::from(CAT_ID)));

    // The service recovers; the next ledger-triggered pass resolves it.
    source.heal(CAT_ID);
    resolver.resolve_missing(&ledger);

    let cache_check = cache.clone();
    wait_for(move || cache_check.contains(&AssetId::from(CAT_ID))).await;
    assert_eq!(source.call_count(CAT_ID), 2);
}

#[tokio::test]
async fn one_failing_identifier_does_not_block_the_others() {
    let source = RecordingSource::new()
        .with_cat(CAT_ID, "SBX", "Spacebucks")
        .failing("feedface");
    let cache = Arc::new(AssetCache::new());
    let resolver = Resolver::new(cache.clone(), Arc::new(source.clone()));

    let ledger = OfferLedger::new();
    ledger.apply(offer("a", &[(CAT_ID, 1000)], &[("feedface", 500)]));

    resolver.resolve_missing(&ledger);

    let cache_check = cache.clone();
    wait_for(move || cache_check.contains(&AssetId::from(CAT_ID))).await;
    assert!(!cache.contains(&AssetId::from("feedface")));
}
