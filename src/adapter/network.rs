//! Channel-bridged handle to the peer-network transport.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::port::OfferNetwork;

/// Network handle backed by channels to an external transport process.
///
/// The transport (libp2p gossip, a relay, a test double) drains the offer
/// channel for broadcast and keeps the shared peer counter current; the
/// core never talks to the wire directly.
pub struct ChannelNetwork {
    offer_tx: mpsc::Sender<String>,
    peers: Arc<AtomicUsize>,
}

impl ChannelNetwork {
    pub fn new(offer_tx: mpsc::Sender<String>, peers: Arc<AtomicUsize>) -> Self {
        Self { offer_tx, peers }
    }
}

#[async_trait]
impl OfferNetwork for ChannelNetwork {
    async fn num_peers(&self) -> usize {
        self.peers.load(Ordering::Relaxed)
    }

    async fn submit_offer(&self, offer_string: &str) -> Result<()> {
        debug!(len = offer_string.len(), "submitting offer for broadcast");
        self.offer_tx
            .send(offer_string.to_string())
            .await
            .map_err(|e| Error::OfferSubmission(e.to_string()))
    }
}
