//! Peer-network trait boundary and inbound event payloads.
//!
//! Peer discovery, gossip, and offer parsing live in the external
//! transport. The core consumes its events over a channel and issues two
//! requests back through [`OfferNetwork`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Offer;
use crate::error::Result;

/// Events delivered by the peer-network transport, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum NetworkEvent {
    /// A parsed offer observed on the gossip topic. Re-deliveries of a
    /// known offer id are expected and handled by the ledger.
    NewOffer(Offer),
    /// Current connected-peer count.
    PeerStatus(usize),
}

/// Requests the core issues to the peer-network transport.
#[async_trait]
pub trait OfferNetwork: Send + Sync {
    /// Current connected-peer count, fetched once at session start;
    /// updates afterwards arrive as [`NetworkEvent::PeerStatus`].
    async fn num_peers(&self) -> usize;

    /// Hand an offer string to the transport for broadcast.
    ///
    /// Fails with [`crate::error::Error::OfferSubmission`] carrying the
    /// underlying cause's message; never retried automatically.
    async fn submit_offer(&self, offer_string: &str) -> Result<()>;
}
