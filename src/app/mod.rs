//! App orchestration: the single consumer loop over network events.

mod state;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::domain::derive_price;
use crate::error::Result;
use crate::port::{MetadataSource, NetworkEvent, OfferNetwork};
use crate::service::Resolver;

pub use state::AppState;

/// Main application struct.
pub struct App;

impl App {
    /// Run the event loop until the inbound event channel closes.
    ///
    /// This task is the only writer of the offer ledger; metadata
    /// resolution is fanned out to background tasks and commits into the
    /// cache independently.
    pub async fn run(
        state: Arc<AppState>,
        network: Arc<dyn OfferNetwork>,
        source: Arc<dyn MetadataSource>,
        mut events: mpsc::Receiver<NetworkEvent>,
    ) -> Result<()> {
        let resolver = Resolver::new(Arc::clone(state.assets()), source);

        let num_peers = network.num_peers().await;
        state.set_num_peers(num_peers);
        info!(num_peers, "session started");

        while let Some(event) = events.recv().await {
            match event {
                NetworkEvent::NewOffer(offer) => {
                    let price = derive_price(&offer.offered_assets, &offer.requested_assets);
                    info!(
                        offer_id = %offer.id,
                        offered = offer.offered_assets.len(),
                        requested = offer.requested_assets.len(),
                        price = %price,
                        "offer received"
                    );

                    state.ledger().apply(offer);
                    resolver.resolve_missing(state.ledger());
                }
                NetworkEvent::PeerStatus(count) => {
                    debug!(num_peers = count, "peer status");
                    state.set_num_peers(count);
                }
            }
        }

        info!("event stream closed");
        Ok(())
    }
}
