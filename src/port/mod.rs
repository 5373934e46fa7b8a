//! Trait boundaries to the external collaborators.

mod metadata;
mod network;

pub use metadata::MetadataSource;
pub use network::{NetworkEvent, OfferNetwork};
