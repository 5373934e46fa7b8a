//! Concrete implementations of the external-collaborator ports.

mod metadata;
mod network;
pub mod stdin;

pub use metadata::HttpMetadataSource;
pub use network::ChannelNetwork;
