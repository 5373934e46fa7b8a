//! Offerdeck - live offer feed client for the Splash network.
//!
//! This crate ingests a continuous stream of Chia offer events from a
//! peer-to-peer transport, maintains a deduplicated, newest-first working
//! set of offers, and lazily resolves every referenced asset identifier
//! (CATs and NFTs) into cached display metadata.
//!
//! # Modules
//!
//! - [`domain`] - Pure core: asset classification, amount/price
//!   formatting, the offer ledger
//! - [`service`] - Asset metadata cache and the resolution driver
//! - [`port`] - Trait boundaries to the peer network and metadata services
//! - [`adapter`] - HTTP metadata clients, channel network handle, stdin
//!   event feed
//! - [`app`] - Event-loop orchestration and shared session state
//! - [`config`] - TOML configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::sync::atomic::AtomicUsize;
//!
//! use offerdeck::adapter::{ChannelNetwork, HttpMetadataSource};
//! use offerdeck::app::{App, AppState};
//! use offerdeck::config::Config;
//! use tokio::sync::mpsc;
//!
//! # async fn run() -> offerdeck::error::Result<()> {
//! let config = Config::default();
//! let (event_tx, event_rx) = mpsc::channel(100);
//! let (offer_tx, _offer_rx) = mpsc::channel(100);
//!
//! let state = Arc::new(AppState::new());
//! let network = Arc::new(ChannelNetwork::new(offer_tx, Arc::new(AtomicUsize::new(0))));
//! let source = Arc::new(HttpMetadataSource::new(config.metadata.clone()));
//!
//! // event_tx goes to the transport; the loop runs until it closes.
//! drop(event_tx);
//! App::run(state, network, source, event_rx).await
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;
