use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use clap::Parser;
use tokio::io::AsyncWriteExt;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use offerdeck::adapter::{stdin, ChannelNetwork, HttpMetadataSource};
use offerdeck::app::{App, AppState};
use offerdeck::config::Config;

/// Live offer feed client for the Splash network.
///
/// Reads newline-delimited JSON network events on stdin and writes
/// submitted offer strings to stdout; logs go to stderr.
#[derive(Parser)]
#[command(name = "offerdeck", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    config.init_logging();
    info!("offerdeck starting");

    let (event_tx, event_rx) = mpsc::channel(100);
    let (offer_tx, mut offer_rx) = mpsc::channel::<String>(100);

    let state = Arc::new(AppState::new());
    let network = Arc::new(ChannelNetwork::new(offer_tx, Arc::new(AtomicUsize::new(0))));
    let source = Arc::new(HttpMetadataSource::new(config.metadata.clone()));

    // Outbound offers go to stdout, one per line, for the transport
    // process to broadcast.
    tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(offer_string) = offer_rx.recv().await {
            let line = format!("{offer_string}\n");
            if stdout.write_all(line.as_bytes()).await.is_err() {
                break;
            }
            let _ = stdout.flush().await;
        }
    });

    tokio::spawn(async move {
        if let Err(e) = stdin::run(event_tx).await {
            warn!(error = %e, "event feed failed");
        }
    });

    tokio::select! {
        result = App::run(state, network, source, event_rx) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("offerdeck stopped");
}
