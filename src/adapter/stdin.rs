//! Newline-delimited JSON event feed on standard input.
//!
//! The transport process pipes one [`NetworkEvent`] per line into the
//! binary. Malformed lines are logged and dropped; they never stop the
//! feed.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::Result;
use crate::port::NetworkEvent;

/// Read events from stdin until EOF, forwarding them into the core's
/// event channel.
pub async fn run(events: mpsc::Sender<NetworkEvent>) -> Result<()> {
    read_events(BufReader::new(tokio::io::stdin()), events).await
}

async fn read_events<R>(reader: R, events: mpsc::Sender<NetworkEvent>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<NetworkEvent>(line) {
            Ok(event) => {
                if events.send(event).await.is_err() {
                    // Consumer is gone; nothing left to feed.
                    break;
                }
            }
            Err(error) => {
                warn!(error = %error, "dropping malformed event line");
            }
        }
    }

    info!("event feed closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwards_events_and_drops_garbage() {
        let input = concat!(
            r#"{"event": "peer-status", "payload": 2}"#,
            "\n",
            "not json at all\n",
            "\n",
            r#"{"event": "peer-status", "payload": 5}"#,
            "\n",
        );

        let (tx, mut rx) = mpsc::channel(8);
        read_events(input.as_bytes(), tx).await.unwrap();

        assert_eq!(rx.recv().await, Some(NetworkEvent::PeerStatus(2)));
        assert_eq!(rx.recv().await, Some(NetworkEvent::PeerStatus(5)));
        assert_eq!(rx.recv().await, None);
    }
}
