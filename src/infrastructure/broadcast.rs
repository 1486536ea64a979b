// src/infrastructure/broadcast.rs
use tokio::sync::broadcast;
use tracing::{debug, instrument};

use crate::domain::protocol::BackendResponse;
use crate::domain::services::broadcast::FrontendBroadcast;

const CHANNEL_CAPACITY: usize = 64;

/// In-process broadcast bus for extension surfaces.
///
/// Surfaces subscribe for `BackendResponse` values; a send with no live
/// subscribers is not an error. Slow subscribers may observe lagged
/// receives, delivery is best-effort throughout.
#[derive(Debug)]
pub struct ChannelBroadcast {
    sender: broadcast::Sender<BackendResponse>,
}

impl Default for ChannelBroadcast {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelBroadcast {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Register a new surface. The receiver only sees values sent after
    /// this call.
    pub fn subscribe(&self) -> broadcast::Receiver<BackendResponse> {
        self.sender.subscribe()
    }
}

impl FrontendBroadcast for ChannelBroadcast {
    #[instrument(skip(self, response), level = "trace")]
    fn broadcast(&self, response: &BackendResponse) {
        if let Err(e) = self.sender.send(response.clone()) {
            // No subscribers listening right now; the contract says drop it.
            debug!("Broadcast dropped: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::protocol::Ack;

    #[test]
    fn given_no_subscribers_when_broadcast_then_does_not_fail() {
        let bus = ChannelBroadcast::new();
        bus.broadcast(&BackendResponse::Created(Ack { success: true }));
    }

    #[test]
    fn given_subscriber_when_broadcast_then_value_is_delivered() {
        let bus = ChannelBroadcast::new();
        let mut receiver = bus.subscribe();

        let sent = BackendResponse::Deleted(Ack { success: true });
        bus.broadcast(&sent);

        let received = receiver.try_recv().unwrap();
        assert_eq!(received, sent);
    }

    #[test]
    fn given_dropped_subscriber_when_broadcast_then_does_not_fail() {
        let bus = ChannelBroadcast::new();
        let receiver = bus.subscribe();
        drop(receiver);

        bus.broadcast(&BackendResponse::Updated(Ack { success: false }));
    }
}
