//! Channel trait — the abstract interface every delivery channel implements.
//!
//! Each channel takes one `Outbound` envelope and either completes the
//! send (`Delivery`) or raises a classified `ChannelError`. Channels hold
//! no per-message state, so one instance serves any number of sequential
//! sends.

use async_trait::async_trait;
use wasend_core::{ChannelError, Delivery, Outbound};

/// Every delivery channel implements this trait.
///
/// The `Dispatcher` holds one `Arc<dyn Channel>` per kind and routes
/// each validated request to exactly one of them.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Unique channel name (e.g. "browser", "cloud-api").
    ///
    /// Must match the `ChannelKind` name used in logs and CLI flags.
    fn name(&self) -> &str;

    /// Deliver one outbound message.
    ///
    /// Called at most once per dispatch; a failed send is not retried
    /// here. Every failure must come back as a `ChannelError` so the
    /// caller can fold it into a `DispatchResult`.
    async fn send(&self, outbound: &Outbound) -> Result<Delivery, ChannelError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use wasend_core::{ApiCredentials, MessageRequest, SendWindow};

    /// A mock channel for testing.
    struct MockChannel {
        calls: Arc<AtomicUsize>,
        sent: Arc<tokio::sync::Mutex<Vec<String>>>,
    }

    impl MockChannel {
        fn new() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                sent: Arc::new(tokio::sync::Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl Channel for MockChannel {
        fn name(&self) -> &str {
            "mock"
        }

        async fn send(&self, outbound: &Outbound) -> Result<Delivery, ChannelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut sent = self.sent.lock().await;
            sent.push(outbound.request.body.clone());
            Ok(Delivery::accepted())
        }
    }

    fn outbound(body: &str) -> Outbound {
        Outbound::new(
            MessageRequest::new("+15551234567", body),
            SendWindow::Immediate,
            ApiCredentials::default(),
        )
    }

    #[test]
    fn test_mock_channel_name() {
        let ch = MockChannel::new();
        assert_eq!(ch.name(), "mock");
    }

    #[tokio::test]
    async fn test_mock_channel_send() {
        let ch = MockChannel::new();
        let delivery = ch.send(&outbound("Hello!")).await.unwrap();
        assert_eq!(delivery.confirmation_id, None);

        let sent = ch.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], "Hello!");
    }

    #[tokio::test]
    async fn test_mock_channel_counts_calls() {
        let ch = MockChannel::new();
        ch.send(&outbound("one")).await.unwrap();
        ch.send(&outbound("two")).await.unwrap();
        assert_eq!(ch.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_channel_is_object_safe() {
        let ch: Arc<dyn Channel> = Arc::new(MockChannel::new());
        assert_eq!(ch.name(), "mock");
        ch.send(&outbound("boxed")).await.unwrap();
    }
}
