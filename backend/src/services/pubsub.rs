//! Topic-based publish/subscribe broker used for GraphQL subscriptions.
//!
//! Each topic maps to a `tokio::sync::broadcast` channel created on first use.
//! Publishing never waits for subscribers; a subscriber only sees events
//! published after it subscribed, and one that falls behind by more than the
//! channel capacity skips the missed events.

use std::collections::HashMap;
use std::sync::Arc;

use futures::Stream;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::catalog::BookRecord;

/// Topic published after every successful book insertion
pub const BOOK_ADDED: &str = "BOOK_ADDED";

/// Default per-topic channel capacity
pub const DEFAULT_CAPACITY: usize = 256;

/// Broker carrying newly added books
pub type BookBroker = Broker<BookRecord>;

pub struct Broker<T> {
    capacity: usize,
    topics: Mutex<HashMap<String, broadcast::Sender<T>>>,
}

impl<T> Broker<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            capacity: capacity.max(1),
            topics: Mutex::new(HashMap::new()),
        })
    }

    fn sender(&self, topic: &str) -> broadcast::Sender<T> {
        self.topics
            .lock()
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }

    /// Deliver `payload` to every current subscriber of `topic`.
    ///
    /// Returns the number of subscribers the event was queued for; zero when
    /// nobody is listening.
    pub fn publish(&self, topic: &str, payload: T) -> usize {
        let delivered = self.sender(topic).send(payload).unwrap_or(0);
        tracing::debug!(topic, subscribers = delivered, "Published event");
        delivered
    }

    /// Subscribe to `topic`. The stream ends only when the broker is dropped.
    pub fn subscribe(&self, topic: &str) -> impl Stream<Item = T> + Send + use<T> {
        let topic = topic.to_string();
        let receiver = self.sender(&topic).subscribe();
        tracing::debug!(topic = %topic, "New subscriber");

        BroadcastStream::new(receiver).filter_map(move |result| match result {
            Ok(event) => Some(event),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(topic = %topic, skipped, "Subscriber lagged, events dropped");
                None
            }
        })
    }

    /// Number of live subscribers on `topic`
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .lock()
            .get(topic)
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio_stream::StreamExt;

    use super::*;

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let broker = Broker::<u32>::new(4);
        assert_eq!(broker.publish("topic", 1), 0);
    }

    #[tokio::test]
    async fn test_every_subscriber_receives_event() {
        let broker = Broker::<u32>::new(4);
        let mut first = Box::pin(broker.subscribe("topic"));
        let mut second = Box::pin(broker.subscribe("topic"));
        assert_eq!(broker.subscriber_count("topic"), 2);

        assert_eq!(broker.publish("topic", 7), 2);
        assert_eq!(first.next().await, Some(7));
        assert_eq!(second.next().await, Some(7));
    }

    #[tokio::test]
    async fn test_late_subscriber_misses_earlier_events() {
        let broker = Broker::<u32>::new(4);
        broker.publish("topic", 1);

        let mut late = Box::pin(broker.subscribe("topic"));
        broker.publish("topic", 2);
        assert_eq!(late.next().await, Some(2));
    }

    #[tokio::test]
    async fn test_topics_are_isolated() {
        let broker = Broker::<u32>::new(4);
        let mut other = Box::pin(broker.subscribe("other"));
        broker.publish("topic", 1);

        let next = tokio::time::timeout(Duration::from_millis(50), other.next()).await;
        assert!(next.is_err());
    }

    #[tokio::test]
    async fn test_lagged_subscriber_skips_to_retained_events() {
        let broker = Broker::<u32>::new(2);
        let mut slow = Box::pin(broker.subscribe("topic"));
        for i in 0..5 {
            broker.publish("topic", i);
        }

        assert_eq!(slow.next().await, Some(3));
        assert_eq!(slow.next().await, Some(4));
    }

    #[tokio::test]
    async fn test_dropped_subscriber_is_released() {
        let broker = Broker::<u32>::new(4);
        let stream = broker.subscribe("topic");
        assert_eq!(broker.subscriber_count("topic"), 1);
        drop(stream);
        assert_eq!(broker.subscriber_count("topic"), 0);
    }
}
