//! Shared publish/subscribe channel for subscription resolvers.
//!
//! Every [`SchemaManager`](crate::manager::SchemaManager) owns exactly one
//! [`EventChannel`], created at construction and handed out by reference.
//! Contributors whose resolvers need to publish or subscribe to events all
//! share that one channel rather than each creating their own. The
//! composition core never publishes or consumes events itself; delivery
//! semantics (fan-out, ordering, lag) belong to the underlying broadcast
//! primitive.
//!
//! # Examples
//!
//! ```rust
//! use gqlweave::event_channel::EventChannel;
//! use serde_json::json;
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! # rt.block_on(async {
//! let channel = EventChannel::new(16);
//! let mut sub = channel.subscribe_topic("user_created");
//!
//! channel.publish("user_created", json!({ "id": 7 })).unwrap();
//!
//! let event = sub.recv().await.unwrap();
//! assert_eq!(event.topic, "user_created");
//! assert_eq!(event.payload["id"], 7);
//! # });
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use futures_util::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::broadcast::{self, Receiver, Sender};

/// Event published through a manager's shared channel.
///
/// The payload is opaque JSON; the channel stamps each event with its topic
/// and publication time and otherwise does not interpret it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChannelEvent {
    /// Routing key chosen by the publisher.
    pub topic: String,
    /// Uninterpreted event payload.
    pub payload: Value,
    /// Publication timestamp (UTC).
    pub published_at: DateTime<Utc>,
}

impl ChannelEvent {
    /// Stamps a new event with the current time.
    pub fn new(topic: impl Into<String>, payload: Value) -> Self {
        Self {
            topic: topic.into(),
            payload,
            published_at: Utc::now(),
        }
    }
}

/// Errors surfaced by the channel. All originate in the underlying
/// broadcast primitive and are reported, not suppressed.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// No live subscriber exists (on publish) or all senders are gone
    /// (on receive).
    #[error("event channel closed")]
    Closed,
    /// The subscriber fell behind the channel's buffer; the given number of
    /// events were dropped for it.
    #[error("subscriber lagged; dropped {0} events")]
    Lagged(u64),
}

/// Single shared publish/subscribe handle, one per manager instance.
#[derive(Debug)]
pub struct EventChannel {
    sender: Sender<ChannelEvent>,
    dropped_events: AtomicUsize,
    capacity: usize,
}

impl EventChannel {
    /// Creates a channel buffering up to `capacity` in-flight events per
    /// subscriber. A zero capacity is floored to 1.
    pub fn new(capacity: usize) -> Arc<Self> {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Arc::new(Self {
            sender,
            dropped_events: AtomicUsize::new(0),
            capacity,
        })
    }

    /// Publishes an event to every live subscriber.
    ///
    /// Returns the number of subscribers the event was delivered to, or
    /// [`ChannelError::Closed`] when none exists.
    pub fn publish(&self, topic: impl Into<String>, payload: Value) -> Result<usize, ChannelError> {
        self.sender
            .send(ChannelEvent::new(topic, payload))
            .map_err(|_| ChannelError::Closed)
    }

    /// Subscribes to every event published on this channel.
    pub fn subscribe(self: &Arc<Self>) -> EventSubscription {
        EventSubscription {
            receiver: self.sender.subscribe(),
            channel: Arc::downgrade(self),
            topic: None,
        }
    }

    /// Subscribes to events whose topic equals `topic`; everything else is
    /// skipped on receive.
    pub fn subscribe_topic(self: &Arc<Self>, topic: impl Into<String>) -> EventSubscription {
        EventSubscription {
            receiver: self.sender.subscribe(),
            channel: Arc::downgrade(self),
            topic: Some(topic.into()),
        }
    }

    /// Per-subscriber buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Total events dropped across all lagging subscribers.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped_events.load(Ordering::Relaxed)
    }
}

/// Receiving side of an [`EventChannel`] subscription.
///
/// Holds only a weak reference back to the channel: subscriptions do not
/// keep the channel alive, so streams handed to the execution runtime end
/// once the owning manager is gone.
#[derive(Debug)]
pub struct EventSubscription {
    receiver: Receiver<ChannelEvent>,
    channel: Weak<EventChannel>,
    topic: Option<String>,
}

impl EventSubscription {
    /// Waits for the next matching event.
    ///
    /// Lag is recorded on the channel and surfaced as
    /// [`ChannelError::Lagged`]; the subscription remains usable afterwards.
    pub async fn recv(&mut self) -> Result<ChannelEvent, ChannelError> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    if self.matches(&event) {
                        return Ok(event);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    self.record_dropped(missed as usize);
                    return Err(ChannelError::Lagged(missed));
                }
                Err(broadcast::error::RecvError::Closed) => return Err(ChannelError::Closed),
            }
        }
    }

    /// Returns the next matching event already in the buffer, `Ok(None)`
    /// when the buffer holds none, or an error on lag/closure.
    pub fn try_recv(&mut self) -> Result<Option<ChannelEvent>, ChannelError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.matches(&event) {
                        return Ok(Some(event));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Lagged(missed)) => {
                    self.record_dropped(missed as usize);
                    return Err(ChannelError::Lagged(missed));
                }
                Err(broadcast::error::TryRecvError::Closed) => return Err(ChannelError::Closed),
            }
        }
    }

    /// Adapts the subscription into an async stream of matching events.
    ///
    /// Lagged gaps are skipped; the stream ends when the channel closes.
    /// This is the shape subscription resolvers typically hand to the
    /// execution runtime.
    pub fn into_stream(self) -> impl Stream<Item = ChannelEvent> {
        stream::unfold(self, |mut sub| async move {
            loop {
                match sub.recv().await {
                    Ok(event) => return Some((event, sub)),
                    Err(ChannelError::Lagged(_)) => continue,
                    Err(ChannelError::Closed) => return None,
                }
            }
        })
    }

    fn matches(&self, event: &ChannelEvent) -> bool {
        self.topic
            .as_deref()
            .map(|topic| topic == event.topic)
            .unwrap_or(true)
    }

    fn record_dropped(&self, missed: usize) {
        if let Some(channel) = self.channel.upgrade() {
            channel.dropped_events.fetch_add(missed, Ordering::Relaxed);
        }
    }
}
