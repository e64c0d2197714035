//! Shared meeting room.
//!
//! Wraps a [`MeetingEngine`] behind a single lock so that each message is
//! handled to completion before the next one starts, and publishes each
//! command's replies on a broadcast channel for whatever delivers them to
//! the chat.

use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, Mutex};
use tracing::trace;

use super::engine::MeetingEngine;

/// Maximum number of commands' replies to buffer in the broadcast channel.
const CHANNEL_CAPACITY: usize = 100;

/// The replies to one command, to be sent into the room.
///
/// Multi-line output such as a hum tally travels as a single value, so a
/// slow subscriber can lose whole commands but never part of one.
#[derive(Debug, Clone)]
pub struct BotReply {
    /// Name of the room the reply belongs to.
    pub room: String,
    /// Reply lines in emission order.
    pub lines: Vec<String>,
    /// Timestamp when the reply was produced.
    pub sent_at: DateTime<Utc>,
}

impl BotReply {
    /// Create a reply stamped with the current time.
    pub fn new(room: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            room: room.into(),
            lines,
            sent_at: Utc::now(),
        }
    }

    /// Format the reply as the bot's chat lines, one `nick: text` per line.
    pub fn format(&self, nick: &str) -> String {
        self.lines
            .iter()
            .map(|line| format!("{nick}: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A meeting room with serialized command handling.
pub struct MeetingRoom {
    /// Room name.
    name: String,
    /// Queue and hum state for this room.
    engine: Mutex<MeetingEngine>,
    /// Broadcast sender for replies.
    sender: broadcast::Sender<BotReply>,
}

impl MeetingRoom {
    /// Create a room with an empty queue and an idle hum.
    pub fn new(name: impl Into<String>) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            name: name.into(),
            engine: Mutex::new(MeetingEngine::new()),
            sender,
        }
    }

    /// Get the room name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a receiver for the replies produced in this room.
    pub fn subscribe(&self) -> broadcast::Receiver<BotReply> {
        self.sender.subscribe()
    }

    /// Handle one message.
    ///
    /// The replies are published as one [`BotReply`] while the room is
    /// still locked, so subscribers receive them whole and in command order.
    pub async fn deliver(&self, body: &str, sender: &str) -> Vec<String> {
        let mut engine = self.engine.lock().await;
        let replies = engine.deliver(body, sender);
        trace!(room = %self.name, replies = replies.len(), "message handled");

        if !replies.is_empty() {
            // No subscribers is fine; the caller also gets the replies.
            let _ = self
                .sender
                .send(BotReply::new(&self.name, replies.clone()));
        }

        replies
    }

    /// Run a read-only inspection of the room's state.
    pub async fn inspect<T>(&self, f: impl FnOnce(&MeetingEngine) -> T) -> T {
        let engine = self.engine.lock().await;
        f(&*engine)
    }
}
