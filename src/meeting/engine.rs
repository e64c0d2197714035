//! Per-room command engine.

use tracing::debug;

use super::command::{parse_command, Keyword};
use super::dispatch::SubCommandHandler;
use super::help::Helper;
use super::hum::HumSession;
use super::queue::SpeakerQueue;

/// Routes chat messages to the queue, hum, and help handlers.
///
/// One engine holds the state of one room. It is not synchronized; wrap it
/// in a [`MeetingRoom`](super::MeetingRoom) when messages can arrive from
/// several tasks.
#[derive(Debug, Clone, Default)]
pub struct MeetingEngine {
    queue: SpeakerQueue,
    hum: HumSession,
    helper: Helper,
}

impl MeetingEngine {
    /// Create an engine with an empty queue and an idle hum.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &SpeakerQueue {
        &self.queue
    }

    pub fn hum(&self) -> &HumSession {
        &self.hum
    }

    /// Handle one message and return the replies to send back, in order.
    ///
    /// Messages that don't start with a command keyword produce no replies.
    pub fn deliver(&mut self, body: &str, sender: &str) -> Vec<String> {
        let Some(command) = parse_command(body) else {
            return Vec::new();
        };
        debug!(keyword = %command.keyword, sender, "routing command");

        let rest = command.rest;
        match command.keyword {
            Keyword::Help => self.helper.handle(rest, sender),
            Keyword::Hum => self.hum.handle(rest, sender),
            Keyword::Join => self.queue.join(rest, sender),
            Keyword::Leave => self.queue.leave(rest, sender),
            Keyword::Query => self.queue.query(),
            Keyword::Ack => self.queue.ack(rest),
        }
    }
}
