//! Speaking-order queue.
//!
//! Entries are usually participant nicks, but anyone may queue arbitrary
//! text on someone else's behalf. An entry never appears twice.

use tracing::{debug, info};

/// The ordered list of participants waiting to speak.
#[derive(Debug, Clone, Default)]
pub struct SpeakerQueue {
    entries: Vec<String>,
}

impl SpeakerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the queued entries in speaking order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Get the number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an entry is queued.
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    fn remove(&mut self, entry: &str) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Add an entry (`q+`).
    ///
    /// With a name, that name is queued and the result is announced.
    /// Without one, the sender is queued silently; only a duplicate is
    /// reported.
    pub fn join(&mut self, rest: &str, sender: &str) -> Vec<String> {
        if !rest.is_empty() {
            if self.contains(rest) {
                return vec![format!("{rest} is already in the queue.")];
            }
            self.entries.push(rest.to_string());
            debug!(entry = rest, queued_by = sender, "queued");
            return vec![format!("{rest} has been queued.")];
        }

        if self.contains(sender) {
            return vec![format!("{sender}, you're already in the queue.")];
        }
        self.entries.push(sender.to_string());
        debug!(entry = sender, "queued");
        Vec::new()
    }

    /// Remove the sender (`q-`). `q- later` moves the sender to the back.
    pub fn leave(&mut self, rest: &str, sender: &str) -> Vec<String> {
        if !self.remove(sender) {
            return vec![format!("Sorry, {sender} is not in the queue.")];
        }
        if rest == "later" {
            self.entries.push(sender.to_string());
            debug!(entry = sender, "moved to back of queue");
        } else {
            debug!(entry = sender, "left queue");
        }
        Vec::new()
    }

    /// Show the queue (`q?`).
    pub fn query(&self) -> Vec<String> {
        if self.entries.is_empty() {
            vec!["The queue is currently empty.".to_string()]
        } else {
            vec![format!("The queue is currently: {}", self.entries.join(", "))]
        }
    }

    /// Acknowledge a speaker (`ack`).
    ///
    /// Without a name the front entry is removed; with one, that entry is
    /// removed wherever it is. The resulting queue is shown unless the
    /// named entry could not be found.
    pub fn ack(&mut self, rest: &str) -> Vec<String> {
        if self.entries.is_empty() {
            return self.query();
        }

        if rest.is_empty() {
            let speaker = self.entries.remove(0);
            info!(speaker = %speaker, "acknowledged");
        } else if self.remove(rest) {
            info!(speaker = rest, "acknowledged");
        } else {
            return vec![format!("Sorry, I couldn't find {rest} in the queue.")];
        }
        self.query()
    }
}
