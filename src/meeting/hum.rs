//! Hum (show-of-hands vote) sessions.
//!
//! A hum is configured while idle (topic and options), opened with
//! `hum start`, voted on with `hum <n>`, and closed with `hum stop`,
//! which reports the tally and discards the whole session.

use std::collections::HashMap;

use tracing::{debug, info};

use super::dispatch::{SubCommandFn, SubCommandHandler};

/// Minimum number of options required to start a hum.
pub const MIN_OPTIONS: usize = 2;

/// Usage hint shown when a hum starts.
const VOTE_HINT: &str = "Please hum like this: 'hum n' for option n. To finish, 'hum stop'.";

/// State of a hum session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HumState {
    /// Accepting topic and option edits.
    #[default]
    Idle,
    /// Accepting votes.
    Open,
}

/// A single-use hum round.
#[derive(Debug, Clone, Default)]
pub struct HumSession {
    state: HumState,
    topic: String,
    options: Vec<String>,
    /// Chosen option (1-based) keyed by participant.
    responses: HashMap<String, usize>,
}

const HUM_COMMANDS: &[(&str, SubCommandFn<HumSession>)] = &[
    ("topic", HumSession::on_topic),
    ("option", HumSession::on_option),
    ("start", HumSession::on_start),
    ("stop", HumSession::on_stop),
];

impl HumSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HumState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == HumState::Open
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn responses(&self) -> &HashMap<String, usize> {
        &self.responses
    }

    /// Count the responses per option. Index `i` holds option `i + 1`.
    pub fn tally(&self) -> Vec<usize> {
        let mut counts = vec![0; self.options.len()];
        for choice in self.responses.values() {
            if let Some(count) = counts.get_mut(choice - 1) {
                *count += 1;
            }
        }
        counts
    }

    /// Parse a vote token into a valid 1-based option number.
    fn parse_vote(&self, token: &str) -> Option<usize> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        token
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=self.options.len()).contains(n))
    }

    fn on_topic(&mut self, rest: &str, _sender: &str) -> Vec<String> {
        if rest.is_empty() {
            return vec!["Please provide a hum topic.".to_string()];
        }
        if self.is_open() {
            return vec!["Sorry, topic can't be changed during the hum.".to_string()];
        }
        self.topic = rest.to_string();
        vec!["Topic set.".to_string()]
    }

    fn on_option(&mut self, rest: &str, _sender: &str) -> Vec<String> {
        if rest.is_empty() {
            return vec!["Please provide a hum option description.".to_string()];
        }
        if self.is_open() {
            return vec!["Sorry, options can't be changed during the hum.".to_string()];
        }
        self.options.push(rest.to_string());
        vec![format!("Option {} recorded.", self.options.len())]
    }

    fn on_start(&mut self, _rest: &str, _sender: &str) -> Vec<String> {
        if self.is_open() {
            return vec!["Sorry, there's already a hum running.".to_string()];
        }
        if self.topic.is_empty() {
            return vec!["Please set a hum topic with 'hum topic _topic_'.".to_string()];
        }
        if self.options.len() < MIN_OPTIONS {
            return vec![
                "Please set at least two hum options with 'hum option _description_'."
                    .to_string(),
            ];
        }

        self.state = HumState::Open;
        info!(topic = %self.topic, options = self.options.len(), "hum started");

        let mut replies = Vec::with_capacity(self.options.len() + 2);
        replies.push(format!("* Starting hum: {}", self.topic));
        for (i, option) in self.options.iter().enumerate() {
            replies.push(format!("  Option {}: {}", i + 1, option));
        }
        replies.push(VOTE_HINT.to_string());
        replies
    }

    fn on_stop(&mut self, _rest: &str, _sender: &str) -> Vec<String> {
        if !self.is_open() {
            return vec!["Sorry, there isn't a hum running.".to_string()];
        }

        let counts = self.tally();
        let mut replies = Vec::with_capacity(self.options.len() + 2);
        replies.push("* Finishing hum. The results are:".to_string());
        replies.push(self.topic.clone());
        for (i, (option, count)) in self.options.iter().zip(&counts).enumerate() {
            replies.push(format!("  Option {}: {} -- {} hummed", i + 1, option, count));
        }

        info!(topic = %self.topic, votes = self.responses.len(), "hum finished");
        *self = Self::default();
        replies
    }
}

impl SubCommandHandler for HumSession {
    fn sub_commands() -> &'static [(&'static str, SubCommandFn<Self>)] {
        HUM_COMMANDS
    }

    fn fallback(&mut self, command: &str, _rest: &str, sender: &str) -> Vec<String> {
        if !self.is_open() {
            return vec![format!("I don't understand '{command}', {sender}.")];
        }

        match self.parse_vote(command) {
            Some(choice) => {
                debug!(voter = sender, choice, "hum recorded");
                self.responses.insert(sender.to_string(), choice);
                Vec::new()
            }
            None => vec![format!(
                "{sender}, '{command}' is not an option. Please try again."
            )],
        }
    }
}
