//! Meeting facilitation for a chat room.
//!
//! This module provides:
//! - Command parsing (`help`, `hum`, `q+`, `q-`, `q?`, `ack`)
//! - The speaking-order queue
//! - Hum (show-of-hands) voting
//! - A lock-guarded room that broadcasts replies

mod command;
mod dispatch;
mod engine;
mod help;
mod hum;
mod queue;
mod room;

pub use command::{parse_command, split_first_word, Keyword, ParsedCommand};
pub use dispatch::{SubCommandFn, SubCommandHandler};
pub use engine::MeetingEngine;
pub use help::Helper;
pub use hum::{HumSession, HumState, MIN_OPTIONS};
pub use queue::SpeakerQueue;
pub use room::{BotReply, MeetingRoom};
