//! meetingbot - meeting facilitation for group chat
//!
//! Keeps a speaking queue and runs hums (informal show-of-hands votes)
//! driven by short commands typed into a chat room.

pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod meeting;

pub use config::Config;
pub use error::{MeetingBotError, Result};
pub use meeting::{BotReply, HumSession, HumState, MeetingEngine, MeetingRoom, SpeakerQueue};
