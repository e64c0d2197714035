//! Configuration module for meetingbot.

use serde::Deserialize;
use std::path::Path;

use crate::{MeetingBotError, Result};

/// Bot identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Nick the bot uses in the room.
    #[serde(default = "default_nick")]
    pub nick: String,
    /// Name of the room the bot serves.
    #[serde(default = "default_room")]
    pub room: String,
    /// Sender name for console lines without a `name:` prefix.
    #[serde(default = "default_console_user")]
    pub console_user: String,
}

fn default_nick() -> String {
    "meetingbot".to_string()
}

fn default_room() -> String {
    "meeting".to_string()
}

fn default_console_user() -> String {
    "console".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            nick: default_nick(),
            room: default_room(),
            console_user: default_console_user(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/meetingbot.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Bot identity.
    #[serde(default)]
    pub bot: BotConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(MeetingBotError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| MeetingBotError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `MEETINGBOT_NICK`: Override the bot nick
    /// - `MEETINGBOT_ROOM`: Override the room name
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(nick) = std::env::var("MEETINGBOT_NICK") {
            if !nick.is_empty() {
                self.bot.nick = nick;
            }
        }
        if let Ok(room) = std::env::var("MEETINGBOT_ROOM") {
            if !room.is_empty() {
                self.bot.room = room;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the nick, room, or console user is blank.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("bot.nick", &self.bot.nick),
            ("bot.room", &self.bot.room),
            ("bot.console_user", &self.bot.console_user),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(MeetingBotError::Validation(format!(
                    "{key} must not be empty"
                )));
            }
        }
        Ok(())
    }
}
