//! Command tokenizer and top-level keywords for the meeting bot.
//!
//! Every chat message is split into a leading keyword and the remainder.
//! Only recognized keywords are routed; anything else is ignored so the
//! bot stays quiet during regular conversation.

/// Split text into its first whitespace-delimited word and the remainder.
///
/// Leading whitespace is skipped and the remainder has its leading
/// whitespace removed. Without any whitespace the remainder is empty.
pub fn split_first_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], text[pos..].trim_start()),
        None => (text, ""),
    }
}

/// A top-level command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Show help text.
    Help,
    /// Hum (vote) sub-commands.
    Hum,
    /// Join the speaking queue (`q+` / `+q`).
    Join,
    /// Leave the speaking queue (`q-` / `-q`).
    Leave,
    /// Show the speaking queue (`q?` / `?q`).
    Query,
    /// Acknowledge a queued speaker (`ack`).
    Ack,
}

impl Keyword {
    /// Parse a keyword, ignoring case.
    ///
    /// Returns `None` for words that are not commands.
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "help" => Some(Keyword::Help),
            "hum" => Some(Keyword::Hum),
            "q+" | "+q" => Some(Keyword::Join),
            "q-" | "-q" => Some(Keyword::Leave),
            "q?" | "?q" => Some(Keyword::Query),
            "ack" => Some(Keyword::Ack),
            _ => None,
        }
    }

    /// Get the canonical spelling of the keyword.
    pub fn name(&self) -> &'static str {
        match self {
            Keyword::Help => "help",
            Keyword::Hum => "hum",
            Keyword::Join => "q+",
            Keyword::Leave => "q-",
            Keyword::Query => "q?",
            Keyword::Ack => "ack",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A message body that starts with a recognized keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// The top-level keyword.
    pub keyword: Keyword,
    /// Everything after the keyword.
    pub rest: &'a str,
}

/// Parse a message body into a command.
///
/// Returns `None` when the first word is not a keyword, including empty bodies.
pub fn parse_command(body: &str) -> Option<ParsedCommand<'_>> {
    let (word, rest) = split_first_word(body.trim());
    Keyword::parse(word).map(|keyword| ParsedCommand { keyword, rest })
}
