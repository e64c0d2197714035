//! Line-oriented console front-end.
//!
//! Each input line is one chat message, written as `<sender>: <body>`.
//! Lines without a sender prefix are attributed to the configured console
//! user. Replies are written back as `<nick>: <reply>`, one per line.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::meeting::{BotReply, MeetingRoom};
use crate::Result;

/// Split a console line into `(sender, body)`.
///
/// Returns `None` for blank lines.
pub fn parse_console_line(line: &str, default_sender: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    // A sender prefix is a single word, so "topic: text" stays a message body.
    match line.split_once(':') {
        Some((sender, body)) if is_sender_prefix(sender) => {
            Some((sender.to_string(), body.trim().to_string()))
        }
        _ => Some((default_sender.to_string(), line.to_string())),
    }
}

fn is_sender_prefix(text: &str) -> bool {
    !text.is_empty() && !text.contains(char::is_whitespace)
}

/// Feed console lines into the room until the input ends.
pub async fn run<R, W>(
    room: &MeetingRoom,
    nick: &str,
    default_sender: &str,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut handled = 0usize;

    while let Some(line) = lines.next_line().await? {
        let Some((sender, body)) = parse_console_line(&line, default_sender) else {
            continue;
        };
        debug!(room = room.name(), %sender, "console message");

        let replies = room.deliver(&body, &sender).await;
        handled += 1;
        if replies.is_empty() {
            continue;
        }

        let reply = BotReply::new(room.name(), replies);
        output
            .write_all(format!("{}\n", reply.format(nick)).as_bytes())
            .await?;
        output.flush().await?;
    }

    info!(room = room.name(), messages = handled, "console input closed");
    Ok(())
}
