//! Chat commands that start games.

use crate::session::PlayerId;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Prefix marking a chat message as a command.
pub const COMMAND_PREFIX: char = '!';

/// A recognized chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `!othello <@id>`: challenge the mentioned user to a game.
    Challenge {
        /// The mentioned opponent.
        opponent: PlayerId,
    },
}

/// A command was recognized but its arguments are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// The challenge does not mention an opponent.
    #[display("Mention the user you want to play against")]
    MissingOpponent,
}

impl Command {
    /// Parses a chat message.
    ///
    /// Returns `Ok(None)` for messages that are not commands this bot
    /// understands.
    #[instrument]
    pub fn parse(content: &str) -> Result<Option<Self>, CommandError> {
        let Some(rest) = content.strip_prefix(COMMAND_PREFIX) else {
            return Ok(None);
        };
        let mut words = rest.split_whitespace();

        match words.next() {
            Some("othello") => {
                let opponent = words
                    .next()
                    .and_then(parse_mention)
                    .ok_or(CommandError::MissingOpponent)?;
                debug!(%opponent, "Parsed challenge");
                Ok(Some(Command::Challenge { opponent }))
            }
            other => {
                debug!(command = ?other, "Ignoring unknown command");
                Ok(None)
            }
        }
    }
}

/// Extracts the user id from a `<@id>` or `<@!id>` mention.
pub fn parse_mention(text: &str) -> Option<PlayerId> {
    let start = text.find("<@")?;
    let rest = &text[start + 2..];
    let rest = rest.strip_prefix('!').unwrap_or(rest);
    let (id, _) = rest.split_once('>')?;

    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    valid.then(|| id.to_string())
}
