//! Session lifecycle errors.

use crate::session::SessionKey;
use derive_more::{Display, Error};

/// Errors reported to whoever asks for a new session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// A live session already occupies the key.
    #[display("Session {key} already exists")]
    AlreadyExists {
        /// The contested key.
        key: SessionKey,
    },
    /// The engine was already in a terminal position, so there is nothing to play.
    #[display("Game on {key} is already over")]
    AlreadyFinished {
        /// Key the game would have been hosted on.
        key: SessionKey,
    },
}
