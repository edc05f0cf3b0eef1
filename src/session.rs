//! Game session management.
//!
//! A session is one game hosted on one chat message. The store maps message
//! keys to sessions; each session sits behind its own lock so two actions on
//! the same game never interleave while actions on different games never
//! wait on each other.

use crate::error::SessionError;
use crate::games::othello::Side;
use crate::pending::PendingMove;
use crate::rule_engine::RuleEngine;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Identifier of the message hosting a game.
pub type SessionKey = String;

/// Identifier of a chat user.
pub type PlayerId = String;

/// Shared handle to a live session.
pub type SessionHandle<E> = Arc<Mutex<Session<E>>>;

/// Locks a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A player seated at a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters, new)]
#[setters(prefix = "with_", strip_option)]
pub struct Participant {
    /// Chat identity of the player.
    id: PlayerId,
    /// Avatar shown in the game footer.
    #[new(default)]
    avatar_url: Option<String>,
}

impl Participant {
    /// Chat mention for this player.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// The two players of a game, fixed at creation.
///
/// `first` plays white and moves first; `second` plays black.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Participants {
    /// White player.
    first: Participant,
    /// Black player.
    second: Participant,
}

impl Participants {
    /// Returns the player who moves for `side`.
    pub fn for_side(&self, side: Side) -> &Participant {
        match side {
            Side::White => &self.first,
            Side::Black => &self.second,
        }
    }
}

/// A game in progress.
#[derive(Debug, Clone, Getters)]
pub struct Session<E> {
    /// Key of the hosting message.
    key: SessionKey,
    /// Rule engine state.
    engine: E,
    /// Seated players.
    participants: Participants,
    /// Move being assembled by the side to move.
    pending: PendingMove,
    /// Creation time, for display only.
    created_at: DateTime<Utc>,
}

impl<E: RuleEngine> Session<E> {
    /// Creates a new session around an engine.
    #[instrument(skip(participants, engine))]
    pub fn new(key: SessionKey, participants: Participants, engine: E) -> Self {
        debug!(session_key = %key, "Creating new game session");
        Self {
            key,
            engine,
            participants,
            pending: PendingMove::new(),
            created_at: Utc::now(),
        }
    }

    /// Returns the player whose side the engine reports as next to move.
    pub fn player_to_move(&self) -> &Participant {
        self.participants.for_side(self.engine.next_side())
    }

    /// Checks if it's the given player's turn.
    ///
    /// Derived from the engine on every call; nothing is cached.
    #[instrument(skip(self), fields(session_key = %self.key))]
    pub fn is_players_turn(&self, player_id: &str) -> bool {
        let next = self.engine.next_side();
        let is_turn = self.participants.for_side(next).id() == player_id;
        debug!(player_id, next = ?next, is_turn, "Checked if player's turn");
        is_turn
    }

    /// True once the engine reports a winner or a draw.
    pub fn is_finished(&self) -> bool {
        self.engine.outcome().is_terminal()
    }

    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub(crate) fn pending_mut(&mut self) -> &mut PendingMove {
        &mut self.pending
    }
}

/// Process-wide map from message key to live session.
#[derive(Debug)]
pub struct SessionStore<E> {
    sessions: Arc<Mutex<HashMap<SessionKey, SessionHandle<E>>>>,
}

impl<E> Clone for SessionStore<E> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
        }
    }
}

impl<E> Default for SessionStore<E> {
    fn default() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<E> SessionStore<E> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session under its key.
    ///
    /// A live session under the same key is never replaced.
    #[instrument(skip(self, session), fields(session_key = %session.key))]
    pub fn insert(&self, session: Session<E>) -> Result<SessionHandle<E>, SessionError> {
        let mut sessions = lock(&self.sessions);

        if sessions.contains_key(&session.key) {
            warn!("Session already exists");
            return Err(SessionError::AlreadyExists {
                key: session.key.clone(),
            });
        }

        let key = session.key.clone();
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(key, Arc::clone(&handle));
        info!(count = sessions.len(), "Stored new session");
        Ok(handle)
    }

    /// Gets the handle of a live session.
    #[instrument(skip(self))]
    pub fn get(&self, key: &str) -> Option<SessionHandle<E>> {
        let handle = lock(&self.sessions).get(key).cloned();
        if handle.is_none() {
            debug!(session_key = key, "Session not found");
        }
        handle
    }

    /// Removes a session. Later lookups of the key find nothing.
    #[instrument(skip(self))]
    pub fn remove(&self, key: &str) -> Option<SessionHandle<E>> {
        let removed = lock(&self.sessions).remove(key);
        if removed.is_some() {
            info!(session_key = key, "Session destroyed");
        }
        removed
    }

    /// Checks whether a live session exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        lock(&self.sessions).contains_key(key)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    /// True when no session is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Clone> SessionStore<E> {
    /// Returns a copy of a live session.
    #[instrument(skip(self))]
    pub fn get_session(&self, key: &str) -> Option<Session<E>> {
        let handle = self.get(key)?;
        let session = lock(&handle).clone();
        Some(session)
    }
}
