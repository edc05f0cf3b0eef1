//! Routes player interactions to game sessions.
//!
//! Every action goes through the same pipeline: look the session up,
//! authorize the actor against the side the engine reports as next to move,
//! apply the action, then render. Lookups and turn checks that fail are
//! reported as [`Dispatch::Ignored`] so callers can tell "nothing happened"
//! apart from an update.

use crate::error::SessionError;
use crate::games::othello::{Coord, Outcome};
use crate::pending::Axis;
use crate::render::{ViewModel, render};
use crate::rule_engine::RuleEngine;
use crate::session::{
    Participant, Participants, PlayerId, Session, SessionKey, SessionStore, lock,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// An interaction with a game message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Picks the column of the next stone.
    SelectColumn(Coord),
    /// Picks the row of the next stone.
    SelectRow(Coord),
    /// Places a stone at the picked coordinates.
    Commit,
    /// Gives up the turn.
    Pass,
}

/// Why an action had no effect and produced no reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum Ignored {
    /// No live game is hosted on the message.
    SessionNotFound,
    /// The actor is not the player to move.
    NotYourTurn,
}

/// Kind of private notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Commit attempted by someone other than the player to move.
    NotYourTurn,
    /// Commit attempted before both coordinates were picked.
    IncompleteMove,
    /// The rule engine refused the move.
    Rejected,
}

/// Message shown only to the actor. Game state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Notice {
    /// Player the notice is addressed to.
    recipient: PlayerId,
    /// What went wrong.
    kind: NoticeKind,
    /// User-facing text.
    message: String,
}

impl Notice {
    fn not_your_turn(actor: &str) -> Self {
        Self {
            recipient: actor.to_string(),
            kind: NoticeKind::NotYourTurn,
            message: "It's not your turn".to_string(),
        }
    }

    fn incomplete_move(actor: &str) -> Self {
        Self {
            recipient: actor.to_string(),
            kind: NoticeKind::IncompleteMove,
            message: "Select both a column and a row before placing a stone".to_string(),
        }
    }

    fn rejected(actor: &str, reason: &impl std::fmt::Display) -> Self {
        Self {
            recipient: actor.to_string(),
            kind: NoticeKind::Rejected,
            message: format!("<@{actor}> move failed: {reason}"),
        }
    }
}

/// Result of routing one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Dispatch {
    /// The game message should be redrawn in place.
    Updated {
        /// New view.
        view: ViewModel,
    },
    /// The game is over and its session is gone.
    Finished {
        /// Final view, without controls.
        view: ViewModel,
    },
    /// Private reply to the actor.
    Notice {
        /// The reply.
        notice: Notice,
    },
    /// Nothing happened.
    Ignored {
        /// Why.
        reason: Ignored,
    },
}

impl Dispatch {
    /// The view to redraw, if any.
    pub fn view(&self) -> Option<&ViewModel> {
        match self {
            Dispatch::Updated { view } | Dispatch::Finished { view } => Some(view),
            Dispatch::Notice { .. } | Dispatch::Ignored { .. } => None,
        }
    }

    /// The private notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Dispatch::Notice { notice } => Some(notice),
            _ => None,
        }
    }

    /// True when the action had no effect.
    pub fn is_ignored(&self) -> bool {
        matches!(self, Dispatch::Ignored { .. })
    }

    fn ignored(reason: Ignored) -> Self {
        Dispatch::Ignored { reason }
    }
}

/// Creates sessions and routes interactions to them.
#[derive(Debug)]
pub struct SessionController<E> {
    store: SessionStore<E>,
}

impl<E> Clone for SessionController<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<E> Default for SessionController<E> {
    fn default() -> Self {
        Self::with_store(SessionStore::new())
    }
}

impl<E> SessionController<E> {
    /// Creates a controller with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller over an existing store.
    pub fn with_store(store: SessionStore<E>) -> Self {
        Self { store }
    }

    /// Returns the session store.
    pub fn store(&self) -> &SessionStore<E> {
        &self.store
    }
}

impl<E: RuleEngine + Clone> SessionController<E> {
    /// Starts a game on a fresh engine and returns its first view.
    #[instrument(skip(self, first, second), fields(first = %first.id(), second = %second.id()))]
    pub fn create_session(
        &self,
        key: SessionKey,
        first: Participant,
        second: Participant,
    ) -> Result<ViewModel, SessionError>
    where
        E: Default,
    {
        self.create_session_with(key, Participants::new(first, second), E::default())
    }

    /// Starts a game on the given engine and returns its first view.
    #[instrument(skip(self, participants, engine))]
    pub fn create_session_with(
        &self,
        key: SessionKey,
        participants: Participants,
        engine: E,
    ) -> Result<ViewModel, SessionError> {
        if engine.outcome().is_terminal() {
            warn!(
                session_key = %key,
                outcome = ?engine.outcome(),
                "Refusing to host a finished game"
            );
            return Err(SessionError::AlreadyFinished { key });
        }

        let session = Session::new(key, participants, engine);
        let view = render(&session);
        self.store.insert(session)?;
        Ok(view)
    }

    /// Routes one action to the session hosted on `key`.
    #[instrument(skip(self))]
    pub fn dispatch(&self, key: &str, actor: &str, action: Action) -> Dispatch {
        let Some(handle) = self.store.get(key) else {
            return Dispatch::ignored(Ignored::SessionNotFound);
        };
        let mut session = lock(&handle);

        // Finished by an action that held the lock before us.
        if session.is_finished() {
            debug!("Session already finished");
            return Dispatch::ignored(Ignored::SessionNotFound);
        }

        if !session.is_players_turn(actor) {
            debug!(expected = %session.player_to_move().id(), "Actor is not the player to move");
            return match action {
                Action::Commit => Dispatch::Notice {
                    notice: Notice::not_your_turn(actor),
                },
                Action::SelectColumn(_) | Action::SelectRow(_) | Action::Pass => {
                    Dispatch::ignored(Ignored::NotYourTurn)
                }
            };
        }

        match action {
            Action::SelectColumn(column) => self.select(&mut session, Axis::Column, column),
            Action::SelectRow(row) => self.select(&mut session, Axis::Row, row),
            Action::Commit => self.commit(&mut session, actor),
            Action::Pass => self.pass(&mut session, actor),
        }
    }

    fn select(&self, session: &mut Session<E>, axis: Axis, value: Coord) -> Dispatch {
        session.pending_mut().set(axis, value);
        debug!(%axis, %value, pending = ?session.pending(), "Coordinate selected");
        Dispatch::Updated {
            view: render(session),
        }
    }

    fn commit(&self, session: &mut Session<E>, actor: &str) -> Dispatch {
        let Some((column, row)) = session.pending().complete() else {
            debug!(pending = ?session.pending(), "Commit before both coordinates were selected");
            return Dispatch::Notice {
                notice: Notice::incomplete_move(actor),
            };
        };

        let side = session.engine().next_side();
        let before = session.engine().clone();

        match session.engine_mut().place(side, column, row) {
            Ok(outcome) => {
                session.pending_mut().reset();
                info!(?side, %column, %row, ?outcome, "Stone placed");
                self.settle(session, outcome)
            }
            Err(e) => {
                *session.engine_mut() = before;
                warn!(?side, %column, %row, error = %e, "Placement rejected");
                Dispatch::Notice {
                    notice: Notice::rejected(actor, &e),
                }
            }
        }
    }

    fn pass(&self, session: &mut Session<E>, actor: &str) -> Dispatch {
        let side = session.engine().next_side();
        let before = session.engine().clone();

        match session.engine_mut().pass(side) {
            Ok(outcome) => {
                session.pending_mut().reset();
                info!(?side, ?outcome, "Turn passed");
                self.settle(session, outcome)
            }
            Err(e) => {
                *session.engine_mut() = before;
                warn!(?side, error = %e, "Pass rejected");
                Dispatch::Notice {
                    notice: Notice::rejected(actor, &e),
                }
            }
        }
    }

    /// Renders after an accepted move, tearing the session down if the
    /// engine reports the game over.
    fn settle(&self, session: &Session<E>, outcome: Outcome) -> Dispatch {
        let view = render(session);

        if outcome.is_terminal() {
            self.store.remove(session.key());
            info!(session_key = %session.key(), ?outcome, "Game finished");
            Dispatch::Finished { view }
        } else {
            Dispatch::Updated { view }
        }
    }
}
