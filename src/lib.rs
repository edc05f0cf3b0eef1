//! Othello Table library - two-player Othello hosted on a chat message
//!
//! Each game lives on one chat message that is edited in place after every
//! accepted action. Players build a move by picking a column and a row, then
//! commit it or pass.
//!
//! # Architecture
//!
//! - **Games**: Othello rule engine behind the [`RuleEngine`] capability trait
//! - **Pending**: the move being assembled, one coordinate at a time
//! - **Session**: per-message game sessions and the process-wide store
//! - **Router**: authorizes and routes interactions, tears down finished games
//! - **Render**: pure session-to-view rendering
//! - **Server**: HTTP surface for chat front ends
//!
//! # Example
//!
//! ```
//! use othello_table::{Action, Coord, Dispatch, Game, Participant, SessionController};
//!
//! let controller = SessionController::<Game>::new();
//! controller
//!     .create_session(
//!         "msg-1".to_string(),
//!         Participant::new("alice".to_string()),
//!         Participant::new("bob".to_string()),
//!     )
//!     .expect("fresh key");
//!
//! let column = Coord::new(2).expect("on the board");
//! let dispatch = controller.dispatch("msg-1", "alice", Action::SelectColumn(column));
//! assert!(matches!(dispatch, Dispatch::Updated { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod command;
mod config;
mod error;
mod games;
mod pending;
mod render;
mod router;
mod rule_engine;
mod server;
mod session;

// Crate-level exports - Game types (Othello)
pub use games::othello::{
    BOARD_SIZE, Board, Cell, Coord, CoordError, Game, MoveError, Outcome, Side, Turn,
};

// Crate-level exports - Rule engine capability
pub use rule_engine::RuleEngine;

// Crate-level exports - Move assembly
pub use pending::{Axis, PendingMove};

// Crate-level exports - Session management
pub use error::SessionError;
pub use session::{
    Participant, Participants, PlayerId, Session, SessionHandle, SessionKey, SessionStore,
};

// Crate-level exports - Interaction routing
pub use router::{Action, Dispatch, Ignored, Notice, NoticeKind, SessionController};

// Crate-level exports - Rendering
pub use render::{
    BLACK_STONE, Controls, EMPTY_CELL, Footer, NUMBER_GLYPHS, SelectOption, Selector, TITLE,
    Trigger, ViewModel, WHITE_STONE, render, render_board, stone,
};

// Crate-level exports - Chat commands
pub use command::{COMMAND_PREFIX, Command, CommandError, parse_mention};

// Crate-level exports - Configuration
pub use config::{ConfigError, TableConfig};

// Crate-level exports - HTTP surface
pub use server::{
    CreateGameRequest, GameController, InteractionRequest, MessageRequest, Reply, build_router,
};
