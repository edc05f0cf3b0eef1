//! HTTP surface for chat front ends.
//!
//! A front end forwards chat messages and component interactions as JSON and
//! draws whatever view comes back. Silent outcomes map to `204 No Content`.

use crate::command::Command;
use crate::games::othello::Game;
use crate::router::{Action, Dispatch, SessionController};
use crate::session::{Participant, PlayerId, SessionKey};
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Controller type served over HTTP.
pub type GameController = SessionController<Game>;

/// Request for starting a game between two known players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    /// Key of the message that will host the game.
    pub key: SessionKey,
    /// White player.
    pub first: PlayerId,
    /// Black player.
    pub second: PlayerId,
    /// Avatar of the white player.
    #[serde(default)]
    pub first_avatar: Option<String>,
    /// Avatar of the black player.
    #[serde(default)]
    pub second_avatar: Option<String>,
}

/// A chat message that may contain a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Key of the message that will host a game started by this command.
    pub message_key: SessionKey,
    /// Author of the message.
    pub author: PlayerId,
    /// Avatar of the author.
    #[serde(default)]
    pub author_avatar: Option<String>,
    /// Message text.
    pub content: String,
}

/// A component interaction on a game message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRequest {
    /// Player who interacted.
    pub actor: PlayerId,
    /// What they did.
    pub action: Action,
}

/// Plain text reply to a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Reply text.
    pub reply: String,
}

/// Builds the HTTP router around a shared controller.
pub fn build_router(controller: GameController) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/games", post(create_game))
        .route("/messages", post(post_message))
        .route("/games/{key}/interactions", post(interact))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(controller)
}

fn log_request(req: Request) -> Request {
    debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn health() -> &'static str {
    "ok"
}

fn participant(id: PlayerId, avatar: Option<String>) -> Participant {
    let participant = Participant::new(id);
    match avatar {
        Some(url) => participant.with_avatar_url(url),
        None => participant,
    }
}

fn start_game(
    controller: &GameController,
    key: SessionKey,
    first: Participant,
    second: Participant,
) -> Response {
    match controller.create_session(key, first, second) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(e) => (StatusCode::CONFLICT, Json(Reply { reply: e.to_string() })).into_response(),
    }
}

#[instrument(skip(controller, req), fields(key = %req.key))]
async fn create_game(
    State(controller): State<GameController>,
    Json(req): Json<CreateGameRequest>,
) -> Response {
    info!(first = %req.first, second = %req.second, "Create game requested");
    start_game(
        &controller,
        req.key,
        participant(req.first, req.first_avatar),
        participant(req.second, req.second_avatar),
    )
}

#[instrument(skip(controller, req), fields(message_key = %req.message_key, author = %req.author))]
async fn post_message(
    State(controller): State<GameController>,
    Json(req): Json<MessageRequest>,
) -> Response {
    match Command::parse(&req.content) {
        Ok(Some(Command::Challenge { opponent })) => {
            info!(%opponent, "Challenge received");
            start_game(
                &controller,
                req.message_key,
                participant(req.author, req.author_avatar),
                Participant::new(opponent),
            )
        }
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, Json(Reply { reply: e.to_string() })).into_response(),
    }
}

#[instrument(skip(controller, req), fields(actor = %req.actor, action = ?req.action))]
async fn interact(
    State(controller): State<GameController>,
    Path(key): Path<SessionKey>,
    Json(req): Json<InteractionRequest>,
) -> Response {
    match controller.dispatch(&key, &req.actor, req.action) {
        Dispatch::Ignored { reason } => {
            debug!(%reason, "Interaction ignored");
            StatusCode::NO_CONTENT.into_response()
        }
        dispatch => (StatusCode::OK, Json(dispatch)).into_response(),
    }
}
