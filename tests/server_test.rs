//! Tests for the HTTP surface.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use othello_table::{GameController, ViewModel, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> (GameController, Router) {
    let controller = GameController::new();
    let app = build_router(controller.clone());
    (controller, app)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Option<Value>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let json = if bytes.is_empty() {
        None
    } else {
        serde_json::from_slice(&bytes).ok()
    };
    (status, json)
}

async fn create_game(app: &Router) {
    let (status, _) = post(
        app,
        "/games",
        json!({ "key": "msg-1", "first": "A", "second": "B", "first_avatar": "https://a.example/a.png" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn interact(app: &Router, actor: &str, action: Value) -> (StatusCode, Option<Value>) {
    post(
        app,
        "/games/msg-1/interactions",
        json!({ "actor": actor, "action": action }),
    )
    .await
}

#[tokio::test]
async fn test_health() {
    let (_, app) = app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_game_returns_initial_view() {
    let (controller, app) = app();
    let (status, body) = post(
        &app,
        "/games",
        json!({ "key": "msg-1", "first": "A", "second": "B", "first_avatar": "https://a.example/a.png" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let view: ViewModel = serde_json::from_value(body.expect("json body")).expect("view model");
    assert_eq!(view.title(), "Othello");
    assert_eq!(view.footer().icon_url().as_deref(), Some("https://a.example/a.png"));
    assert!(view.controls().is_some());
    assert!(controller.store().contains("msg-1"));
}

#[tokio::test]
async fn test_duplicate_game_conflicts() {
    let (_, app) = app();
    create_game(&app).await;

    let (status, body) = post(
        &app,
        "/games",
        json!({ "key": "msg-1", "first": "C", "second": "D" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let reply = body.expect("json body");
    assert!(reply["reply"].as_str().expect("reply text").contains("already exists"));
}

#[tokio::test]
async fn test_challenge_message_starts_game() {
    let (controller, app) = app();
    let (status, _) = post(
        &app,
        "/messages",
        json!({ "message_key": "reply-9", "author": "111", "content": "!othello <@222>" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let session = controller.store().get_session("reply-9").expect("game started");
    assert_eq!(session.participants().first().id(), "111");
    assert_eq!(session.participants().second().id(), "222");
}

#[tokio::test]
async fn test_challenge_without_mention_gets_reply() {
    let (controller, app) = app();
    let (status, body) = post(
        &app,
        "/messages",
        json!({ "message_key": "reply-9", "author": "111", "content": "!othello" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.expect("json body")["reply"],
        "Mention the user you want to play against"
    );
    assert!(controller.store().is_empty());
}

#[tokio::test]
async fn test_plain_message_is_ignored() {
    let (controller, app) = app();
    let (status, body) = post(
        &app,
        "/messages",
        json!({ "message_key": "m", "author": "111", "content": "good game" }),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());
    assert!(controller.store().is_empty());
}

#[tokio::test]
async fn test_selection_and_commit_over_http() {
    let (_, app) = app();
    create_game(&app).await;

    let (status, body) = interact(&app, "A", json!({ "kind": "select_column", "value": 2 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("json body")["status"], "updated");

    interact(&app, "A", json!({ "kind": "select_row", "value": 4 })).await;
    let (status, body) = interact(&app, "A", json!({ "kind": "commit" })).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.expect("json body");
    assert_eq!(body["status"], "updated");
    assert!(
        body["view"]["body"]
            .as_str()
            .expect("body text")
            .contains("Previous: 2,4W")
    );
}

#[tokio::test]
async fn test_wrong_player_is_silent() {
    let (_, app) = app();
    create_game(&app).await;

    let (status, body) = interact(&app, "B", json!({ "kind": "pass" })).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());
}

#[tokio::test]
async fn test_incomplete_commit_returns_notice() {
    let (_, app) = app();
    create_game(&app).await;

    let (status, body) = interact(&app, "A", json!({ "kind": "commit" })).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.expect("json body");
    assert_eq!(body["status"], "notice");
    assert_eq!(body["notice"]["kind"], "incomplete_move");
    assert_eq!(body["notice"]["recipient"], "A");
}

#[tokio::test]
async fn test_unknown_game_is_silent() {
    let (_, app) = app();
    let (status, _) = interact(&app, "A", json!({ "kind": "pass" })).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_out_of_range_coordinate_is_rejected() {
    let (controller, app) = app();
    create_game(&app).await;

    let (status, _) = interact(&app, "A", json!({ "kind": "select_column", "value": 8 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let session = controller.store().get_session("msg-1").expect("game is live");
    assert_eq!(session.pending().column(), None);
}
