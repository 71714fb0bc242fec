//! Catalog, answer checking and card API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use arcade_core::Tier;
use common::fixtures;
use common::TestContext;

/// Test the health endpoint.
#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

/// Test the catalog lists every game for the pro plan.
#[tokio::test]
async fn test_list_games_pro() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/games").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let games = body["games"].as_array().unwrap();

    assert_eq!(body["tier"], "pro");
    assert_eq!(games.len(), 14);
    assert!(games.iter().all(|g| g["allowed"] == true));

    let speed = games.iter().find(|g| g["id"] == "speedround").unwrap();
    assert_eq!(speed["time_limit_secs"], 60);
    assert_eq!(speed["auto_advance_ms"], 1000);
    assert_eq!(speed["card_limit"], 20);
    assert!(speed["reveal_delay_ms"].is_null());

    let quiz = games.iter().find(|g| g["id"] == "quiz").unwrap();
    assert_eq!(quiz["reveal_delay_ms"], 2000);
}

/// Test the catalog marks pro-only games on a trial plan.
#[tokio::test]
async fn test_list_games_trial() {
    let ctx = TestContext::with_tier(Tier::Trial);
    let server = ctx.server();

    let body: Value = server.get("/api/games").await.json();
    let allowed: Vec<&str> = body["games"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|g| g["allowed"] == true)
        .map(|g| g["id"].as_str().unwrap())
        .collect();

    assert_eq!(
        allowed,
        vec!["flashcards", "quiz", "truefalse", "typeanswer", "hintmaster"]
    );
}

/// Test availability reports why a game cannot be played.
#[tokio::test]
async fn test_availability() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/games/sequencematch/availability")
        .json(&json!({ "cards": fixtures::sample_cards() }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["available"], false);
    assert_eq!(body["reason"]["reason"], "no_long_answers");
    assert_eq!(body["reason"]["min_words"], 3);

    let body: Value = server
        .post("/api/games/sequencematch/availability")
        .json(&json!({ "cards": fixtures::rich_cards() }))
        .await
        .json();
    assert_eq!(body["available"], true);
    assert_eq!(body["duplicate_answers"], false);
    assert!(body.get("reason").is_none());
}

/// Test availability flags cards that share an answer.
#[tokio::test]
async fn test_availability_flags_duplicate_answers() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let mut cards = fixtures::sample_cards();
    cards.push(fixtures::card("7", "Which city hosts the Louvre?", "Paris", None));

    let body: Value = server
        .post("/api/games/quiz/availability")
        .json(&json!({ "cards": cards }))
        .await
        .json();
    assert_eq!(body["available"], true);
    assert_eq!(body["duplicate_answers"], true);
}

/// Test an unknown game id is not found.
#[tokio::test]
async fn test_unknown_game() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/games/pong/availability")
        .json(&json!({ "cards": fixtures::sample_cards() }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test fuzzy answer checking.
#[tokio::test]
async fn test_check_answer() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let body: Value = server
        .post("/api/answers/check")
        .json(&json!({ "typed": "Jupitar", "correct": "Jupiter" }))
        .await
        .json();
    assert_eq!(body["is_correct"], true);
    assert_eq!(body["matching_mode"], "fuzzy");

    let body: Value = server
        .post("/api/answers/check")
        .json(&json!({ "typed": "Jupitar", "correct": "Jupiter", "mode": "exact" }))
        .await
        .json();
    assert_eq!(body["is_correct"], false);
}

/// Test the sample deck endpoint.
#[tokio::test]
async fn test_sample_cards() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let body: Value = server.get("/api/cards/sample").await.json();
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 6);
    assert_eq!(cards[0]["answer"], "Paris");
}

/// Test card creation trims input and respects the trial allowance.
#[tokio::test]
async fn test_create_cards_trial_limit() {
    let ctx = TestContext::with_tier(Tier::Trial);
    let server = ctx.server();

    let response = server
        .post("/api/cards")
        .json(&json!({ "question": "  Capital of Italy? ", "answer": "Rome", "category": " " }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["id"], "1");
    assert_eq!(body["question"], "Capital of Italy?");
    assert!(body.get("category").is_none());

    for i in 1..10 {
        server
            .post("/api/cards")
            .json(&json!({ "question": format!("Q{i}"), "answer": format!("A{i}") }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server
        .post("/api/cards")
        .json(&json!({ "question": "One more?", "answer": "No" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(ctx.state.subscription.read().await.cards_created, 10);
}

/// Test an empty question is rejected.
#[tokio::test]
async fn test_create_card_validation() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/cards")
        .json(&json!({ "question": "", "answer": "Rome" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Bad request: question must not be empty");
}
