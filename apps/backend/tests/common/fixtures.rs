//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};

/// A card as the client sends it.
pub fn card(id: &str, question: &str, answer: &str, category: Option<&str>) -> Value {
    json!({
        "id": id,
        "question": question,
        "answer": answer,
        "category": category,
    })
}

/// The six-card starter deck, as request JSON.
pub fn sample_cards() -> Vec<Value> {
    vec![
        card("1", "What is the capital of France?", "Paris", Some("Geography")),
        card("2", "What is 2 + 2?", "4", Some("Math")),
        card("3", "Who wrote Romeo and Juliet?", "William Shakespeare", Some("Literature")),
        card("4", "What is the largest planet in our solar system?", "Jupiter", Some("Science")),
        card("5", "In what year did World War II end?", "1945", Some("History")),
        card("6", "What is the chemical symbol for gold?", "Au", Some("Chemistry")),
    ]
}

/// Cards with multi-word answers sharing categories.
pub fn rich_cards() -> Vec<Value> {
    let mut cards = sample_cards();
    cards.push(card(
        "7",
        "What do plants need for photosynthesis?",
        "sunlight water and carbon dioxide",
        Some("Science"),
    ));
    cards.push(card(
        "8",
        "What is the powerhouse of the cell?",
        "the mitochondria",
        Some("Science"),
    ));
    cards
}

/// Body for POST /api/sessions with a fixed seed.
pub fn session_request(game: &str, cards: Vec<Value>) -> Value {
    json!({
        "game": game,
        "cards": cards,
        "seed": 42,
    })
}

pub fn choice(index: u64) -> Value {
    json!({ "kind": "choice", "value": index })
}

pub fn text(value: &str) -> Value {
    json!({ "kind": "text", "value": value })
}

pub fn reviewed() -> Value {
    json!({ "kind": "reviewed" })
}

pub fn skip() -> Value {
    json!({ "kind": "skip" })
}

pub fn pair(first: u64, second: u64) -> Value {
    json!({ "kind": "pair", "value": { "first": first, "second": second } })
}

pub fn self_grade(knew: bool) -> Value {
    json!({ "kind": "self_grade", "value": knew })
}
