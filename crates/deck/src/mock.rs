//! In-process stand-in for the deck-of-cards service, served over real HTTP.

use crate::models::Card;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use rand::{Rng, distributions::Alphanumeric, seq::SliceRandom};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

const VALUES: [(&str, &str); 13] = [
    ("A", "ACE"),
    ("2", "2"),
    ("3", "3"),
    ("4", "4"),
    ("5", "5"),
    ("6", "6"),
    ("7", "7"),
    ("8", "8"),
    ("9", "9"),
    ("0", "10"),
    ("J", "JACK"),
    ("Q", "QUEEN"),
    ("K", "KING"),
];

const SUITS: [(&str, &str); 4] = [
    ("S", "SPADES"),
    ("D", "DIAMONDS"),
    ("C", "CLUBS"),
    ("H", "HEARTS"),
];

/// Deck id that answers draws with a 200 and a non-JSON body.
pub const GARBLED_DECK: &str = "garbled";
/// Deck id that answers draws with a 503.
pub const UNAVAILABLE_DECK: &str = "unavailable";

#[derive(Default)]
pub struct MockState {
    decks: Mutex<HashMap<String, Vec<Card>>>,
    requests: Mutex<Vec<String>>,
}

impl MockState {
    /// Path and query of every request received, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn remaining(&self, deck_id: &str) -> Option<usize> {
        self.decks.lock().unwrap().get(deck_id).map(Vec::len)
    }

    fn record(&self, uri: &Uri) {
        let entry = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default();
        self.requests.lock().unwrap().push(entry);
    }
}

pub struct MockServer {
    pub base_url: String,
    pub state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn() -> MockServer {
    let state = Arc::new(MockState::default());
    let router = Router::new()
        .route("/api/deck/new/", get(new_unshuffled))
        .route("/api/deck/new/shuffle/", get(new_shuffled))
        .route("/api/deck/{deck_id}/draw/", get(draw))
        .route("/api/deck/{deck_id}/shuffle/", get(shuffle))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockServer {
        base_url: format!("http://{}/api/deck", addr),
        state,
        handle,
    }
}

fn full_deck(packs: u32) -> Vec<Card> {
    let mut cards = Vec::with_capacity(packs as usize * 52);
    for _ in 0..packs {
        for (suit_code, suit) in SUITS {
            for (rank_code, value) in VALUES {
                let code = format!("{}{}", rank_code, suit_code);
                cards.push(Card {
                    image: format!("https://deckofcardsapi.com/static/img/{}.png", code),
                    code,
                    value: value.to_string(),
                    suit: suit.to_string(),
                });
            }
        }
    }
    cards
}

fn new_deck_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

fn missing_deck() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "success": false, "error": "Deck ID does not exist." })),
    )
        .into_response()
}

#[derive(Deserialize)]
struct CreateParams {
    deck_count: Option<u32>,
}

#[derive(Deserialize)]
struct DrawParams {
    count: Option<u32>,
}

fn create(state: &MockState, params: CreateParams, shuffle: bool) -> Response {
    let mut cards = full_deck(params.deck_count.unwrap_or(1));
    if shuffle {
        cards.shuffle(&mut rand::thread_rng());
    }

    let deck_id = new_deck_id();
    let remaining = cards.len();
    state.decks.lock().unwrap().insert(deck_id.clone(), cards);

    Json(json!({
        "success": true,
        "deck_id": deck_id,
        "remaining": remaining,
        "shuffled": shuffle,
    }))
    .into_response()
}

async fn new_shuffled(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    Query(params): Query<CreateParams>,
) -> Response {
    state.record(&uri);
    create(&state, params, true)
}

async fn new_unshuffled(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    Query(params): Query<CreateParams>,
) -> Response {
    state.record(&uri);
    create(&state, params, false)
}

async fn draw(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    Path(deck_id): Path<String>,
    Query(params): Query<DrawParams>,
) -> Response {
    state.record(&uri);
    match deck_id.as_str() {
        GARBLED_DECK => return (StatusCode::OK, "<html>upstream hiccup</html>").into_response(),
        UNAVAILABLE_DECK => return StatusCode::SERVICE_UNAVAILABLE.into_response(),
        _ => {}
    }

    let mut decks = state.decks.lock().unwrap();
    let Some(deck) = decks.get_mut(&deck_id) else {
        return missing_deck();
    };

    let count = params.count.unwrap_or(1) as usize;
    let take = count.min(deck.len());
    let enough = count <= deck.len();
    let cards: Vec<Card> = deck.drain(..take).collect();

    let mut body = json!({
        "success": enough,
        "deck_id": deck_id,
        "cards": cards,
        "remaining": deck.len(),
    });
    if !enough {
        body["error"] = json!(format!("Not enough cards remaining to draw {} additional", count));
    }
    Json(body).into_response()
}

async fn shuffle(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    Path(deck_id): Path<String>,
) -> Response {
    state.record(&uri);
    let mut decks = state.decks.lock().unwrap();
    let Some(deck) = decks.get_mut(&deck_id) else {
        return missing_deck();
    };

    deck.shuffle(&mut rand::thread_rng());
    Json(json!({
        "success": true,
        "deck_id": deck_id,
        "remaining": deck.len(),
        "shuffled": true,
    }))
    .into_response()
}
