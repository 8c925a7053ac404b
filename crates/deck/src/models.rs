use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Card {
    pub code: String,  // rank + suit, e.g. "AS", "0H"
    pub image: String,
    pub value: String,
    pub suit: String,
}

/// Envelope returned by every deck endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct DeckResponse {
    pub success: bool,
    pub deck_id: String,
    pub remaining: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
    /// Set by the service alongside `success: false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeckResponse {
    /// Drawn cards in draw order; empty when the response carried none.
    pub fn cards(&self) -> &[Card] {
        self.cards.as_deref().unwrap_or_default()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled.unwrap_or(false)
    }
}

// ENCAPSULATION: fields are fixed once the client is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateDeckRequest {
    shuffle: bool,
    deck_count: u32,
}

impl CreateDeckRequest {
    pub fn new(shuffle: bool, deck_count: u32) -> Self {
        Self { shuffle, deck_count }
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn deck_count(&self) -> u32 {
        self.deck_count
    }

    pub fn path(&self) -> &'static [&'static str] {
        if self.shuffle {
            &["new", "shuffle"]
        } else {
            &["new"]
        }
    }
}

impl Default for CreateDeckRequest {
    fn default() -> Self {
        Self::new(true, 1)
    }
}
