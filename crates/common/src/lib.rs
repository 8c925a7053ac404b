use clap::{ArgAction, Args};

pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck";

#[derive(Clone, Debug, Args)]
pub struct Config {
    /// Root of the deck-of-cards API.
    #[arg(long, env = "DECK_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Create decks through `/new/shuffle/` instead of `/new/`.
    #[arg(
        long,
        env = "DECK_SHUFFLE_ON_CREATE",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub shuffle_on_create: bool,

    /// Number of 52-card packs combined into each new deck.
    #[arg(long, env = "DECK_COUNT", default_value_t = 1)]
    pub deck_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            shuffle_on_create: true,
            deck_count: 1,
        }
    }
}
