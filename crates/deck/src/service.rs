use crate::models::{CreateDeckRequest, DeckResponse};
use crate::repository::DeckRepository;
use common::Config;
use remote::{Remote, RemoteError, StatusCode};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Request failed: {reason}")]
    Request {
        status: Option<StatusCode>,
        reason: String,
    },
    #[error("Could not decode deck response: {0}")]
    Decode(String),
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl DeckError {
    /// HTTP status of a rejected request; `None` when the call never got one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DeckError::Request { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<RemoteError> for DeckError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Status { status, body } if body.is_empty() => DeckError::Request {
                status: Some(status),
                reason: status.to_string(),
            },
            RemoteError::Status { status, body } => DeckError::Request {
                status: Some(status),
                reason: format!("{}: {}", status, body),
            },
            RemoteError::Decode(e) => DeckError::Decode(e.to_string()),
            RemoteError::InvalidUrl(_) | RemoteError::CannotBeABase(_) => {
                DeckError::Configuration(err.to_string())
            }
            _ => DeckError::Request {
                status: err.status(),
                reason: err.to_string(),
            },
        }
    }
}

/// Stateless handle for the three deck operations.
///
/// Clones share one connection pool, so a single client can serve concurrent
/// calls; nothing orders or serializes them locally.
#[derive(Clone, Debug)]
pub struct DeckClient {
    remote: Remote,
    create: CreateDeckRequest,
}

impl DeckClient {
    pub fn new(config: &Config) -> Result<Self, DeckError> {
        let remote = Remote::new(&config.base_url)?;
        let create = CreateDeckRequest::new(config.shuffle_on_create, config.deck_count);
        Ok(Self { remote, create })
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, DeckError> {
        Self::new(&Config {
            base_url: base_url.to_string(),
            ..Config::default()
        })
    }

    pub fn create_options(&self) -> CreateDeckRequest {
        self.create
    }

    #[instrument(skip(self))]
    pub async fn create_deck(&self) -> Result<DeckResponse, DeckError> {
        let repo = DeckRepository::new(&self.remote);
        let deck = repo.create(&self.create).await?;

        log_rejection(&deck);
        tracing::info!(deck_id = %deck.deck_id, remaining = deck.remaining, "Deck created");
        Ok(deck)
    }

    /// Draws `count` cards. Neither argument is checked locally; the service
    /// decides what an unknown deck or an oversized count means.
    #[instrument(skip(self))]
    pub async fn draw_cards(&self, deck_id: &str, count: u32) -> Result<DeckResponse, DeckError> {
        let repo = DeckRepository::new(&self.remote);
        let deck = repo.draw(deck_id, count).await?;

        log_rejection(&deck);
        tracing::debug!(drawn = deck.cards().len(), remaining = deck.remaining, "Cards drawn");
        Ok(deck)
    }

    pub async fn draw_card(&self, deck_id: &str) -> Result<DeckResponse, DeckError> {
        self.draw_cards(deck_id, 1).await
    }

    #[instrument(skip(self))]
    pub async fn shuffle_deck(&self, deck_id: &str) -> Result<DeckResponse, DeckError> {
        let repo = DeckRepository::new(&self.remote);
        let deck = repo.shuffle(deck_id).await?;

        log_rejection(&deck);
        tracing::debug!(remaining = deck.remaining, "Deck shuffled");
        Ok(deck)
    }
}

fn log_rejection(deck: &DeckResponse) {
    if !deck.success {
        tracing::warn!(
            deck_id = %deck.deck_id,
            error = deck.error.as_deref().unwrap_or("unspecified"),
            "Service reported success: false"
        );
    }
}
