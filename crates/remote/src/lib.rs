use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

pub use reqwest::StatusCode;
pub use url::ParseError;

// --- Transport Adapter Pattern ---
pub type HttpClient = reqwest::Client;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),
    #[error("Unexpected status: {status}")]
    Status { status: StatusCode, body: String },
    #[error("Malformed response body: {0}")]
    Decode(serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("URL cannot carry path segments: {0}")]
    CannotBeABase(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RemoteError::Status {
                status,
                body: String::new(),
            },
            None => RemoteError::Transport(err),
        }
    }
}

impl RemoteError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            RemoteError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// Handle to a remote JSON API rooted at a base URL.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct Remote {
    pub http: HttpClient,
    base_url: Url,
}

impl Remote {
    pub fn new(base_url: &str) -> Result<Self, RemoteError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::CannotBeABase(base_url.to_string()));
        }

        let http = HttpClient::builder().build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base path and terminates it with a slash.
    /// Each segment is percent-encoded as a single path component.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    /// Issues a single GET. Any non-2xx status is an error regardless of the
    /// body; a 2xx body that does not decode into `T` is a `Decode` error.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RemoteError> {
        tracing::debug!("Sending request");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        tracing::debug!(%status, "Response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(RemoteError::Decode)
    }
}
