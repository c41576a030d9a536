//! HTTP client for the Challonge v1 REST API.

use crate::challonge::wire::TournamentEnvelope;
use crate::models::Tournament;
use reqwest::Client;
use std::time::Duration;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.challonge.com/v1";

/// Errors from fetching a tournament upstream.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No API key in the request or the configuration.
    #[error("No Challonge API key provided")]
    MissingApiKey,
    /// Tournament key contains characters that cannot appear in a Challonge URL slug.
    #[error("Invalid tournament key: {0}")]
    InvalidKey(String),
    /// Request could not be sent or timed out.
    #[error("Network error for {1}: {0}")]
    Network(#[source] reqwest::Error, String),
    /// Upstream answered with a non-success status.
    #[error("Challonge returned {status} for {url}")]
    Status { status: u16, url: String },
    /// Body was not the expected tournament JSON.
    #[error("Could not parse response from {1}: {0}")]
    Parsing(#[source] reqwest::Error, String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

/// Tournament keys are URL slugs, optionally prefixed by an organization subdomain
/// (`subdomain-slug`).
pub fn validate_tournament_key(key: &str) -> Result<(), FetchError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(FetchError::InvalidKey(key.to_string()))
    }
}

/// Challonge API client. Cheap to clone; shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ChallongeClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for ChallongeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(15))
    }
}

impl ChallongeClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("bracket-standings/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Tournament URL without query string (safe to log: the API key is a query parameter).
    pub fn tournament_url(&self, key: &str) -> String {
        format!("{}/tournaments/{}.json", self.base_url, key)
    }

    /// Fetch one tournament with its participants and matches, normalized.
    pub async fn fetch_tournament(&self, key: &str, api_key: &str) -> Result<Tournament, FetchError> {
        validate_tournament_key(key)?;
        if api_key.trim().is_empty() {
            return Err(FetchError::MissingApiKey);
        }
        let url = self.tournament_url(key);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", api_key.trim()),
                ("include_participants", "1"),
                ("include_matches", "1"),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url(), url.clone()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let envelope: TournamentEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Parsing(e.without_url(), url.clone()))?;
        Ok(Tournament::from(envelope.tournament))
    }
}
