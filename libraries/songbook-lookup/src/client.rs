//! Lookup service client.

use crate::error::{LookupError, Result};
use crate::types::{LookupConfig, SongDetails};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// Client for the song details lookup service.
///
/// Wraps a single pooled `reqwest::Client`; clone the surrounding `Arc`
/// rather than the client to share it between requests.
pub struct LookupClient {
    http: Client,
    base_url: String,
}

impl LookupClient {
    /// Create a new client with the given configuration.
    pub fn new(config: LookupConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(LookupError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(LookupError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Songbook/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch release date, lyrics, and link for `group` / `song`.
    ///
    /// Query values are percent-encoded. Any status other than 200 is
    /// returned as [`LookupError::Rejected`] carrying the upstream status.
    pub async fn song_details(&self, group: &str, song: &str) -> Result<SongDetails> {
        let url = format!("{}/info", self.base_url);
        debug!(url = %url, group, song, "Fetching song details");

        let response = self
            .http
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        debug!(status = status.as_u16(), "Lookup service responded");

        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Lookup service rejected request");
            return Err(LookupError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Unreachable(e.to_string())
            } else {
                LookupError::ParseError(format!("Failed to read song details: {}", e))
            }
        })?;
        serde_json::from_str(&body).map_err(|e| {
            LookupError::ParseError(format!("Failed to parse song details: {}", e))
        })
    }
}

fn classify(err: reqwest::Error) -> LookupError {
    if err.is_connect() || err.is_timeout() {
        LookupError::Unreachable(err.to_string())
    } else {
        LookupError::Request(err)
    }
}
