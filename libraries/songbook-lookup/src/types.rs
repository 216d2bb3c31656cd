//! Types for the lookup service requests and responses.

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Configuration for connecting to the lookup service.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL of the service (e.g., "https://lookup.example.com")
    pub base_url: String,
    /// Overall per-request deadline
    pub timeout: Duration,
    /// Deadline for establishing the connection
    pub connect_timeout: Duration,
}

impl LookupConfig {
    /// Create a config with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Override the request and connect timeouts.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

/// Response body of `GET /info`.
///
/// Missing and `null` fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDetails {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
