//! Types for Audiobookshelf API requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout for every outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of sessions requested per poll.
pub const DEFAULT_SESSIONS_PER_PAGE: u32 = 1;

/// Default external metadata provider used for cover lookups.
pub const DEFAULT_COVER_PROVIDER: &str = "audible";

/// Configuration for connecting to an Audiobookshelf server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://abs.example.com")
    pub url: String,
    /// API token sent as a bearer credential
    pub token: String,
    /// Upper bound on a single request, connect included
    pub timeout: Duration,
    /// Page size for the listening-sessions request
    pub sessions_per_page: u32,
    /// Metadata provider passed to the cover search
    pub cover_provider: String,
}

impl ClientConfig {
    /// Create a config with default timeout, page size and provider.
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            sessions_per_page: DEFAULT_SESSIONS_PER_PAGE,
            cover_provider: DEFAULT_COVER_PROVIDER.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_sessions_per_page(mut self, sessions_per_page: u32) -> Self {
        self.sessions_per_page = sessions_per_page;
        self
    }

    pub fn with_cover_provider(mut self, provider: impl Into<String>) -> Self {
        self.cover_provider = provider.into();
        self
    }
}

// =============================================================================
// Listening Session Types
// =============================================================================

/// One listening session as reported by `/api/me/listening-sessions`.
///
/// Positions are in seconds; `started_at` and `updated_at` are epoch
/// milliseconds on the server clock.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListeningSession {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub library_item_id: Option<String>,
    #[serde(default)]
    pub display_title: String,
    #[serde(default, alias = "author")]
    pub display_author: String,
    pub current_time: f64,
    pub duration: f64,
    pub started_at: i64,
    pub updated_at: i64,
}

/// Paged listening-sessions response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningSessionsResponse {
    pub sessions: Vec<ListeningSession>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub num_pages: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub items_per_page: Option<u64>,
}

// =============================================================================
// Cover Search Types
// =============================================================================

/// Response from `/api/search/covers`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoverSearchResponse {
    pub results: Vec<String>,
}
