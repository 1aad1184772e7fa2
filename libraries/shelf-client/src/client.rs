//! Main Audiobookshelf client.

use crate::covers::CoverClient;
use crate::error::{Result, ShelfClientError};
use crate::sessions::SessionsClient;
use crate::types::{ClientConfig, ListeningSession};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the parts of the Audiobookshelf API the presence daemon reads.
///
/// Every request carries the configured bearer token and is bounded by the
/// configured timeout, so a hung connection fails the current poll instead
/// of stalling the loop.
///
/// # Example
///
/// ```ignore
/// use shelf_client::{ClientConfig, ShelfClient};
///
/// let client = ShelfClient::new(ClientConfig::new("https://abs.example.com", "token"))?;
/// let sessions = client.listening_sessions().await?;
/// if let Some(session) = sessions.first() {
///     let cover = client.search_cover(&session.display_title, &session.display_author).await?;
///     println!("{} -> {}", session.display_title, cover);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ShelfClient {
    http: Client,
    config: ClientConfig,
}

impl ShelfClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ShelfClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ShelfClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        if config.token.trim().is_empty() {
            return Err(ShelfClientError::InvalidConfig(
                "API token cannot be empty".into(),
            ));
        }

        if config.sessions_per_page == 0 {
            return Err(ShelfClientError::InvalidConfig(
                "sessions per page must be at least 1".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(config.timeout))
            .user_agent(format!("ShelfRpc/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ShelfClientError::Request)?;

        Ok(Self {
            http,
            config: ClientConfig { url, ..config },
        })
    }

    /// Get the normalized server URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Get the provider used for cover searches.
    pub fn cover_provider(&self) -> &str {
        &self.config.cover_provider
    }

    /// Check that the server answers at all.
    ///
    /// This does not require authentication.
    pub async fn ping(&self) -> Result<()> {
        let url = format!("{}/ping", self.config.url);
        debug!(url = %url, "Pinging server");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ShelfClientError::from_send)?;

        error_for_status(response).await?;
        info!(url = %self.config.url, "Server reachable");
        Ok(())
    }

    /// Fetch the most recent listening sessions, newest first.
    pub async fn listening_sessions(&self) -> Result<Vec<ListeningSession>> {
        self.sessions().recent(self.config.sessions_per_page).await
    }

    /// Return the first cover reference the configured provider knows for a book.
    pub async fn search_cover(&self, title: &str, author: &str) -> Result<String> {
        self.covers()
            .first_cover(title, author, &self.config.cover_provider)
            .await
    }

    /// Get the listening-sessions client.
    pub fn sessions(&self) -> SessionsClient<'_> {
        SessionsClient::new(&self.http, &self.config.url, &self.config.token)
    }

    /// Get the cover-search client.
    pub fn covers(&self) -> CoverClient<'_> {
        CoverClient::new(&self.http, &self.config.url, &self.config.token)
    }
}

/// Map non-success statuses onto client errors, passing successful responses through.
pub(crate) async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else if status.as_u16() == 401 || status.as_u16() == 403 {
        let error_text = response.text().await.unwrap_or_default();
        Err(ShelfClientError::AuthFailed(if error_text.is_empty() {
            status.to_string()
        } else {
            error_text
        }))
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(ShelfClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        })
    }
}
