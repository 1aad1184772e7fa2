//! Listening-session queries.

use crate::client::error_for_status;
use crate::error::{Result, ShelfClientError};
use crate::types::{ListeningSession, ListeningSessionsResponse};
use reqwest::Client;
use tracing::debug;

/// Listening-session client for the authenticated user.
pub struct SessionsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    token: &'a str,
}

impl<'a> SessionsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Get the user's most recent listening sessions, newest first.
    ///
    /// # Arguments
    /// * `per_page` - Upper bound on the number of sessions returned
    pub async fn recent(&self, per_page: u32) -> Result<Vec<ListeningSession>> {
        let url = format!("{}/api/me/listening-sessions", self.base_url);
        debug!(url = %url, per_page, "Fetching listening sessions");

        let response = self
            .http
            .get(&url)
            .query(&[("itemsPerPage", per_page)])
            .bearer_auth(self.token)
            .send()
            .await
            .map_err(ShelfClientError::from_send)?;

        let response = error_for_status(response).await?;

        let page: ListeningSessionsResponse = response.json().await.map_err(|e| {
            ShelfClientError::ParseError(format!("Failed to parse listening sessions: {}", e))
        })?;

        debug!(
            sessions = page.sessions.len(),
            total = ?page.total,
            "Fetched listening sessions"
        );

        Ok(page.sessions)
    }
}
