//! Cover art lookups through the server's metadata providers.

use crate::client::error_for_status;
use crate::error::{Result, ShelfClientError};
use crate::types::CoverSearchResponse;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Cover-search client.
pub struct CoverClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    token: &'a str,
}

impl<'a> CoverClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, token: &'a str) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Search covers for a book through a single provider.
    pub async fn search(
        &self,
        title: &str,
        author: &str,
        provider: &str,
    ) -> Result<CoverSearchResponse> {
        let url = Url::parse_with_params(
            &format!("{}/api/search/covers", self.base_url),
            &[("title", title), ("author", author), ("provider", provider)],
        )
        .map_err(|e| ShelfClientError::InvalidUrl(e.to_string()))?;

        debug!(url = %url, "Searching covers");

        let response = self
            .http
            .get(url)
            .bearer_auth(self.token)
            .send()
            .await
            .map_err(ShelfClientError::from_send)?;

        let response = error_for_status(response).await?;

        response.json().await.map_err(|e| {
            ShelfClientError::ParseError(format!("Failed to parse cover search: {}", e))
        })
    }

    /// Return the first cover candidate, or `NoCoverFound` if there is none.
    pub async fn first_cover(&self, title: &str, author: &str, provider: &str) -> Result<String> {
        let response = self.search(title, author, provider).await?;

        let cover = response
            .results
            .into_iter()
            .find(|c| !c.trim().is_empty())
            .ok_or_else(|| ShelfClientError::NoCoverFound {
                title: title.to_string(),
            })?;

        debug!(title = %title, provider = %provider, cover = %cover, "Resolved cover");
        Ok(cover)
    }
}
