//! Seams between the tracker and the outside world

use async_trait::async_trait;
use shelf_client::{ListeningSession, ShelfClient};

use crate::error::Result;
use crate::types::PresencePayload;

/// Source of the user's recent listening sessions, newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn listening_sessions(&self) -> shelf_client::Result<Vec<ListeningSession>>;
}

/// Cover lookup by title and author.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoverSource: Send + Sync {
    /// Return the first cover reference for the book.
    async fn search_cover(&self, title: &str, author: &str) -> shelf_client::Result<String>;
}

/// Channel that displays presence in a companion application.
///
/// Connecting and authenticating is the implementor's business; the
/// synchronizer only calls `set_presence` and `clear_presence`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresenceChannel: Send + Sync {
    /// Returns the name of this channel (for logging)
    fn name(&self) -> &'static str;

    /// Replace the displayed presence
    async fn set_presence(&self, payload: &PresencePayload) -> Result<()>;

    /// Remove any displayed presence
    async fn clear_presence(&self) -> Result<()>;
}

#[async_trait]
impl SessionSource for ShelfClient {
    async fn listening_sessions(&self) -> shelf_client::Result<Vec<ListeningSession>> {
        ShelfClient::listening_sessions(self).await
    }
}

#[async_trait]
impl CoverSource for ShelfClient {
    async fn search_cover(&self, title: &str, author: &str) -> shelf_client::Result<String> {
        ShelfClient::search_cover(self, title, author).await
    }
}
