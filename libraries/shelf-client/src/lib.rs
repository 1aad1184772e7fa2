//! Shelf Client
//!
//! HTTP client library for the Audiobookshelf endpoints the presence daemon
//! reads.
//!
//! # Features
//!
//! - **Listening sessions**: the authenticated user's most recent sessions
//! - **Cover search**: first cover candidate from one metadata provider
//!
//! # Example
//!
//! ```ignore
//! use shelf_client::{ClientConfig, ShelfClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ShelfClient::new(ClientConfig::new("https://abs.example.com", "token"))?;
//!
//!     for session in client.listening_sessions().await? {
//!         println!("{} by {}", session.display_title, session.display_author);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod covers;
mod error;
mod sessions;
mod types;

pub use client::ShelfClient;
pub use error::{Result, ShelfClientError};
pub use types::{
    ClientConfig, CoverSearchResponse, ListeningSession, ListeningSessionsResponse,
    DEFAULT_COVER_PROVIDER, DEFAULT_SESSIONS_PER_PAGE, DEFAULT_TIMEOUT,
};

pub use covers::CoverClient;
pub use sessions::SessionsClient;
