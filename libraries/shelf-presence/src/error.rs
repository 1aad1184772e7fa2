use shelf_client::ShelfClientError;
use thiserror::Error;

/// Errors raised by a presence channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresenceError {
    #[error("Presence channel error: {0}")]
    Channel(String),

    #[error("Presence channel disconnected")]
    Disconnected,
}

/// Failures absorbed by a single poll cycle.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Session sampling failed: {0}")]
    Sample(#[from] ShelfClientError),

    #[error(transparent)]
    Presence(#[from] PresenceError),
}

pub type Result<T> = std::result::Result<T, PresenceError>;
