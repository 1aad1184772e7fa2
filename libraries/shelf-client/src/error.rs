//! Error types for the Audiobookshelf client.

use thiserror::Error;

/// Errors that can occur when talking to an Audiobookshelf server.
#[derive(Error, Debug)]
pub enum ShelfClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server is offline, unreachable, or did not answer in time
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The API token was rejected
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Client configuration is unusable
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The cover search returned no candidates
    #[error("No cover found for \"{title}\"")]
    NoCoverFound { title: String },
}

impl ShelfClientError {
    /// Whether the failure happened below the HTTP layer (network, DNS, TLS, timeout).
    pub fn is_transport(&self) -> bool {
        match self {
            Self::ServerUnreachable(_) => true,
            Self::Request(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            Self::ServerUnreachable(e.to_string())
        } else {
            Self::Request(e)
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ShelfClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(ShelfClientError::ServerUnreachable("refused".into()).is_transport());
        assert!(!ShelfClientError::ParseError("bad json".into()).is_transport());
        assert!(!ShelfClientError::ServerError {
            status: 500,
            message: String::new()
        }
        .is_transport());
    }

    #[test]
    fn test_display_messages() {
        let err = ShelfClientError::NoCoverFound {
            title: "Dune".into(),
        };
        assert_eq!(err.to_string(), "No cover found for \"Dune\"");

        let err = ShelfClientError::ServerError {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "Server error (502): Bad Gateway");
    }
}
