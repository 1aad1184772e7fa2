/// Application error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RpcError>;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Update check failed: {0}")]
    UpdateCheck(String),
}
