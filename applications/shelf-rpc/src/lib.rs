//! Shelf RPC Library
//!
//! Startup layer for the presence daemon: configuration, logging, update
//! check and the Discord presence channel.
//!
//! This library exposes the components for testing purposes.

pub mod config;
pub mod discord;
pub mod error;
pub mod logging;
pub mod update;

// Re-export commonly used types for convenience
pub use config::RpcConfig;
pub use discord::DiscordPresence;
pub use error::{Result, RpcError};
