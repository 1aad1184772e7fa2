/// Daemon configuration
use crate::error::{Result, RpcError};
use serde::{Deserialize, Serialize};
use shelf_client::ClientConfig;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `SHELF_RPC_AUDIOBOOKSHELF_TOKEN`.
pub const ENV_PREFIX: &str = "SHELF_RPC";

/// Canonical setting names. File keys are matched against these ignoring
/// case and underscores, so installer-written `audiobookshelfToken` lands
/// on `audiobookshelf_token`.
const KEYS: &[&str] = &[
    "discord_client_id",
    "audiobookshelf_url",
    "audiobookshelf_token",
    "poll_interval_secs",
    "request_timeout_secs",
    "cover_provider",
    "check_for_updates",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcConfig {
    /// Discord application the presence is published under
    #[serde(default = "default_discord_client_id")]
    pub discord_client_id: String,

    #[serde(default)]
    pub audiobookshelf_url: String,

    #[serde(default)]
    pub audiobookshelf_token: String,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_cover_provider")]
    pub cover_provider: String,

    #[serde(default = "default_check_for_updates")]
    pub check_for_updates: bool,
}

impl RpcConfig {
    /// Load configuration from a file (if present) and the environment.
    ///
    /// The file format follows the extension; files without one are read as JSON.
    /// Environment variables take precedence over file values.
    pub fn load(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            // File values are defaults under their canonical key; the
            // environment source overrides them.
            for (key, value) in read_file(path)? {
                settings = settings
                    .set_default(canonical_key(&key), value)
                    .map_err(|e| RpcError::Config(e.to_string()))?;
            }
        } else {
            tracing::warn!(
                "Config file {} not found, using environment only",
                path.display()
            );
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| RpcError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| RpcError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.audiobookshelf_url.trim().is_empty() {
            return Err(RpcError::Config(format!(
                "audiobookshelf_url is required (set {}_AUDIOBOOKSHELF_URL)",
                ENV_PREFIX
            )));
        }

        if self.audiobookshelf_token.trim().is_empty() {
            return Err(RpcError::Config(format!(
                "audiobookshelf_token is required (set {}_AUDIOBOOKSHELF_TOKEN)",
                ENV_PREFIX
            )));
        }

        self.discord_app_id()?;

        if self.poll_interval_secs == 0 {
            return Err(RpcError::Config(
                "poll_interval_secs must be at least 1".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(RpcError::Config(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Numeric Discord application id.
    pub fn discord_app_id(&self) -> Result<i64> {
        self.discord_client_id.trim().parse().map_err(|_| {
            RpcError::Config(format!(
                "discord_client_id must be numeric, got {:?}",
                self.discord_client_id
            ))
        })
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Settings for the Audiobookshelf client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.audiobookshelf_url, &self.audiobookshelf_token)
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_cover_provider(&self.cover_provider)
    }
}

fn read_file(path: &Path) -> Result<HashMap<String, config::Value>> {
    let file = config::File::from(path.to_path_buf());
    let file = if path.extension().is_none() {
        file.format(config::FileFormat::Json)
    } else {
        file
    };

    config::Config::builder()
        .add_source(file)
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| RpcError::Config(e.to_string()))
}

/// Map a file key onto its canonical setting name; unknown keys pass through.
fn canonical_key(key: &str) -> String {
    let flat = |k: &str| k.replace('_', "").to_ascii_lowercase();
    let wanted = flat(key);
    KEYS.iter()
        .find(|k| flat(k) == wanted)
        .map_or_else(|| key.to_string(), |k| k.to_string())
}

// Default values
fn default_discord_client_id() -> String {
    "1283070638088650752".to_string()
}

fn default_poll_interval_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_cover_provider() -> String {
    shelf_client::DEFAULT_COVER_PROVIDER.to_string()
}

fn default_check_for_updates() -> bool {
    true
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            discord_client_id: default_discord_client_id(),
            audiobookshelf_url: String::new(),
            audiobookshelf_token: String::new(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            cover_provider: default_cover_provider(),
            check_for_updates: default_check_for_updates(),
        }
    }
}
