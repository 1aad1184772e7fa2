//! Release check against GitHub

use crate::error::{Result, RpcError};
use serde::Deserialize;
use std::time::Duration;

/// Latest-release endpoint of the upstream project.
pub const RELEASES_URL: &str =
    "https://api.github.com/repos/0xGingi/audiobookshelf-discord-rpc/releases/latest";

pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Deserialize)]
struct ReleaseInfo {
    tag_name: String,
}

/// Fetch the latest published version, without a leading `v`.
pub async fn latest_version(http: &reqwest::Client, url: &str) -> Result<String> {
    let response = http
        .get(url)
        .header("User-Agent", format!("ShelfRpc/{}", CURRENT_VERSION))
        .send()
        .await
        .map_err(|e| RpcError::UpdateCheck(e.to_string()))?;

    if !response.status().is_success() {
        return Err(RpcError::UpdateCheck(format!(
            "GitHub API request failed with status: {}",
            response.status()
        )));
    }

    let release: ReleaseInfo = response
        .json()
        .await
        .map_err(|e| RpcError::UpdateCheck(e.to_string()))?;

    Ok(release.tag_name.trim_start_matches('v').to_string())
}

/// Compare dotted numeric versions; non-numeric parts count as zero.
pub fn is_newer(latest: &str, current: &str) -> bool {
    fn parts(version: &str) -> Vec<u64> {
        version
            .split(['.', '-', '+'])
            .take(3)
            .map(|p| p.parse().unwrap_or(0))
            .collect()
    }

    let (mut latest, mut current) = (parts(latest), parts(current));
    latest.resize(3, 0);
    current.resize(3, 0);
    latest > current
}

/// Check for a newer release and log the outcome. Never fails.
pub async fn log_update_status() {
    let http = match reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
    {
        Ok(http) => http,
        Err(e) => {
            tracing::warn!("Skipping update check: {}", e);
            return;
        }
    };

    match latest_version(&http, RELEASES_URL).await {
        Ok(latest) if is_newer(&latest, CURRENT_VERSION) => tracing::warn!(
            "A new version is available: {}. You're currently running version {}.",
            latest,
            CURRENT_VERSION
        ),
        Ok(_) => tracing::info!("You're running the latest version: {}", CURRENT_VERSION),
        Err(e) => tracing::warn!("{}", e),
    }
}
