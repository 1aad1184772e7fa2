//! Discord Rich Presence channel using discord-sdk

use std::time::Duration;

use async_trait::async_trait;
use discord_sdk::{
    activity::{ActivityBuilder, Assets},
    wheel::{UserState, Wheel},
    Discord, Subscriptions,
};
use shelf_presence::{PresenceChannel, PresenceError, PresencePayload};

/// Timeout for waiting for Discord handshake
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Connected Discord client publishing listening activity.
pub struct DiscordPresence {
    discord: Discord,
    // Keeps the event receivers alive for the lifetime of the connection
    _wheel: Wheel,
}

impl DiscordPresence {
    /// Connect to the local Discord client and wait for the handshake.
    ///
    /// Failing here is fatal at startup; the daemon has nowhere to publish to.
    pub async fn connect(app_id: i64) -> Result<Self, PresenceError> {
        let (wheel, handler) = Wheel::new(Box::new(|err| {
            tracing::warn!("Discord error: {:?}", err);
        }));

        let mut user_spoke = wheel.user();

        let discord = Discord::new(app_id, Subscriptions::ACTIVITY, Box::new(handler))
            .map_err(|e| PresenceError::Channel(format!("Discord not available: {}", e)))?;

        tracing::info!("Discord connecting...");

        let user = match tokio::time::timeout(HANDSHAKE_TIMEOUT, async {
            if user_spoke.0.changed().await.is_err() {
                Err("Discord connection closed".to_string())
            } else {
                match &*user_spoke.0.borrow() {
                    UserState::Connected(user) => Ok(user.clone()),
                    UserState::Disconnected(err) => Err(format!("Discord disconnected: {:?}", err)),
                }
            }
        })
        .await
        {
            Ok(Ok(user)) => user,
            Ok(Err(e)) => return Err(PresenceError::Channel(e)),
            Err(_) => {
                return Err(PresenceError::Channel(
                    "Discord handshake timed out".to_string(),
                ))
            }
        };

        tracing::info!(
            "Discord Rich Presence connected as {}#{}",
            user.username,
            user.discriminator.unwrap_or(0)
        );

        Ok(Self {
            discord,
            _wheel: wheel,
        })
    }

    /// Close the IPC connection.
    pub async fn disconnect(self) {
        self.discord.disconnect().await;
        tracing::info!("Discord Rich Presence disconnected");
    }
}

/// Translate a payload into a Discord activity.
fn activity_for(payload: &PresencePayload) -> ActivityBuilder {
    let activity = ActivityBuilder::new()
        .details(payload.details.clone())
        .state(payload.state.clone())
        .instance(payload.instance)
        .start_timestamp(payload.started_at)
        .end_timestamp(payload.ends_at);

    match &payload.image_key {
        Some(key) => activity.assets(
            Assets::default().large(key.clone(), Some(payload.image_text.clone())),
        ),
        None => activity,
    }
}

#[async_trait]
impl PresenceChannel for DiscordPresence {
    fn name(&self) -> &'static str {
        "Discord"
    }

    async fn set_presence(&self, payload: &PresencePayload) -> shelf_presence::Result<()> {
        self.discord
            .update_activity(activity_for(payload))
            .await
            .map(|_| ())
            .map_err(|e| PresenceError::Channel(e.to_string()))
    }

    async fn clear_presence(&self) -> shelf_presence::Result<()> {
        self.discord
            .clear_activity()
            .await
            .map(|_| ())
            .map_err(|e| PresenceError::Channel(e.to_string()))
    }
}
