/// Shelf RPC - Audiobookshelf listening status as Discord Rich Presence
use clap::Parser;
use shelf_client::ShelfClient;
use shelf_presence::{Poller, PresenceChannel};
use shelf_rpc::{config::RpcConfig, logging, update, DiscordPresence};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelf-rpc", version)]
#[command(about = "Mirror your Audiobookshelf listening session to Discord", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Poll interval in seconds (overrides the config file)
    #[arg(long)]
    interval: Option<u64>,

    /// Skip the startup release check
    #[arg(long)]
    no_update_check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    tracing::info!("Using config file: {}", cli.config.display());

    let mut config = RpcConfig::load(&cli.config)?;
    if let Some(interval) = cli.interval {
        config.poll_interval_secs = interval;
    }
    config.validate()?;

    if config.check_for_updates && !cli.no_update_check {
        update::log_update_status().await;
    }

    let client = ShelfClient::new(config.client_config())?;
    if let Err(e) = client.ping().await {
        tracing::warn!("Audiobookshelf not reachable yet ({}), will keep polling", e);
    }

    let discord = DiscordPresence::connect(config.discord_app_id()?).await?;

    tracing::info!(
        "Polling {} every {}s",
        client.url(),
        config.poll_interval_secs
    );

    let mut poller = Poller::new(client.clone(), client, discord);
    poller
        .run_until(config.poll_interval(), shutdown_signal())
        .await;

    let discord = poller.into_channel();
    if let Err(e) = discord.clear_presence().await {
        tracing::warn!("Failed to clear presence on shutdown: {}", e);
    }
    discord.disconnect().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
