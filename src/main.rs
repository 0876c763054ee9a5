use anyhow::Result;
use discord_shift::bot;
use discord_shift::config::Config;
use discord_shift::database::{self, shifts::ShiftStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "discord_shift=info,poise=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Open the shift store; creates the file and schema when absent
    tracing::info!("Opening shift database at {}", config.database_path.display());
    let pool = database::create_connection(&config.database_path).await?;
    let store = ShiftStore::new(pool);

    // Create and start the bot
    let mut client = bot::create_bot(config, store).await?;

    tracing::info!("Starting Discord bot...");

    if let Err(why) = client.start().await {
        tracing::error!("Client error: {:?}", why);
    }

    Ok(())
}
