pub mod commands;
pub mod handlers;
pub mod notifier;

#[cfg(test)]
pub(crate) mod testing;

use crate::config::Config;
use crate::database::shifts::ShiftStore;
use anyhow::Result;
use notifier::Notifier;
use poise::serenity_prelude as serenity;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

#[derive(Clone)]
pub struct Data {
    pub store: ShiftStore,
    pub config: Config,
    pub notifier: Notifier,
}

/// Builds the client. The store must already be open with its schema in place.
pub async fn create_bot(config: Config, store: ShiftStore) -> Result<serenity::Client> {
    let data = Data {
        store,
        notifier: Notifier::from_config(&config),
        config: config.clone(),
    };

    let intents = serenity::GatewayIntents::non_privileged();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                register_commands(ctx, &framework.options().commands, data.config.guild_id)
                    .await?;
                Ok(data)
            })
        })
        .build();

    let client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    Ok(client)
}

/// Registers slash commands in one guild, or globally when no guild is configured.
pub async fn register_commands(
    ctx: &serenity::Context,
    commands: &[poise::Command<Data, Error>],
    guild_id: Option<serenity::GuildId>,
) -> Result<(), Error> {
    match guild_id {
        Some(guild_id) => {
            poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
            tracing::info!("Registered {} commands in guild {}", commands.len(), guild_id);
        }
        None => {
            poise::builtins::register_globally(ctx, commands).await?;
            tracing::info!("Registered {} commands globally", commands.len());
        }
    }
    Ok(())
}
