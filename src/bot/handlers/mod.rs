use crate::bot::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Ready { data_about_bot } = event {
        tracing::info!(
            "Bot logged in as {} (audit channel: {})",
            data_about_bot.user.name,
            data.config
                .audit_channel_id
                .map_or_else(|| "none".to_string(), |id| id.to_string())
        );
    }
    Ok(())
}
