use crate::bot::{Context, Error};
use crate::config::Config;
use crate::utils::format::AUDIT_ACK_MESSAGE;
use poise::serenity_prelude as serenity;
use serenity::ChannelId;
use std::future::Future;
use std::sync::atomic::Ordering;

/// Outgoing side of a single command invocation.
pub trait Courier {
    /// Whether the invocation already has an initial response.
    fn has_replied(&self) -> bool;

    fn reply_ephemeral(&self, content: &str) -> impl Future<Output = Result<(), Error>> + Send;

    /// Whether the channel exists and is visible to the bot.
    fn resolve_channel(&self, channel_id: ChannelId) -> impl Future<Output = bool> + Send;

    fn post_to_channel(
        &self,
        channel_id: ChannelId,
        content: &str,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Ephemeral ack to the user, full text to the audit channel.
    Audit,
    /// Ack was delivered but posting to the audit channel failed.
    AuditFailed,
    /// Full text as an ephemeral reply.
    Direct,
}

#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    audit_channel: Option<ChannelId>,
}

impl Notifier {
    pub fn new(audit_channel: Option<ChannelId>) -> Self {
        Self { audit_channel }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.audit_channel_id)
    }

    pub async fn notify<C: Courier>(&self, courier: &C, text: &str) -> Result<Delivery, Error> {
        if let Some(channel_id) = self.audit_channel {
            if courier.resolve_channel(channel_id).await {
                if !courier.has_replied() {
                    courier.reply_ephemeral(AUDIT_ACK_MESSAGE).await?;
                }

                return match courier.post_to_channel(channel_id, text).await {
                    Ok(()) => Ok(Delivery::Audit),
                    Err(e) => {
                        tracing::warn!("Failed to post to audit channel {}: {:?}", channel_id, e);
                        Ok(Delivery::AuditFailed)
                    }
                };
            }

            tracing::warn!(
                "Audit channel {} could not be resolved, replying directly",
                channel_id
            );
        }

        courier.reply_ephemeral(text).await?;
        Ok(Delivery::Direct)
    }
}

/// [`Courier`] backed by a poise command context.
pub struct InteractionCourier<'a> {
    ctx: Context<'a>,
}

impl<'a> InteractionCourier<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

impl Courier for InteractionCourier<'_> {
    fn has_replied(&self) -> bool {
        match self.ctx {
            poise::Context::Application(app) => {
                app.has_sent_initial_response.load(Ordering::SeqCst)
            }
            _ => false,
        }
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), Error> {
        self.ctx
            .send(
                poise::CreateReply::default()
                    .content(content)
                    .ephemeral(true),
            )
            .await?;
        Ok(())
    }

    async fn resolve_channel(&self, channel_id: ChannelId) -> bool {
        channel_id
            .to_channel(self.ctx.serenity_context())
            .await
            .is_ok()
    }

    async fn post_to_channel(&self, channel_id: ChannelId, content: &str) -> Result<(), Error> {
        channel_id
            .say(self.ctx.serenity_context(), content)
            .await?;
        Ok(())
    }
}
