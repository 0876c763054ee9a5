use crate::bot::Error;
use crate::bot::notifier::Courier;
use poise::serenity_prelude::ChannelId;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Ephemeral(String),
    Channel(ChannelId, String),
}

/// In-memory [`Courier`] that records every outgoing message.
#[derive(Default)]
pub struct RecordingCourier {
    pub replied: AtomicBool,
    pub resolvable: bool,
    pub post_fails: bool,
    pub(crate) sent: Mutex<Vec<Sent>>,
}

impl RecordingCourier {
    pub fn resolvable() -> Self {
        Self {
            resolvable: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

impl Courier for RecordingCourier {
    fn has_replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), Error> {
        self.replied.store(true, Ordering::SeqCst);
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Ephemeral(content.to_string()));
        Ok(())
    }

    async fn resolve_channel(&self, _channel_id: ChannelId) -> bool {
        self.resolvable
    }

    async fn post_to_channel(&self, channel_id: ChannelId, content: &str) -> Result<(), Error> {
        if self.post_fails {
            return Err("missing permissions".into());
        }
        self.sent
            .lock()
            .unwrap()
            .push(Sent::Channel(channel_id, content.to_string()));
        Ok(())
    }
}
