//! Slack delivery.

pub mod client;
pub mod message;

pub use client::SlackClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::NotifyError;

/// One outbound channel message: flat text, optionally with Block Kit
/// blocks (the text doubles as the client fallback).
#[derive(Debug, Clone)]
pub struct ChannelMessage {
    pub text: String,
    pub blocks: Option<Value>,
}

/// Delivers a formatted message to a channel.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn post(&self, channel_id: &str, message: &ChannelMessage) -> Result<(), NotifyError>;
}

/// Production messenger backed by the Slack client.
pub struct SlackMessenger {
    client: SlackClient,
}

impl SlackMessenger {
    pub fn new(client: SlackClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Messenger for SlackMessenger {
    async fn post(&self, channel_id: &str, message: &ChannelMessage) -> Result<(), NotifyError> {
        match &message.blocks {
            Some(blocks) => {
                self.client
                    .post_blocks(channel_id, &message.text, blocks)
                    .await
            }
            None => self.client.post_text(channel_id, &message.text).await,
        }
    }
}
