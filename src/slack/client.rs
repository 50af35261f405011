//! Slack API client.
//!
//! Encapsulates the Slack API interactions for posting channel messages.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::SlackApiChatPostMessageRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent};

use crate::errors::NotifyError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Slack API client holding the bot token and its transports.
pub struct SlackClient {
    client: SlackHyperClient,
    http: Client,
    token: SlackApiToken,
}

impl SlackClient {
    pub fn new(token: String) -> Result<Self, NotifyError> {
        let client = SlackHyperClient::new(SlackClientHyperConnector::new().map_err(|e| {
            NotifyError::Delivery(format!("failed to create Slack client connector: {e}"))
        })?);
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Delivery(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            http,
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        })
    }

    /// Post a plain text message to a channel.
    pub async fn post_text(&self, channel_id: &str, text: &str) -> Result<(), NotifyError> {
        let session = self.client.open_session(&self.token);

        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId(channel_id.to_string()),
            SlackMessageContent::new().with_text(text.to_string()),
        );

        session.chat_post_message(&post_req).await?;

        Ok(())
    }

    /// Post a Block Kit message. Goes through the Web API directly since the
    /// blocks are assembled as JSON.
    pub async fn post_blocks(
        &self,
        channel_id: &str,
        text_fallback: &str,
        blocks: &Value,
    ) -> Result<(), NotifyError> {
        let payload = json!({
            "channel": channel_id,
            "text": text_fallback,
            "blocks": blocks,
        });

        let resp = self
            .http
            .post("https://slack.com/api/chat.postMessage")
            .bearer_auth(&self.token.token_value.0)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(format!("failed to post message: {e}")))?;

        if !resp.status().is_success() {
            return Err(NotifyError::Delivery(format!(
                "chat.postMessage HTTP {}",
                resp.status()
            )));
        }

        let body: Value = resp.json().await.map_err(|e| {
            NotifyError::Delivery(format!("chat.postMessage JSON parse error: {e}"))
        })?;

        if !body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            return Err(NotifyError::Delivery(format!(
                "chat.postMessage error: {}",
                body.get("error").and_then(Value::as_str).unwrap_or("unknown")
            )));
        }

        Ok(())
    }
}
