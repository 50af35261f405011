//! Podcast RSS source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rss::Channel;
use tracing::debug;

use super::NewsSource;
use crate::core::models::RawItem;
use crate::errors::NotifyError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Render width for HTML-to-text reduction of episode descriptions.
const TEXT_WIDTH: usize = 80;

/// Fetches a podcast RSS feed and surfaces its newest episode.
pub struct PodcastSource {
    client: Client,
    feed_url: String,
}

impl PodcastSource {
    pub fn new(feed_url: String) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Retrieval(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, feed_url })
    }
}

#[async_trait]
impl NewsSource for PodcastSource {
    async fn latest(&self) -> Result<RawItem, NotifyError> {
        debug!("Fetching podcast feed from {}", self.feed_url);

        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(|e| NotifyError::Retrieval(format!("feed request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Retrieval(format!(
                "HTTP {status} when fetching {}",
                self.feed_url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::Retrieval(format!("failed to read feed body: {e}")))?;

        parse_feed(&body)
    }
}

/// Parse a feed document and lift its first entry. Episode bodies prefer
/// `content:encoded` over `<description>`; both routinely carry markup and
/// are reduced to plain text.
pub fn parse_feed(xml: &str) -> Result<RawItem, NotifyError> {
    let channel = xml.parse::<Channel>()?;

    let episode = channel
        .items()
        .first()
        .ok_or_else(|| NotifyError::Retrieval("feed has no items".to_string()))?;

    Ok(RawItem {
        source_name: Some(channel.title().to_string()).filter(|t| !t.is_empty()),
        title: episode.title().map(str::to_string),
        body: episode
            .content()
            .or_else(|| episode.description())
            .map(html_to_text),
        url: episode.link().map(str::to_string),
        published_at: episode.pub_date().map(str::to_string),
    })
}

fn html_to_text(html: &str) -> String {
    html2text::from_read(html.as_bytes(), TEXT_WIDTH)
        .map(|text| text.trim_end().to_string())
        .unwrap_or_else(|_| html.to_string())
}
