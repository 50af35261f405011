//! Outbound message formatting.
//!
//! Podcast episodes get the rich Block Kit layout (header, body section with
//! an embedded link, publication-date footer); headlines go out as flat text.

use chrono::{DateTime, FixedOffset};
use serde_json::{Value, json};

use crate::core::models::Item;

/// Header used when the feed does not name itself.
const FALLBACK_HEADER: &str = "📢 最新エピソード";

/// Build the Block Kit blocks for a podcast episode notification.
#[must_use]
pub fn build_episode_blocks(item: &Item, source_name: Option<&str>) -> Value {
    let header = match source_name {
        Some(name) => format!("📢 {name} 最新エピソード"),
        None => FALLBACK_HEADER.to_string(),
    };

    json!([
        {
            "type": "header",
            "text": { "type": "plain_text", "text": header, "emoji": true }
        },
        {
            "type": "section",
            "text": {
                "type": "mrkdwn",
                "text": format!(
                    "*{}*\n\n{}\n\n<{}|エピソードを聴く>",
                    item.title, item.body, item.url
                )
            }
        },
        {
            "type": "context",
            "elements": [
                {
                    "type": "mrkdwn",
                    "text": format!("公開日: {}", format_pub_date(&item.published_at))
                }
            ]
        }
    ])
}

/// Fallback text shown by clients that cannot render blocks.
#[must_use]
pub fn episode_fallback_text(item: &Item) -> String {
    format!("{} {}", item.title, item.url)
}

/// Flat text for the headline variant.
#[must_use]
pub fn build_headline_text(item: &Item) -> String {
    format!("*{}*\n{}\n{}", item.title, item.body, item.url)
}

/// Publication dates are displayed the way Japanese locales render them.
#[must_use]
pub fn format_pub_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%Y/%m/%d").to_string()
}
