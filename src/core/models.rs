use chrono::{DateTime, FixedOffset, NaiveTime};
use serde::Serialize;
use url::Url;

use crate::errors::NotifyError;

/// Fields lifted from an upstream response before validation. Feed entries
/// and headline articles both reduce to this shape.
#[derive(Debug, Clone, Default)]
pub struct RawItem {
    /// Feed channel title or article source name; used only for message
    /// formatting, never validated.
    pub source_name: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
}

/// A validated upstream item, alive for a single invocation. Serialized into
/// the success response as `data`.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub title: String,
    pub body: String,
    pub url: Url,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<FixedOffset>,
}

impl Item {
    /// Validate a raw item: all four fields present and non-empty, the link
    /// an absolute URL, the timestamp parseable. Any miss fails the whole
    /// request; nothing is posted for a partially valid item.
    pub fn from_raw(raw: RawItem) -> Result<Self, NotifyError> {
        let title = non_empty("title", raw.title)?;
        let body = non_empty("body", raw.body)?;
        let url_str = non_empty("url", raw.url)?;
        let published_str = non_empty("publishedAt", raw.published_at)?;

        let url = Url::parse(&url_str).map_err(|e| {
            NotifyError::Validation(format!("url '{url_str}' is not an absolute URL: {e}"))
        })?;
        let published_at = parse_timestamp(&published_str)?;

        Ok(Self {
            title,
            body,
            url,
            published_at,
        })
    }
}

fn non_empty(field: &str, value: Option<String>) -> Result<String, NotifyError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| NotifyError::Validation(format!("missing or empty field '{field}'")))
}

/// Parse an upstream timestamp. Podcast feeds publish RFC 2822 dates,
/// headline APIs RFC 3339; some feeds ship a bare `YYYY-MM-DD`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, NotifyError> {
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .or_else(|_| {
            chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        })
        .map_err(|e| NotifyError::Validation(format!("unparseable timestamp '{value}': {e}")))
}
