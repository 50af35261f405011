use std::env;

/// Default feed when `PODCAST_FEED_URL` is not set.
pub const DEFAULT_FEED_URL: &str = "https://lexfridman.com/feed/podcast/";

/// Which upstream the handler pulls its item from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Podcast,
    Headline,
}

impl SourceKind {
    fn parse(value: &str) -> Result<Self, String> {
        match value.to_ascii_lowercase().as_str() {
            "podcast" => Ok(SourceKind::Podcast),
            "headline" => Ok(SourceKind::Headline),
            other => Err(format!("NEWS_SOURCE: unknown source '{other}'")),
        }
    }

    /// Confirmation text returned to the caller on success.
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            SourceKind::Podcast => "ポッドキャスト情報をSlackに送信しました",
            SourceKind::Headline => "ニュース情報をSlackに送信しました",
        }
    }
}

/// Which translator runs over the fetched item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorKind {
    Noop,
    Llm,
}

impl TranslatorKind {
    fn parse(value: &str) -> Result<Self, String> {
        match value.to_ascii_lowercase().as_str() {
            "none" => Ok(TranslatorKind::Noop),
            "llm" => Ok(TranslatorKind::Llm),
            other => Err(format!("TRANSLATOR: unknown translator '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: SourceKind,
    pub translator: TranslatorKind,
    pub slack_bot_token: String,
    pub slack_channel_id: String,
    pub podcast_feed_url: String,
    pub news_api_key: Option<String>,
    pub news_country: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub target_language: String,
}

impl AppConfig {
    /// Read configuration from the environment. Required values depend on
    /// the selected source and translator; everything is checked here, before
    /// any network call is made.
    pub fn from_env() -> Result<Self, String> {
        let source = match optional("NEWS_SOURCE") {
            Some(value) => SourceKind::parse(&value)?,
            None => SourceKind::Podcast,
        };
        let translator = match optional("TRANSLATOR") {
            Some(value) => TranslatorKind::parse(&value)?,
            None => TranslatorKind::Noop,
        };

        let config = Self {
            source,
            translator,
            slack_bot_token: require("SLACK_BOT_TOKEN")?,
            slack_channel_id: require("SLACK_CHANNEL_ID")?,
            podcast_feed_url: optional("PODCAST_FEED_URL")
                .unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            news_api_key: optional("NEWS_API_KEY"),
            news_country: optional("NEWS_COUNTRY").unwrap_or_else(|| "jp".to_string()),
            openai_api_key: optional("OPENAI_API_KEY"),
            openai_model: optional("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            target_language: optional("TARGET_LANGUAGE")
                .unwrap_or_else(|| "Japanese".to_string()),
        };

        if config.source == SourceKind::Headline && config.news_api_key.is_none() {
            return Err("NEWS_API_KEY: required when NEWS_SOURCE=headline".to_string());
        }
        if config.translator == TranslatorKind::Llm && config.openai_api_key.is_none() {
            return Err("OPENAI_API_KEY: required when TRANSLATOR=llm".to_string());
        }

        Ok(config)
    }
}

// An env var that is set but blank counts as missing.

fn require(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(format!("{name}: set but empty")),
        Err(e) => Err(format!("{name}: {e}")),
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
