use newscast::core::config::{AppConfig, DEFAULT_FEED_URL, SourceKind, TranslatorKind};

/// Tests for the environment-driven configuration. Env mutation is
/// process-global, so every scenario runs sequentially inside one test.

const ALL_VARS: &[&str] = &[
    "NEWS_SOURCE",
    "TRANSLATOR",
    "SLACK_BOT_TOKEN",
    "SLACK_CHANNEL_ID",
    "PODCAST_FEED_URL",
    "NEWS_API_KEY",
    "NEWS_COUNTRY",
    "OPENAI_API_KEY",
    "OPENAI_MODEL",
    "TARGET_LANGUAGE",
];

fn clear_env() {
    for name in ALL_VARS {
        // SAFETY: this test binary has exactly one test touching the
        // environment, and no other thread reads these vars.
        unsafe { std::env::remove_var(name) }
    }
}

fn set(name: &str, value: &str) {
    // SAFETY: see clear_env
    unsafe { std::env::set_var(name, value) }
}

#[test]
fn test_from_env_matrix() {
    // Missing channel credential fails before anything else runs
    clear_env();
    let err = AppConfig::from_env().expect_err("empty env should fail");
    assert!(err.contains("SLACK_BOT_TOKEN"), "unexpected error: {err}");

    clear_env();
    set("SLACK_BOT_TOKEN", "xoxb-dummy");
    let err = AppConfig::from_env().expect_err("missing channel id should fail");
    assert!(err.contains("SLACK_CHANNEL_ID"), "unexpected error: {err}");

    // A set-but-blank value counts as missing
    clear_env();
    set("SLACK_BOT_TOKEN", "xoxb-dummy");
    set("SLACK_CHANNEL_ID", "   ");
    let err = AppConfig::from_env().expect_err("blank channel id should fail");
    assert!(err.contains("SLACK_CHANNEL_ID"), "unexpected error: {err}");

    // Minimal valid config: podcast source, stub translator, defaults
    clear_env();
    set("SLACK_BOT_TOKEN", "xoxb-dummy");
    set("SLACK_CHANNEL_ID", "C12345678");
    let config = AppConfig::from_env().expect("minimal config should load");
    assert_eq!(config.source, SourceKind::Podcast);
    assert_eq!(config.translator, TranslatorKind::Noop);
    assert_eq!(config.podcast_feed_url, DEFAULT_FEED_URL);
    assert_eq!(config.news_country, "jp");
    assert_eq!(config.openai_model, "gpt-4o-mini");
    assert_eq!(config.target_language, "Japanese");

    // Headline source needs its API key
    set("NEWS_SOURCE", "headline");
    let err = AppConfig::from_env().expect_err("headline without key should fail");
    assert!(err.contains("NEWS_API_KEY"), "unexpected error: {err}");

    set("NEWS_API_KEY", "news-key");
    let config = AppConfig::from_env().expect("headline config should load");
    assert_eq!(config.source, SourceKind::Headline);
    assert_eq!(config.news_api_key.as_deref(), Some("news-key"));

    // LLM translator needs its API key
    set("TRANSLATOR", "llm");
    let err = AppConfig::from_env().expect_err("llm without key should fail");
    assert!(err.contains("OPENAI_API_KEY"), "unexpected error: {err}");

    set("OPENAI_API_KEY", "sk-dummy");
    let config = AppConfig::from_env().expect("llm config should load");
    assert_eq!(config.translator, TranslatorKind::Llm);

    // Overrides are honored
    set("PODCAST_FEED_URL", "https://example.com/feed.xml");
    set("TARGET_LANGUAGE", "German");
    let config = AppConfig::from_env().expect("overridden config should load");
    assert_eq!(config.podcast_feed_url, "https://example.com/feed.xml");
    assert_eq!(config.target_language, "German");

    // Unknown strategy names are rejected
    set("NEWS_SOURCE", "pigeon");
    let err = AppConfig::from_env().expect_err("unknown source should fail");
    assert!(err.contains("unknown source"), "unexpected error: {err}");

    set("NEWS_SOURCE", "podcast");
    set("TRANSLATOR", "telepathy");
    let err = AppConfig::from_env().expect_err("unknown translator should fail");
    assert!(err.contains("unknown translator"), "unexpected error: {err}");

    clear_env();
}
