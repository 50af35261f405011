/// newscast - posts the latest podcast episode or news headline to Slack.
///
/// This crate implements a single-Lambda notification endpoint:
/// 1. Configuration is read and validated from the environment.
/// 2. One upstream source (a podcast RSS feed or a headline API) is asked
///    for its most recent item.
/// 3. The item is validated, optionally translated to the target language,
///    and posted once to a Slack channel.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - slack-morphism for Slack API interactions
/// - the OpenAI API for translation (opt-in via configuration)
/// - Tokio for async runtime
///
/// The handler variants of earlier revisions (stub vs. LLM translation,
/// podcast vs. headline source) are collapsed into one pipeline driven by a
/// source strategy and a translator strategy, both chosen by configuration.
///
/// # Example
///
/// ```no_run
/// use newscast::core::config::{AppConfig, SourceKind, TranslatorKind};
/// use newscast::pipeline::NotifyPipeline;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     newscast::setup_logging();
///
///     // Create a dummy AppConfig for the example
///     let config = AppConfig {
///         source: SourceKind::Podcast,
///         translator: TranslatorKind::Noop,
///         slack_bot_token: "xoxb-dummy".to_string(),
///         slack_channel_id: "C12345678".to_string(),
///         podcast_feed_url: "https://lexfridman.com/feed/podcast/".to_string(),
///         news_api_key: None,
///         news_country: "jp".to_string(),
///         openai_api_key: None,
///         openai_model: "gpt-4o-mini".to_string(),
///         target_language: "Japanese".to_string(),
///     };
///
///     // Fetch, validate, and deliver the latest item
///     let pipeline = NotifyPipeline::from_config(&config)?;
///     let item = pipeline.run().await?;
///     println!("Posted: {}", item.title);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod slack;
pub mod sources;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process start.
///
/// # Example
///
/// ```
/// // Initialize structured logging before the Lambda runtime starts
/// newscast::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
