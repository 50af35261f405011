//! The fetch → validate → translate → deliver pipeline.

use futures::future::try_join;
use tracing::info;

use crate::ai::{LlmTranslator, NoopTranslator, Translator};
use crate::core::config::{AppConfig, SourceKind, TranslatorKind};
use crate::core::models::Item;
use crate::errors::NotifyError;
use crate::slack::message::{build_episode_blocks, build_headline_text, episode_fallback_text};
use crate::slack::{ChannelMessage, Messenger, SlackClient, SlackMessenger};
use crate::sources::{HeadlineSource, NewsSource, PodcastSource};

/// One notification run against injected collaborators: a source, a
/// translator, and a messenger. Collaborators are trait objects so tests can
/// substitute fakes.
pub struct NotifyPipeline {
    source: Box<dyn NewsSource>,
    translator: Box<dyn Translator>,
    messenger: Box<dyn Messenger>,
    source_kind: SourceKind,
    channel_id: String,
}

impl NotifyPipeline {
    pub fn new(
        source: Box<dyn NewsSource>,
        translator: Box<dyn Translator>,
        messenger: Box<dyn Messenger>,
        source_kind: SourceKind,
        channel_id: String,
    ) -> Self {
        Self {
            source,
            translator,
            messenger,
            source_kind,
            channel_id,
        }
    }

    /// Wire the production collaborators selected by configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, NotifyError> {
        let source: Box<dyn NewsSource> = match config.source {
            SourceKind::Podcast => Box::new(PodcastSource::new(config.podcast_feed_url.clone())?),
            SourceKind::Headline => {
                let api_key = config
                    .news_api_key
                    .clone()
                    .ok_or_else(|| NotifyError::Config("NEWS_API_KEY is not set".to_string()))?;
                Box::new(HeadlineSource::new(api_key, config.news_country.clone())?)
            }
        };

        let translator: Box<dyn Translator> = match config.translator {
            TranslatorKind::Noop => Box::new(NoopTranslator),
            TranslatorKind::Llm => {
                let api_key = config
                    .openai_api_key
                    .clone()
                    .ok_or_else(|| NotifyError::Config("OPENAI_API_KEY is not set".to_string()))?;
                Box::new(LlmTranslator::new(
                    api_key,
                    config.openai_model.clone(),
                    config.target_language.clone(),
                )?)
            }
        };

        let messenger = Box::new(SlackMessenger::new(SlackClient::new(
            config.slack_bot_token.clone(),
        )?));

        Ok(Self::new(
            source,
            translator,
            messenger,
            config.source,
            config.slack_channel_id.clone(),
        ))
    }

    /// Run the pipeline once and return the delivered item. The first failing
    /// step aborts the run; nothing is posted unless every step succeeded.
    pub async fn run(&self) -> Result<Item, NotifyError> {
        let raw = self.source.latest().await?;
        let source_name = raw.source_name.clone();
        info!("Fetched latest item from upstream");

        let item = Item::from_raw(raw)?;

        // Title and body are independent; translate them side by side and
        // wait for both before posting.
        let (title, body) = try_join(
            self.translator.translate(&item.title),
            self.translator.translate(&item.body),
        )
        .await?;
        let item = Item { title, body, ..item };

        let message = match self.source_kind {
            SourceKind::Podcast => ChannelMessage {
                text: episode_fallback_text(&item),
                blocks: Some(build_episode_blocks(&item, source_name.as_deref())),
            },
            SourceKind::Headline => ChannelMessage {
                text: build_headline_text(&item),
                blocks: None,
            },
        };

        self.messenger.post(&self.channel_id, &message).await?;
        info!("Delivered notification to channel {}", self.channel_id);

        Ok(item)
    }
}
