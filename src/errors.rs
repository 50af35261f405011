use slack_morphism::errors::SlackClientError;
use thiserror::Error;

/// Failure classes of the notification pipeline, one per step.
///
/// Every variant is logged with full detail server-side; the HTTP caller only
/// ever sees an opaque failure acknowledgment.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to fetch the latest item: {0}")]
    Retrieval(String),

    #[error("upstream item failed validation: {0}")]
    Validation(String),

    #[error("failed to translate item text: {0}")]
    Translation(String),

    #[error("failed to deliver message to Slack: {0}")]
    Delivery(String),
}

impl From<SlackClientError> for NotifyError {
    fn from(error: SlackClientError) -> Self {
        NotifyError::Delivery(error.to_string())
    }
}

impl From<rss::Error> for NotifyError {
    fn from(error: rss::Error) -> Self {
        NotifyError::Retrieval(error.to_string())
    }
}
