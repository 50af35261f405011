//! Translation strategies.
//!
//! The pipeline translates title and body through whichever [`Translator`]
//! configuration selected. The stub variant never fails; the LLM variant
//! fails the whole request on any error, with no fallback to the original
//! text.

pub mod client;

pub use client::LlmTranslator;

use async_trait::async_trait;

use crate::errors::NotifyError;

/// Marker the stub translator puts in front of the original text.
pub const NOOP_MARKER: &str = "[日本語訳]";

/// Turns source-language text into the target language.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, NotifyError>;
}

/// Stub translator: marks the text and echoes it back without calling any
/// external service.
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str) -> Result<String, NotifyError> {
        Ok(format!("{NOOP_MARKER}\n{text}"))
    }
}
