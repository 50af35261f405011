//! LLM (OpenAI) translation client.
//!
//! Encapsulates the OpenAI API interaction for translating item text.

use std::time::Duration;

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use super::Translator;
use crate::errors::NotifyError;

const RESPONSES_URL: &str = "https://api.openai.com/v1/responses";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_OUTPUT_TOKENS: usize = 4_000;

/// OpenAI-backed translator.
pub struct LlmTranslator {
    client: Client,
    api_key: String,
    model_name: String,
    target_language: String,
}

impl LlmTranslator {
    pub fn new(
        api_key: String,
        model_name: String,
        target_language: String,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Translation(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model_name,
            target_language,
        })
    }

    pub fn build_prompt(&self, text: &str) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(format!(
                    "Translate the user's text to {} naturally. \
                     Reply with the translation only.",
                    self.target_language
                )),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(text.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }
}

#[async_trait]
impl Translator for LlmTranslator {
    async fn translate(&self, text: &str) -> Result<String, NotifyError> {
        info!(
            "Translating {} characters to {}",
            text.chars().count(),
            self.target_language
        );

        let input_messages = build_responses_input_from_prompt(&self.build_prompt(text));

        let request_body = json!({
            "model": self.model_name,
            "input": input_messages,
            "max_output_tokens": MAX_OUTPUT_TOKENS
        });

        let response = self
            .client
            .post(RESPONSES_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| NotifyError::Translation(format!("OpenAI API request failed: {e}")))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NotifyError::Translation(format!(
                "OpenAI API error: {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            NotifyError::Translation(format!("Failed to parse OpenAI response: {e}"))
        })?;

        extract_output_text(&response_json)
            .ok_or_else(|| NotifyError::Translation("No text in response".to_string()))
    }
}

/// Build input messages in the Responses API format from a chat-completion
/// prompt. Assistant turns are dropped; tool-ish roles collapse to user.
fn build_responses_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter(|m| !matches!(m.role, MessageRole::assistant))
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            let mut parts: Vec<Value> = Vec::new();
            match &m.content {
                Content::Text(t) => {
                    parts.push(json!({
                        "type": "input_text",
                        "text": t
                    }));
                }
                // Prompts built here are text-only
                Content::ImageUrl(_) => {}
            }

            json!({
                "role": role_str,
                "content": parts
            })
        })
        .collect()
}

/// Pull the generated text out of a Responses API payload: `output_text`
/// when present, otherwise the `output[].content[]` items of type
/// `output_text`.
fn extract_output_text(response_json: &Value) -> Option<String> {
    response_json
        .get("output_text")
        .and_then(|v| v.as_str())
        .map(std::string::ToString::to_string)
        .or_else(|| {
            let mut collected: Vec<String> = Vec::new();
            if let Some(items) = response_json.get("output").and_then(|o| o.as_array()) {
                for item in items {
                    if let Some(parts) = item.get("content").and_then(|c| c.as_array()) {
                        for p in parts {
                            let is_output_text = p
                                .get("type")
                                .and_then(|t| t.as_str())
                                .is_some_and(|t| t == "output_text");
                            if !is_output_text {
                                continue;
                            }
                            if let Some(s) = p.get("text").and_then(|t| t.as_str()) {
                                collected.push(s.to_string());
                            } else if let Some(s) = p
                                .get("text")
                                .and_then(|t| t.get("value"))
                                .and_then(|v| v.as_str())
                            {
                                collected.push(s.to_string());
                            }
                        }
                    }
                }
            }
            if collected.is_empty() {
                None
            } else {
                Some(collected.join("\n"))
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> LlmTranslator {
        LlmTranslator::new(
            "test_key".to_string(),
            "gpt-4o-mini".to_string(),
            "Japanese".to_string(),
        )
        .expect("client should build")
    }

    #[test]
    fn test_build_prompt_names_the_target_language() {
        let prompt = translator().build_prompt("hello");

        assert_eq!(prompt.len(), 2);
        assert!(matches!(prompt[0].role, MessageRole::system));
        match &prompt[0].content {
            Content::Text(instruction) => {
                assert!(
                    instruction.contains("Japanese"),
                    "instruction should name the language: {instruction}"
                );
            }
            other => panic!("system content should be text, got {other:?}"),
        }
        assert!(matches!(prompt[1].role, MessageRole::user));
    }

    #[test]
    fn test_build_responses_input_uses_typed_parts() {
        let input = build_responses_input_from_prompt(&translator().build_prompt("hello"));

        assert_eq!(input.len(), 2);
        assert_eq!(input[0]["role"], "system");
        assert_eq!(input[1]["role"], "user");

        let parts = input[1]["content"].as_array().unwrap();
        assert!(parts.iter().any(|p| p["type"] == "input_text"));
        assert_eq!(parts[0]["text"], "hello");
    }

    #[test]
    fn test_extract_output_text_prefers_top_level_field() {
        let payload = json!({ "output_text": "こんにちは" });

        assert_eq!(
            extract_output_text(&payload).as_deref(),
            Some("こんにちは")
        );
    }

    #[test]
    fn test_extract_output_text_walks_output_items() {
        let payload = json!({
            "output": [
                {
                    "content": [
                        { "type": "reasoning", "text": "ignored" },
                        { "type": "output_text", "text": "こんにちは" }
                    ]
                }
            ]
        });

        assert_eq!(
            extract_output_text(&payload).as_deref(),
            Some("こんにちは")
        );
    }

    #[test]
    fn test_extract_output_text_empty_payload_is_none() {
        assert_eq!(extract_output_text(&json!({})), None);
    }
}
