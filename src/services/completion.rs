//! Chat-completion provider abstraction and the OpenAI-compatible client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::TokenUsage;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response contained no choices")]
    NoChoices,
}

impl CompletionError {
    /// Transport failure message with every underlying cause appended.
    fn network(err: reqwest::Error) -> Self {
        CompletionError::Network(format!("{:#}", anyhow::Error::from(err)))
    }
}

/// Sampling parameters fixed per endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionParams {
    pub const RECOMMENDATION: Self = Self { max_tokens: 200, temperature: 0.7 };
    pub const SUPPORT: Self = Self { max_tokens: 150, temperature: 0.5 };
    pub const SEARCH: Self = Self { max_tokens: 100, temperature: 0.3 };
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub content: Option<String>,
    pub usage: TokenUsage,
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a single user prompt and return the first choice.
    async fn complete(
        &self,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<Completion, CompletionError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: TokenUsage,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CompletionError::network)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<Completion, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        tracing::debug!(model = %self.model, max_tokens = params.max_tokens, "sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status: status.as_u16(), body });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(format!("{:#}", anyhow::Error::from(e))))?;

        let choice = body.choices.into_iter().next().ok_or(CompletionError::NoChoices)?;

        Ok(Completion {
            content: choice.message.content,
            usage: body.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_has_provider_shape() {
        let req = ChatRequest {
            model: DEFAULT_MODEL,
            messages: vec![ChatMessage { role: "user", content: "hi" }],
            max_tokens: CompletionParams::SEARCH.max_tokens,
            temperature: CompletionParams::SEARCH.temperature,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hi");
        assert_eq!(value["max_tokens"], 100);
        assert!(value.get("temperature").is_some());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client =
            OpenAiClient::new("k", "http://localhost:1/v1/", DEFAULT_MODEL, Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:1/v1/chat/completions");
    }

    #[test]
    fn error_text_keeps_reason() {
        let err = CompletionError::Api { status: 401, body: "invalid api key".into() };
        assert_eq!(err.to_string(), "provider returned 401: invalid api key");
    }
}
