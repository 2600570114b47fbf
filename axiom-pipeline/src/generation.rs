//! HTTP API generation provider (OpenAI-compatible `/v1/chat/completions`).

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use axiom_core::config::GenerationConfig;
use axiom_core::errors::{AxiomResult, GenerationError};
use axiom_core::traits::IGenerationProvider;

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    temperature: f64,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Remote chat-completion provider. No internal retries: the retrieval path
/// degrades on failure rather than keeping the caller waiting through a
/// backoff schedule.
pub struct OpenAiGenerator {
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f64,
    timeout: Duration,
}

impl OpenAiGenerator {
    pub fn new(config: &GenerationConfig) -> AxiomResult<Self> {
        if !config.enabled || config.api_key.is_empty() {
            return Err(GenerationError::NotConfigured.into());
        }
        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    /// One HTTP round trip. The trait surface is blocking, so the async
    /// transport runs on a current-thread runtime.
    fn send_request(&self, body: &ChatCompletionRequest) -> AxiomResult<String> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GenerationError::RequestFailed {
                reason: format!("runtime error: {e}"),
            })?;

        rt.block_on(async {
            let client = reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| GenerationError::RequestFailed {
                    reason: format!("client error: {e}"),
                })?;

            let response = client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(body)
                .send()
                .await
                .map_err(|e| GenerationError::RequestFailed {
                    reason: format!("HTTP error: {e}"),
                })?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                return Err(GenerationError::RequestFailed {
                    reason: format!("API returned {status}: {text}"),
                }
                .into());
            }

            let parsed: ChatCompletionResponse =
                response
                    .json()
                    .await
                    .map_err(|e| GenerationError::RequestFailed {
                        reason: format!("JSON parse error: {e}"),
                    })?;

            let answer = parsed
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .unwrap_or_default();

            if answer.trim().is_empty() {
                return Err(GenerationError::EmptyAnswer.into());
            }
            Ok(answer)
        })
    }
}

impl IGenerationProvider for OpenAiGenerator {
    fn generate(
        &self,
        system_prompt: &str,
        context: &str,
        question: &str,
    ) -> AxiomResult<String> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Context documents:\n{context}\n\nQuestion: {question}"),
                },
            ],
        };

        debug!(model = %self.model, "requesting chat completion");
        self.send_request(&body)
    }

    fn name(&self) -> &str {
        "openai"
    }
}
