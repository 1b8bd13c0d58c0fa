use anyhow::{anyhow, Context, Result};
use coach_agents::CompletionService;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const SYSTEM_PROMPT: &str =
    "You are a coach that provides advice about carnivore and ketogenic diets. \
     Keep answers short, practical, and food-focused.";

/// Chat-completion backend against an OpenAI-compatible endpoint.
/// Sampling parameters mirror the legacy deployment of this advisor.
#[derive(Debug, Clone)]
pub struct OpenAiCompletion {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiCompletion {
    /// Reads `COACH_OPENAI_API_KEY` (required) and `COACH_OPENAI_MODEL`.
    /// Returns `None` when no key is configured, which keeps the whole
    /// service offline-capable.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("COACH_OPENAI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }

        let model =
            std::env::var("COACH_OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string());
        let base_url = std::env::var("COACH_OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());

        Some(Self {
            http: Client::new(),
            api_key,
            model,
            base_url,
        })
    }
}

impl CompletionService for OpenAiCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": prompt }
                ],
                "max_tokens": 500,
                "temperature": 0.3,
                "top_p": 0.5
            }))
            .send()
            .await
            .context("completion request failed")?
            .error_for_status()
            .context("completion request rejected")?;

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .context("completion response was not valid JSON")?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("completion response had no content"))
    }
}
