//! AI bullet-point suggestions.
//!
//! The analyzer only depends on the [`Suggester`] trait. [`OpenAiSuggester`]
//! talks to an OpenAI-compatible chat-completions endpoint; tests substitute
//! their own implementation.

use crate::config::SuggestionConfig;
use crate::error::{Result, ResumeScorerError};
use crate::llm::prompts::PromptTemplates;
use crate::llm::splitter::RecursiveSplitter;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub trait Suggester {
    /// Summarize `text` into improvement suggestions, authorizing with `credential`.
    ///
    /// Fails with `Authentication` when the credential is rejected and with
    /// `Service` for anything else the backend or transport reports.
    fn summarize(
        &self,
        text: &str,
        credential: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct OpenAiSuggester {
    client: Client,
    config: SuggestionConfig,
    splitter: RecursiveSplitter,
    templates: PromptTemplates,
}

impl OpenAiSuggester {
    pub fn new(config: SuggestionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let splitter = RecursiveSplitter::new(config.chunk_size, config.chunk_overlap)?;

        Ok(Self {
            client,
            config,
            splitter,
            templates: PromptTemplates::default(),
        })
    }

    pub fn build_prompt(&self, text: &str) -> String {
        let chunks = self.splitter.split(text);
        debug!("Resume split into {} chunk(s) for summarization", chunks.len());
        self.templates.render_summary(&chunks)
    }
}

impl Suggester for OpenAiSuggester {
    async fn summarize(&self, text: &str, credential: &str) -> Result<String> {
        if credential.trim().is_empty() {
            return Err(ResumeScorerError::Authentication("No API key supplied".to_string()));
        }

        let prompt = self.build_prompt(text);
        let request_body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        info!("Requesting suggestions from {} ({})", self.config.endpoint, self.config.model);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(credential)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(classify_failure(status.as_u16(), message));
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .text()
            .map(str::to_string)
            .ok_or_else(|| ResumeScorerError::Service("Backend returned an empty completion".to_string()))
    }
}

fn classify_failure(status: u16, message: String) -> ResumeScorerError {
    match status {
        401 | 403 => ResumeScorerError::Authentication(message),
        _ => ResumeScorerError::Service(format!("status {}: {}", status, message)),
    }
}
