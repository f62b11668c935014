//! Mood analysis against an external AI completion service.
//!
//! A failed analysis must never block quote viewing: upstream failures
//! degrade to a deterministic fallback pair and are flagged on the
//! response instead of surfacing as errors.

pub mod parser;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::MoodConfig;
use crate::error::{AppError, AppResult};
use crate::models::{Mood, MoodResult};

/// Longest quote text accepted for analysis
const MAX_QUOTE_LENGTH: usize = 1000;

/// Analysis outcome plus whether it came from the fallback rotation
/// rather than the AI service
#[derive(Debug, Clone)]
pub struct MoodAnalysis {
    pub result: MoodResult,
    pub fallback: bool,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat completions endpoint
pub struct MoodService {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    primary_model: String,
    fallback_model: String,
}

impl MoodService {
    pub fn new(config: &MoodConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            primary_model: config.primary_model.clone(),
            fallback_model: config.fallback_model.clone(),
        }
    }

    /// Analyzes quote text. Validation and configuration problems are
    /// hard errors; upstream failures come back as a fallback-flagged
    /// result.
    pub async fn analyze(&self, text: &str) -> AppResult<MoodAnalysis> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Quote text is required".to_string()));
        }
        if text.chars().count() > MAX_QUOTE_LENGTH {
            return Err(AppError::Validation(format!(
                "Quote text cannot exceed {} characters",
                MAX_QUOTE_LENGTH
            )));
        }

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::NotConfigured("MOOD_API_KEY environment variable is not set".to_string())
        })?;

        let prompt = build_prompt(text);

        // One retry, on the cheaper model
        for model in [&self.primary_model, &self.fallback_model] {
            match self.complete(api_key, model, &prompt).await {
                Ok(content) => {
                    return Ok(MoodAnalysis {
                        result: parser::parse_mood_response(&content),
                        fallback: false,
                    });
                }
                Err(e) => {
                    log::warn!("Mood completion with model {} failed: {}", model, e);
                }
            }
        }

        log::warn!("All mood completion attempts failed, serving fallback pair");
        Ok(MoodAnalysis {
            result: parser::fallback_for_timestamp(Utc::now().timestamp()),
            fallback: true,
        })
    }

    async fn complete(&self, api_key: &str, model: &str, prompt: &str) -> Result<String, String> {
        let url = format!("{}/chat/completions", self.api_url);
        let request = CompletionRequest {
            model,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            max_tokens: 20,
            temperature: 0.3,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }

        let completion: CompletionResponse =
            response.json().await.map_err(|e| e.to_string())?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| "no choices in completion".to_string())
    }
}

fn build_prompt(text: &str) -> String {
    let vocabulary = Mood::ALL
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Analyze the mood of this quote and respond with ONLY the mood and a \
         matching hex color in the exact format mood:#RRGGBB. The mood must be \
         one of: {}.\n\nQuote: \"{}\"",
        vocabulary, text
    )
}
