//! # Gemini Model Backend
//!
//! This module provides an implementation of the [`ModelClient`] trait that calls
//! Google's Gemini API over HTTP. Prompts are sent to the `generateContent`
//! endpoint and the first candidate's text is returned as the raw model response.
//!
//! ## Environment
//!
//! - Requires the `GEMINI_API_KEY` environment variable (read through
//!   `util::config`) for authenticating with the Gemini API.
//! - The model is selected via `MODEL_NAME` (default `gemini-2.5-flash`).
//!
//! ## Testing
//!
//! - Includes a live-network test which is `#[ignore]`d by default.

use crate::error::EvaluatorError;
use crate::traits::model::ModelClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use util::config;

/// Gemini-backed model client: sends prompts to the Gemini API.
pub struct GeminiModel {
    client: reqwest::Client,
}

impl GeminiModel {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for GeminiModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Request body for the Gemini API.
#[derive(Serialize)]
struct GeminiRequest {
    /// The content to send to the model.
    contents: Vec<Content>,
    /// Optional generation configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content wrapper for the Gemini API request.
#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

/// A single part of the content, typically a text prompt.
#[derive(Serialize)]
struct Part {
    text: String,
}

/// Response from the Gemini API.
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

/// A single candidate response from the Gemini API.
#[derive(Deserialize)]
struct Candidate {
    content: ContentResponse,
}

/// Content of a candidate response.
#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

/// A single part of the response content.
#[derive(Deserialize)]
struct PartResponse {
    text: String,
}

/// Optional configuration for the generation process.
#[derive(Serialize)]
struct GenerationConfig {
    /// Thinking is disabled (budget 0) to keep requests fast.
    thinking_config: ThinkingConfig,
    /// Ask for a raw JSON body so the parser gets machine-readable output.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Serialize)]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[async_trait]
impl ModelClient for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String, EvaluatorError> {
        dotenvy::dotenv().ok();

        let api_key = config::gemini_api_key();
        if api_key.is_empty() {
            return Err(EvaluatorError::ModelRequest(
                "GEMINI_API_KEY is not set".to_string(),
            ));
        }

        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
                response_mime_type: Some("application/json".to_string()),
            }),
        };

        debug!(model = %config::model_name(), chars = prompt.len(), "sending prompt to Gemini");

        let response = self
            .client
            .post(format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
                config::model_name(),
                api_key
            ))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EvaluatorError::ModelRequest(e.to_string()))?;

        let response_text = response
            .text()
            .await
            .map_err(|e| EvaluatorError::ModelRequest(e.to_string()))?;
        let response = serde_json::from_str::<GeminiResponse>(&response_text).map_err(|e| {
            EvaluatorError::ModelRequest(format!(
                "error decoding response body: {}. Full response: {}",
                e, response_text
            ))
        })?;

        let text = response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| {
                EvaluatorError::ModelRequest("model returned no candidates".to_string())
            })?;

        debug!(chars = text.len(), "received model response");
        Ok(text)
    }
}
