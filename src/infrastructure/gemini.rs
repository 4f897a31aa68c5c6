//! Gemini text-generation adapter
//!
//! Blocking HTTP client for the Generative Language API, implementing the
//! domain's `TextGenerator` port. No retries: the assistant recovers any
//! failure into a chat reply, so one attempt is the whole contract.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::TextGenerator;
use crate::error::{WardenError, WardenResult};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Generative Language API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client with the key from `GEMINI_API_KEY`
    pub fn new(model: impl Into<String>) -> WardenResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| WardenError::MissingApiKey { env_var: API_KEY_ENV })?;
        Self::with_api_key(model, api_key)
    }

    /// Create a client with an explicit key
    pub fn with_api_key(model: impl Into<String>, api_key: impl Into<String>) -> WardenResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| WardenError::TextGeneration(err.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn request_url(&self) -> String {
        format!("{API_BASE_URL}/{}:generateContent", self.model)
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> WardenResult<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|err| WardenError::TextGeneration(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(WardenError::TextGeneration(format!(
                "HTTP {status}: {message}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|err| WardenError::TextGeneration(err.to_string()))?;

        let text = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text)
    }
}
