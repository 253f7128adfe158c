use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error as ThisError;

const GEMINI_GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-flash-latest:generateContent";

/// Build the shared HTTP client used for Gemini calls. The timeouts here are
/// the only bound on how long an `/ask` request may block on the upstream.
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("assistant-backend/0.1")
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(15))
        .build()
        .expect("FATAL: initialize Gemini HTTP client failed")
}

#[derive(Debug, ThisError)]
pub enum GeminiApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("response contained no candidate text")]
    EmptyResponse,
}

/// Thin caller around the Gemini `generateContent` REST endpoint.
pub struct GeminiApi {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiApi {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self::with_endpoint(client, api_key, GEMINI_GENERATE_URL.to_string())
    }

    /// Same caller pointed at a non-default endpoint. Tests use this to stand
    /// in a local upstream.
    pub fn with_endpoint(client: reqwest::Client, api_key: String, endpoint: String) -> Self {
        Self {
            client,
            api_key,
            endpoint,
        }
    }

    /// Ask the model with the fixed university-chatbot prompt template and
    /// return the first candidate's text.
    pub async fn generate(&self, question: &str) -> Result<String, GeminiApiError> {
        let prompt = format!("You are a helpful university chatbot.\nQuestion: {question}");
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeminiApiError::Status(status));
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or(GeminiApiError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
