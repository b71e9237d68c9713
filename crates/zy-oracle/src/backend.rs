//! Transport backends for the oracle.
//!
//! `GeminiBackend` talks to the Gemini REST API directly. Transport errors,
//! non-2xx statuses, and empty bodies are all normalized into the
//! [`OracleError`] taxonomy here, before the retry loop observes them.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{OracleError, OracleResult};
use crate::prompt::build_prompt;
use crate::request::InterpretationRequest;
use crate::result::DivinationResult;
use crate::schema::response_schema;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A transport capable of producing one interpretation attempt.
#[async_trait]
pub trait InterpretationBackend: Send + Sync {
    /// Perform a single attempt, without retrying.
    async fn request_interpretation(
        &self,
        request: &InterpretationRequest,
    ) -> OracleResult<DivinationResult>;
}

/// Direct REST backend for the Gemini generateContent API.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    api_key: String,
}

impl GeminiBackend {
    /// Create a backend with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> OracleResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(OracleError::Configuration("API key is empty".into()));
        }
        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    /// Read the API key from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> OracleResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| OracleError::Configuration("GEMINI_API_KEY is not set".into()))?;
        Self::new(api_key)
    }

    async fn send_request(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> OracleResult<String> {
        let url = format!(
            "{BASE_URL}/{model}:generateContent?key={api_key}",
            api_key = self.api_key
        );

        let response = self.client.post(url).json(body).send().await.map_err(|err| {
            if err.is_connect() || err.is_timeout() {
                OracleError::Network(err.to_string())
            } else {
                OracleError::Unknown(format!("request failed: {err}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, body_text));
        }

        let body_text = response
            .text()
            .await
            .map_err(|err| OracleError::Network(err.to_string()))?;
        if body_text.trim().is_empty() {
            return Err(OracleError::EmptyResponse);
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body_text)
            .map_err(|err| OracleError::Schema(format!("response envelope: {err}")))?;

        extract_text(parsed)
    }
}

#[async_trait]
impl InterpretationBackend for GeminiBackend {
    async fn request_interpretation(
        &self,
        request: &InterpretationRequest,
    ) -> OracleResult<DivinationResult> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: build_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(request.has_changing_lines()),
            },
        };

        tracing::debug!(model = request.model.model_id(), "querying oracle");
        let text = self.send_request(request.model.model_id(), &body).await?;

        serde_json::from_str(&text).map_err(|err| OracleError::Schema(err.to_string()))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> OracleResult<String> {
    let text = response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(OracleError::EmptyResponse)
    } else {
        Ok(text)
    }
}

fn map_http_error(status: StatusCode, body: String) -> OracleError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or(body);

    match status {
        StatusCode::TOO_MANY_REQUESTS => OracleError::RateLimited(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => OracleError::Configuration(message),
        _ => OracleError::Unknown(format!("{status}: {message}")),
    }
}
