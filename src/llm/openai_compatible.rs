// ABOUTME: Generic OpenAI-compatible LLM provider for cloud and local endpoints
// ABOUTME: Serves Groq, Ollama, vLLM and any /chat/completions compatible API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # `OpenAI`-Compatible Provider
//!
//! Generic implementation for any `OpenAI`-compatible LLM endpoint.
//!
//! ## Configuration
//!
//! Groq:
//! - `GROQ_API_KEY`: API key from <https://console.groq.com/keys>
//!
//! Local servers:
//! - `LOCAL_LLM_BASE_URL`: Base URL (default: <http://localhost:11434/v1> for Ollama)
//! - `LOCAL_LLM_MODEL`: Model to use (default: `qwen2.5:7b-instruct`)
//! - `LOCAL_LLM_API_KEY`: API key (optional, empty for local servers)

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::errors::{AppError, ErrorCode};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Environment variable for Groq API key
const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable for local LLM base URL
const LOCAL_LLM_BASE_URL_ENV: &str = "LOCAL_LLM_BASE_URL";

/// Environment variable for local LLM model
const LOCAL_LLM_MODEL_ENV: &str = "LOCAL_LLM_MODEL";

/// Environment variable for local LLM API key (optional)
const LOCAL_LLM_API_KEY_ENV: &str = "LOCAL_LLM_API_KEY";

/// Groq API root
const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default Groq model
const GROQ_DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default base URL (Ollama)
const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";

/// Default model for local inference
const DEFAULT_MODEL: &str = "qwen2.5:7b-instruct";

/// Connection timeout (lenient for local servers)
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Request timeout
const REQUEST_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <http://localhost:11434/v1>)
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
    /// Provider identifier for logging ("groq", "ollama", "local", ...)
    pub provider_name: &'static str,
    /// Provider display name
    pub display_name: &'static str,
}

impl OpenAiCompatibleConfig {
    /// Configuration for the Groq cloud API
    #[must_use]
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self {
            base_url: GROQ_BASE_URL.to_owned(),
            api_key: Some(api_key.into()),
            default_model: GROQ_DEFAULT_MODEL.to_owned(),
            provider_name: "groq",
            display_name: "Groq",
        }
    }

    /// Configuration for a local Ollama instance
    #[must_use]
    pub fn ollama(model: &str) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            default_model: model.to_owned(),
            provider_name: "ollama",
            display_name: "Ollama (Local)",
        }
    }

    /// Replace the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            default_model: DEFAULT_MODEL.to_owned(),
            provider_name: "local",
            display_name: "Local LLM",
        }
    }
}

impl Debug for OpenAiCompatibleConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OpenAiCompatibleConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("default_model", &self.default_model)
            .field("provider_name", &self.provider_name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Generic `OpenAI`-compatible LLM provider
///
/// Works with any endpoint that implements the `OpenAI` chat completions API.
#[derive(Debug)]
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a Groq provider from `GROQ_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    pub fn groq_from_env() -> Result<Self, AppError> {
        let api_key = env::var(GROQ_API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::ConfigMissing,
                    format!("{GROQ_API_KEY_ENV} environment variable not set"),
                )
            })?;

        Self::new(OpenAiCompatibleConfig::groq(api_key))
    }

    /// Create a local provider from environment variables
    ///
    /// Reads:
    /// - `LOCAL_LLM_BASE_URL`: Base URL (default: Ollama at localhost:11434)
    /// - `LOCAL_LLM_MODEL`: Model name
    /// - `LOCAL_LLM_API_KEY`: API key (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn local_from_env() -> Result<Self, AppError> {
        let base_url =
            env::var(LOCAL_LLM_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let default_model =
            env::var(LOCAL_LLM_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        let api_key = env::var(LOCAL_LLM_API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty());

        // Detect provider type from URL for better display names
        let (provider_name, display_name) = if base_url.contains(":11434") {
            ("ollama", "Ollama (Local)")
        } else if base_url.contains(":8000") {
            ("vllm", "vLLM (Local)")
        } else {
            ("local", "Local LLM")
        };

        let config = OpenAiCompatibleConfig {
            base_url,
            api_key,
            default_model,
            provider_name,
            display_name,
        };

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initializing {} provider",
            config.display_name
        );

        Self::new(config)
    }

    /// Replace the default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.config.default_model = model.into();
        self
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }

    fn connect_error(&self, e: &reqwest::Error) -> AppError {
        if e.is_connect() || e.is_timeout() {
            AppError::external_unavailable(
                self.config.display_name,
                format!(
                    "Cannot reach {} at {}: {e}",
                    self.config.display_name, self.config.base_url
                ),
            )
        } else {
            AppError::external_service(self.config.display_name, format!("Request failed: {e}"))
        }
    }

    /// Parse error response from API
    fn parse_error_response(&self, status: StatusCode, body: &str) -> AppError {
        let service = self.config.display_name;
        let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) else {
            // Local servers often answer with plain text
            return match status.as_u16() {
                502..=504 => AppError::external_unavailable(
                    service,
                    "LLM server is not responding".to_owned(),
                ),
                _ => AppError::external_service(
                    service,
                    format!(
                        "API error ({status}): {}",
                        body.chars().take(200).collect::<String>()
                    ),
                ),
            };
        };

        let detail = error_response.error;
        match status.as_u16() {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("API authentication failed: {}", detail.message),
            ),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                Self::extract_rate_limit_message(&detail.message),
            ),
            404 => AppError::not_found(format!("Model or endpoint ({})", detail.message)),
            503 => AppError::external_unavailable(service, detail.message),
            _ => AppError::external_service(
                service,
                format!(
                    "{} - {}",
                    detail.error_type.as_deref().unwrap_or("unknown"),
                    detail.message
                ),
            ),
        }
    }

    /// Extract a user-friendly rate limit message
    fn extract_rate_limit_message(message: &str) -> String {
        const RETRY_PREFIX: &str = "try again in ";
        if let Some(retry_pos) = message.to_lowercase().find(RETRY_PREFIX) {
            let after_prefix = &message[retry_pos + RETRY_PREFIX.len()..];
            if let Some(end_pos) = after_prefix.find(|c: char| !c.is_ascii_digit() && c != '.') {
                if let Ok(seconds) = after_prefix[..end_pos].parse::<f64>() {
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "LLM rate limit reached. Please try again in {seconds_int} seconds."
                    );
                }
            }
        }
        "LLM rate limit reached. Please wait a moment and try again.".to_owned()
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        self.config.provider_name
    }

    fn display_name(&self) -> &'static str {
        self.config.display_name
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(provider = self.config.provider_name, model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model: model.to_owned(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        debug!(messages = openai_request.messages.len(), "Sending chat completion request");

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send chat completion request");
                self.connect_error(&e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(self.config.display_name, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!(status = %status, "Chat completion API error");
            return Err(self.parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(self.config.display_name, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response.choices.into_iter().next().ok_or_else(|| {
            AppError::external_service(self.config.display_name, "API returned no choices")
        })?;

        let content = choice.message.content.unwrap_or_default();

        debug!(
            chars = content.len(),
            finish_reason = ?choice.finish_reason,
            "Received chat completion"
        );

        Ok(ChatResponse {
            content,
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
