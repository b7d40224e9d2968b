// ABOUTME: Unified LLM provider selector for runtime provider switching
// ABOUTME: Abstracts over Gemini, Groq and local providers based on environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # LLM Provider Selector
//!
//! Set `MEALWISE_LLM_PROVIDER`:
//! - `gemini` (default): Google Gemini (requires `GEMINI_API_KEY`)
//! - `groq`: Groq cloud (requires `GROQ_API_KEY`)
//! - `local`/`ollama`/`vllm`: any `OpenAI`-compatible server
//! - `none`: no provider, insights always use the built-in summary
//!
//! `MEALWISE_LLM_MODEL` overrides the provider's default model.

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info};

use super::{
    ChatRequest, ChatResponse, GeminiProvider, LlmProvider, OpenAiCompatibleProvider,
};
use crate::config::LlmProviderType;
use crate::errors::AppError;

/// Unified chat provider that wraps Gemini, Groq, or a local LLM
pub enum ChatProvider {
    /// Google Gemini provider
    Gemini(GeminiProvider),
    /// Groq cloud provider via its `OpenAI`-compatible API
    Groq(OpenAiCompatibleProvider),
    /// Local LLM provider via `OpenAI`-compatible API (Ollama, vLLM)
    Local(OpenAiCompatibleProvider),
}

impl ChatProvider {
    /// Create a provider from environment configuration
    ///
    /// Returns `Ok(None)` when the provider type is `none`.
    ///
    /// # Errors
    ///
    /// Returns an error if the required API key environment variable is missing
    /// or the HTTP client cannot be built.
    pub fn from_env() -> Result<Option<Self>, AppError> {
        Self::create(
            LlmProviderType::from_env(),
            LlmProviderType::model_from_env().as_deref(),
        )
    }

    /// Create a provider for a specific type with an optional model override
    ///
    /// # Errors
    ///
    /// Returns an error if the provider's credentials are missing.
    pub fn create(
        provider_type: LlmProviderType,
        model: Option<&str>,
    ) -> Result<Option<Self>, AppError> {
        info!(
            "Initializing LLM provider: {} (set {} to change)",
            provider_type,
            LlmProviderType::ENV_VAR
        );

        let provider = match provider_type {
            LlmProviderType::None => return Ok(None),
            LlmProviderType::Gemini => {
                let provider = GeminiProvider::from_env()?;
                Self::Gemini(match model {
                    Some(model) => provider.with_default_model(model),
                    None => provider,
                })
            }
            LlmProviderType::Groq => {
                let provider = OpenAiCompatibleProvider::groq_from_env()?;
                Self::Groq(match model {
                    Some(model) => provider.with_default_model(model),
                    None => provider,
                })
            }
            LlmProviderType::Local => {
                let provider = OpenAiCompatibleProvider::local_from_env()?;
                Self::Local(match model {
                    Some(model) => provider.with_default_model(model),
                    None => provider,
                })
            }
        };

        debug!(
            "Provider {} initialized with model: {}",
            provider.display_name(),
            provider.default_model()
        );
        Ok(Some(provider))
    }

    fn inner(&self) -> &dyn LlmProvider {
        match self {
            Self::Gemini(provider) => provider,
            Self::Groq(provider) | Self::Local(provider) => provider,
        }
    }
}

#[async_trait]
impl LlmProvider for ChatProvider {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn display_name(&self) -> &'static str {
        self.inner().display_name()
    }

    fn default_model(&self) -> &str {
        self.inner().default_model()
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.inner().complete(request).await
    }
}

impl fmt::Debug for ChatProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini(_) => f.debug_tuple("ChatProvider::Gemini").finish(),
            Self::Groq(_) => f.debug_tuple("ChatProvider::Groq").finish(),
            Self::Local(_) => f.debug_tuple("ChatProvider::Local").finish(),
        }
    }
}
