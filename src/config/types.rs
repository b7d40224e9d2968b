// ABOUTME: Configuration type definitions shared by the environment loader and LLM selector
// ABOUTME: Contains the LlmProviderType enum and its environment helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// LLM provider selection for plan insights
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// Google Gemini (default)
    #[default]
    Gemini,
    /// Groq cloud inference for Llama models
    Groq,
    /// Local `OpenAI`-compatible endpoint (Ollama, vLLM)
    Local,
    /// No provider; insights use the built-in summary
    None,
}

impl LlmProviderType {
    /// Environment variable name for LLM provider selection
    pub const ENV_VAR: &'static str = env_config::LLM_PROVIDER;

    /// Environment variable for model selection
    pub const MODEL_ENV_VAR: &'static str = env_config::LLM_MODEL;

    /// Parse from string with fallback to default
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "groq" => Self::Groq,
            "local" | "ollama" | "vllm" | "localai" => Self::Local,
            "none" | "off" | "disabled" => Self::None,
            _ => Self::Gemini,
        }
    }

    /// Load from environment variable
    #[must_use]
    pub fn from_env() -> Self {
        env::var(Self::ENV_VAR)
            .map(|s| Self::from_str_or_default(&s))
            .unwrap_or_default()
    }

    /// Model override from `MEALWISE_LLM_MODEL`, if set and non-empty
    #[must_use]
    pub fn model_from_env() -> Option<String> {
        env::var(Self::MODEL_ENV_VAR)
            .ok()
            .filter(|model| !model.trim().is_empty())
    }
}

impl Display for LlmProviderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::Groq => write!(f, "groq"),
            Self::Local => write!(f, "local"),
            Self::None => write!(f, "none"),
        }
    }
}
