// ABOUTME: Environment configuration for the planner binary and library entry points
// ABOUTME: Resolves catalog path, LLM provider selection and planner tuning from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Environment-based application configuration

use super::LlmProviderType;
use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use mealwise_intelligence::PlannerConfig;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything needed to assemble a `RecommendationEngine`
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Food catalog CSV location
    pub catalog_path: PathBuf,
    /// Which LLM backend writes insights
    pub llm_provider: LlmProviderType,
    /// Model override for the chosen backend
    pub llm_model: Option<String>,
    /// Calculator, selector and insight tuning
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the planner overrides fail validation.
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let catalog_path = env::var(env_config::CATALOG_PATH)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map_or_else(|| PathBuf::from(defaults::CATALOG_PATH), PathBuf::from);

        let planner = PlannerConfig::load().map_err(AppError::from)?;

        let config = Self {
            catalog_path,
            llm_provider: LlmProviderType::from_env(),
            llm_model: LlmProviderType::model_from_env(),
            planner,
        };

        info!(
            catalog = %config.catalog_path.display(),
            llm_provider = %config.llm_provider,
            plan_days = config.planner.selection.plan_days,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Replace the catalog path (CLI `--catalog`)
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Replace the LLM provider (CLI `--llm`)
    #[must_use]
    pub const fn with_llm_provider(mut self, provider: LlmProviderType) -> Self {
        self.llm_provider = provider;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(defaults::CATALOG_PATH),
            llm_provider: LlmProviderType::default(),
            llm_model: None,
            planner: PlannerConfig::default(),
        }
    }
}
