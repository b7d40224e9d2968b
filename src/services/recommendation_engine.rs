// ABOUTME: Orchestrates one planning request: validate, analyze, select meals, summarize
// ABOUTME: Stateless across requests apart from the shared catalog and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Recommendation Engine
//!
//! `generate_plan` runs the health calculator, the meal selector and the
//! insight generator in sequence. Profile and catalog errors propagate as
//! `PlanError`; insight problems never do.
//!
//! ```rust,no_run
//! use mealwise::services::RecommendationEngine;
//! use mealwise::models::{ActivityLevel, DietaryPreference, Gender, Goal, UserProfile};
//!
//! #[tokio::main]
//! async fn main() -> mealwise::errors::AppResult<()> {
//!     let engine = RecommendationEngine::from_env()?;
//!     let profile = UserProfile::new(
//!         30, 175.0, 70.0,
//!         Gender::Male, ActivityLevel::ModeratelyActive,
//!         DietaryPreference::Veg, Goal::Maintenance,
//!     );
//!     let result = engine.generate_plan(&profile).await?;
//!     println!("{}", result.insight.text);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::catalog::FoodCatalog;
use crate::config::{AppConfig, ConfigError, PlannerConfig};
use crate::errors::{AppResult, PlanError};
use crate::intelligence::{analyze_profile, select_meal_plan, InsightGenerator};
use crate::llm::{ChatProvider, LlmProvider};
use crate::models::{HealthAnalysis, PlanResult, UserProfile};

/// Produces `PlanResult`s from user profiles
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Arc<FoodCatalog>,
    config: PlannerConfig,
    insights: InsightGenerator,
}

impl RecommendationEngine {
    /// Assemble an engine from already-built parts
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config` fails validation (for example a zero-day plan)
    pub fn new(
        catalog: Arc<FoodCatalog>,
        config: PlannerConfig,
        insights: InsightGenerator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            insights,
        })
    }

    /// Load the catalog and LLM provider described by `config`
    ///
    /// A provider that cannot be created (for example a missing API key) is
    /// logged and replaced by template insights.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let catalog = FoodCatalog::load_from_path(&config.catalog_path)?;

        let provider = match ChatProvider::create(config.llm_provider, config.llm_model.as_deref()) {
            Ok(provider) => provider.map(|p| Arc::new(p) as Arc<dyn LlmProvider>),
            Err(e) => {
                warn!(error = %e, provider = %config.llm_provider, "LLM provider unavailable, using template insights");
                None
            }
        };

        let insights = InsightGenerator::new(provider, config.planner.insight.clone());
        Ok(Self::new(Arc::new(catalog), config.planner, insights)?)
    }

    /// Build an engine entirely from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the catalog cannot be loaded
    pub fn from_env() -> AppResult<Self> {
        Self::from_config(AppConfig::from_env()?)
    }

    /// Shared food catalog
    #[must_use]
    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Planner configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Biometrics and daily targets without building a plan
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidProfile` for implausible biometrics
    pub fn analyze(&self, profile: &UserProfile) -> Result<HealthAnalysis, PlanError> {
        analyze_profile(profile, &self.config.nutrition)
    }

    /// Run the full pipeline for one profile
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidProfile` or `PlanError::InsufficientCatalog`
    #[instrument(skip_all, fields(request_id = %Uuid::new_v4(), diet = %profile.dietary_preference, goal = %profile.goal))]
    pub async fn generate_plan(&self, profile: &UserProfile) -> Result<PlanResult, PlanError> {
        let analysis = self.analyze(profile)?;

        let plan = select_meal_plan(
            &analysis.targets,
            profile.dietary_preference,
            self.catalog.items(),
            &self.config.selection,
        )?;

        let insight = self
            .insights
            .generate(profile, &analysis.targets, &plan)
            .await;

        info!(
            target_kcal = analysis.targets.calories,
            days = plan.days.len(),
            fallback_insight = insight.is_fallback(),
            "Plan generated"
        );

        Ok(PlanResult {
            profile: profile.clone(),
            analysis,
            plan,
            insight,
            generated_at: Utc::now(),
        })
    }
}
