// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, sample catalog loading, profile builders and stub LLM providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used
)]
//! Shared test utilities for `mealwise`

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use mealwise::catalog::FoodCatalog;
use mealwise::config::{InsightConfig, PlannerConfig};
use mealwise::errors::AppError;
use mealwise::intelligence::InsightGenerator;
use mealwise::llm::{ChatRequest, ChatResponse, LlmProvider};
use mealwise::models::{ActivityLevel, DietaryPreference, Gender, Goal, UserProfile};
use mealwise::services::RecommendationEngine;

static INIT_LOGGER: Once = Once::new();

/// Path of the catalog shipped with the crate
pub const SAMPLE_CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/food_catalog.csv");

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// The catalog shipped in `data/`
pub fn sample_catalog() -> FoodCatalog {
    init_test_logging();
    FoodCatalog::load_from_path(SAMPLE_CATALOG_PATH).unwrap()
}

/// 30 year old, 175 cm, 70 kg, moderately active male
pub fn reference_profile(goal: Goal, preference: DietaryPreference) -> UserProfile {
    UserProfile::new(
        30,
        175.0,
        70.0,
        Gender::Male,
        ActivityLevel::ModeratelyActive,
        preference,
        goal,
    )
}

/// 45 year old, 160 cm, 82 kg, sedentary woman aiming to lose weight
pub fn obese_sedentary_profile(preference: DietaryPreference) -> UserProfile {
    UserProfile::new(
        45,
        160.0,
        82.0,
        Gender::Female,
        ActivityLevel::Sedentary,
        preference,
        Goal::WeightLoss,
    )
}

/// Engine over the sample catalog with default settings
pub fn engine_with_provider(provider: Option<Arc<dyn LlmProvider>>) -> RecommendationEngine {
    let config = PlannerConfig::default();
    let insights = InsightGenerator::new(provider, config.insight.clone());
    RecommendationEngine::new(Arc::new(sample_catalog()), config, insights).unwrap()
}

/// Insight config with a short timeout
pub fn quick_insight_config(timeout_secs: u64) -> InsightConfig {
    InsightConfig {
        timeout_secs,
        ..InsightConfig::default()
    }
}

/// Provider that answers every request with a fixed reply and records requests
#[derive(Debug, Default)]
pub struct MockProvider {
    reply: String,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(ChatResponse {
            content: self.reply.clone(),
            model: "mock-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }
}

/// Provider that sleeps before answering
#[derive(Debug)]
pub struct SlowProvider {
    pub delay: Duration,
}

#[async_trait]
impl LlmProvider for SlowProvider {
    fn name(&self) -> &'static str {
        "slow"
    }

    fn display_name(&self) -> &'static str {
        "Slow Provider"
    }

    fn default_model(&self) -> &str {
        "slow-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        tokio::time::sleep(self.delay).await;
        Ok(ChatResponse {
            content: "Too late to matter.".to_owned(),
            model: "slow-model".to_owned(),
            usage: None,
            finish_reason: None,
        })
    }
}

/// Provider that always fails with a rate limit error
#[derive(Debug)]
pub struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn display_name(&self) -> &'static str {
        "Failing Provider"
    }

    fn default_model(&self) -> &str {
        "failing-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service("Mock", "quota exhausted"))
    }
}
