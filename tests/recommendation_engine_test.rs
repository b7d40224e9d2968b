// ABOUTME: End-to-end tests for the recommendation engine pipeline
// ABOUTME: Profile in, PlanResult out, with and without an LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{
    engine_with_provider, init_test_logging, reference_profile, sample_catalog, FailingProvider,
    MockProvider, SAMPLE_CATALOG_PATH,
};
use mealwise::catalog::FoodCatalog;
use mealwise::config::{AppConfig, InsightConfig, LlmProviderType, PlannerConfig};
use mealwise::errors::{AppError, ErrorCode, PlanError};
use mealwise::intelligence::InsightGenerator;
use mealwise::llm::LlmProvider;
use mealwise::models::{DietTag, DietaryPreference, FoodItem, Goal, InsightSource};
use mealwise::services::RecommendationEngine;

#[tokio::test]
async fn test_generate_plan_without_llm() {
    let engine = engine_with_provider(None);
    let profile = reference_profile(Goal::Maintenance, DietaryPreference::Veg).with_name("Asha");

    let result = engine.generate_plan(&profile).await.unwrap();

    assert_eq!(result.profile, profile);
    assert!((result.analysis.targets.calories - 2556.0).abs() < f64::EPSILON);
    assert_eq!(result.plan.days.len(), 7);
    assert!(result.plan.items().all(|item| item.diet == DietTag::Veg));
    assert!(result.insight.is_fallback());
    assert!(result.insight.text.contains("2556 kcal"));
}

#[tokio::test]
async fn test_generate_plan_with_llm_insight() {
    let provider = Arc::new(MockProvider::new("Your 2172 kcal plan keeps you on track."));
    let engine = engine_with_provider(Some(provider.clone() as Arc<dyn LlmProvider>));
    let profile = reference_profile(Goal::WeightLoss, DietaryPreference::NonVeg);

    let result = engine.generate_plan(&profile).await.unwrap();

    assert!((result.analysis.targets.calories - 2172.0).abs() < f64::EPSILON);
    assert!(matches!(result.insight.source, InsightSource::Llm { ref provider, .. } if provider == "mock"));
    assert_eq!(provider.requests().len(), 1);
}

#[tokio::test]
async fn test_llm_failure_does_not_fail_the_plan() {
    let engine = engine_with_provider(Some(Arc::new(FailingProvider) as Arc<dyn LlmProvider>));
    let profile = reference_profile(Goal::MuscleGain, DietaryPreference::NonVeg);

    let result = engine.generate_plan(&profile).await.unwrap();

    assert!(result.insight.is_fallback());
    assert_eq!(result.plan.days.len(), 7);
}

#[tokio::test]
async fn test_invalid_profile_propagates() {
    let engine = engine_with_provider(None);
    let mut profile = reference_profile(Goal::Maintenance, DietaryPreference::Veg);
    profile.height_cm = -10.0;

    let err = engine.generate_plan(&profile).await.unwrap_err();
    assert!(err.is_invalid_profile());

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_non_veg_only_catalog_cannot_serve_veg_profile() {
    init_test_logging();
    let catalog = FoodCatalog::new(vec![FoodItem {
        name: "Chicken Curry".to_owned(),
        category: "curry".to_owned(),
        calories: 600.0,
        protein_g: 40.0,
        carbs_g: 20.0,
        fat_g: 35.0,
        diet: DietTag::NonVeg,
        meal_type: None,
    }]);
    let config = PlannerConfig::default();
    let engine = RecommendationEngine::new(
        Arc::new(catalog),
        config,
        InsightGenerator::without_llm(InsightConfig::default()),
    )
    .unwrap();

    let err = engine
        .generate_plan(&reference_profile(Goal::Maintenance, DietaryPreference::Veg))
        .await
        .unwrap_err();

    assert!(matches!(err, PlanError::InsufficientCatalog { .. }));
}

#[test]
fn test_zero_day_config_is_rejected() {
    init_test_logging();
    let mut config = PlannerConfig::default();
    config.selection.plan_days = 0;

    let err = RecommendationEngine::new(
        Arc::new(sample_catalog()),
        config,
        InsightGenerator::without_llm(InsightConfig::default()),
    )
    .unwrap_err();

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_analyze_matches_generate() {
    let engine = engine_with_provider(None);
    let analysis = engine
        .analyze(&reference_profile(Goal::Maintenance, DietaryPreference::NonVeg))
        .unwrap();

    assert!((analysis.biometrics.bmr - 1648.75).abs() < 1e-9);
    assert_eq!(engine.catalog().len(), 90);
    assert_eq!(engine.config().selection.plan_days, 7);
}

#[test]
fn test_from_config_without_provider() {
    init_test_logging();
    let config = AppConfig::default()
        .with_catalog_path(SAMPLE_CATALOG_PATH)
        .with_llm_provider(LlmProviderType::None);

    let engine = RecommendationEngine::from_config(config).unwrap();
    assert_eq!(engine.catalog().len(), 90);
}

#[test]
fn test_from_config_reports_missing_catalog() {
    init_test_logging();
    let config = AppConfig::default()
        .with_catalog_path("/no/such/catalog.csv")
        .with_llm_provider(LlmProviderType::None);

    let err = RecommendationEngine::from_config(config).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}
