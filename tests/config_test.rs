// ABOUTME: Tests for environment-driven configuration and LLM provider selection
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::path::Path;

use common::init_test_logging;
use mealwise::config::{AppConfig, LlmProviderType, PlannerConfig};
use mealwise::errors::ErrorCode;
use mealwise::llm::{ChatProvider, LlmProvider};
use serial_test::serial;

const MANAGED_VARS: &[&str] = &[
    "MEALWISE_CATALOG_PATH",
    "MEALWISE_LLM_PROVIDER",
    "MEALWISE_LLM_MODEL",
    "MEALWISE_PLAN_DAYS",
    "MEALWISE_MAX_USES_PER_ITEM",
    "MEALWISE_INSIGHT_TIMEOUT_SECS",
    "GEMINI_API_KEY",
    "GEMINI_MODEL",
    "GROQ_API_KEY",
    "LOCAL_LLM_BASE_URL",
    "LOCAL_LLM_MODEL",
];

fn clear_env() {
    init_test_logging();
    for var in MANAGED_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_provider_type_parsing() {
    assert_eq!(LlmProviderType::from_str_or_default("GROQ"), LlmProviderType::Groq);
    assert_eq!(LlmProviderType::from_str_or_default("ollama"), LlmProviderType::Local);
    assert_eq!(LlmProviderType::from_str_or_default(" vllm "), LlmProviderType::Local);
    assert_eq!(LlmProviderType::from_str_or_default("off"), LlmProviderType::None);
    assert_eq!(LlmProviderType::from_str_or_default("unknown"), LlmProviderType::Gemini);
    assert_eq!(LlmProviderType::Local.to_string(), "local");
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.catalog_path, Path::new("data/food_catalog.csv"));
    assert_eq!(config.llm_provider, LlmProviderType::Gemini);
    assert_eq!(config.llm_model, None);
    assert_eq!(config.planner.selection.plan_days, 7);
    assert_eq!(config.planner.insight.timeout_secs, 10);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("MEALWISE_CATALOG_PATH", "/srv/foods.csv");
    env::set_var("MEALWISE_LLM_PROVIDER", "groq");
    env::set_var("MEALWISE_LLM_MODEL", "llama-3.1-8b-instant");
    env::set_var("MEALWISE_PLAN_DAYS", "3");
    env::set_var("MEALWISE_INSIGHT_TIMEOUT_SECS", "4");

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.catalog_path, Path::new("/srv/foods.csv"));
    assert_eq!(config.llm_provider, LlmProviderType::Groq);
    assert_eq!(config.llm_model.as_deref(), Some("llama-3.1-8b-instant"));
    assert_eq!(config.planner.selection.plan_days, 3);
    assert_eq!(config.planner.insight.timeout_secs, 4);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_planner_override_is_rejected() {
    clear_env();
    env::set_var("MEALWISE_PLAN_DAYS", "0");
    let out_of_range = AppConfig::from_env().unwrap_err();
    assert_eq!(out_of_range.code, ErrorCode::ConfigInvalid);

    env::set_var("MEALWISE_PLAN_DAYS", "a week");
    let unparsable = PlannerConfig::load().unwrap_err();
    assert!(unparsable.to_string().contains("MEALWISE_PLAN_DAYS"));

    clear_env();
}

#[test]
#[serial]
fn test_none_provider_creates_nothing() {
    clear_env();
    assert!(ChatProvider::create(LlmProviderType::None, None).unwrap().is_none());

    env::set_var("MEALWISE_LLM_PROVIDER", "disabled");
    assert!(ChatProvider::from_env().unwrap().is_none());

    clear_env();
}

#[test]
#[serial]
fn test_missing_api_keys_are_reported() {
    clear_env();

    let gemini = ChatProvider::create(LlmProviderType::Gemini, None).unwrap_err();
    assert_eq!(gemini.code, ErrorCode::ConfigMissing);

    let groq = ChatProvider::create(LlmProviderType::Groq, None).unwrap_err();
    assert_eq!(groq.code, ErrorCode::ConfigMissing);
}

#[test]
#[serial]
fn test_model_override_applies_to_created_provider() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "test-key");

    let gemini = ChatProvider::create(LlmProviderType::Gemini, Some("gemini-2.5-pro"))
        .unwrap()
        .unwrap();
    assert_eq!(gemini.name(), "gemini");
    assert_eq!(gemini.default_model(), "gemini-2.5-pro");

    env::set_var("LOCAL_LLM_BASE_URL", "http://localhost:11434/v1");
    let local = ChatProvider::create(LlmProviderType::Local, None)
        .unwrap()
        .unwrap();
    assert_eq!(local.name(), "ollama");
    assert_eq!(local.default_model(), "qwen2.5:7b-instruct");

    clear_env();
}
