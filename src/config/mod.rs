// ABOUTME: Configuration management module for the Mealwise planner
// ABOUTME: Environment loading and LLM provider selection types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Configuration module
//!
//! - **environment**: `AppConfig` assembled from environment variables
//! - **types**: `LlmProviderType`
//!
//! Planner tuning (calculator, selector and insight settings) lives in
//! `mealwise_intelligence::config` and is re-exported here.

/// Environment configuration
pub mod environment;
/// Shared configuration enums
pub mod types;

pub use environment::AppConfig;
pub use mealwise_intelligence::config::{
    ConfigError, InsightConfig, MealSlotConfig, PlannerConfig, SelectionConfig,
};
pub use types::LlmProviderType;
