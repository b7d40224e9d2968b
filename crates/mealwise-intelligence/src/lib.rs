// ABOUTME: Metabolic calculation and meal selection algorithms for Mealwise
// ABOUTME: Pure planning core: health calculator, meal selector and planner configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Intelligence
//!
//! The deterministic half of the planner. Nothing here performs I/O, so every
//! function can be tested without the catalog file, the LLM or the CLI.

/// Planner configuration with defaults, validation and environment overrides
pub mod config;

/// Health calculator (BMI, BMR, TDEE, calorie target, macro split)
pub mod nutrition_calculator;

/// Greedy meal plan selection
pub mod meal_selector;

pub use config::{ConfigError, PlannerConfig};
pub use meal_selector::{filter_for_preference, select_meal_plan};
pub use nutrition_calculator::analyze_profile;
