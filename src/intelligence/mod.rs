// ABOUTME: Intelligence module re-exports from the mealwise-intelligence crate
// ABOUTME: Adds the LLM-backed insight generator that needs the main crate's HTTP stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Intelligence Module
//!
//! The health calculator and meal selector live in `mealwise-intelligence`
//! and are re-exported here so callers have a single import path.

pub use mealwise_intelligence::{meal_selector, nutrition_calculator};
pub use mealwise_intelligence::{analyze_profile, filter_for_preference, select_meal_plan};

/// LLM plan summaries with deterministic fallback
pub mod insight_generator;

pub use insight_generator::{build_insight_prompt, fallback_text, InsightGenerator};
