// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the nutritionist persona used for meal plan insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Nutritionist persona for the plan summary
///
/// Pins the reply to two plain-text sentences that repeat the exact calorie
/// target and avoid naming foods.
pub const INSIGHT_SYSTEM_PROMPT: &str = include_str!("insight_system.md");

/// Get the system prompt for plan insights
#[must_use]
pub const fn get_insight_system_prompt() -> &'static str {
    INSIGHT_SYSTEM_PROMPT
}
