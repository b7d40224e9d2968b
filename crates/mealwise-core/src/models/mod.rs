// ABOUTME: Core data models for the Mealwise planner
// ABOUTME: Re-exports UserProfile, FoodItem, MacroTargets, MealPlan, Insight and related enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Data Models
//!
//! Plain data shared by every stage of the planning pipeline.
//!
//! ## Core Models
//!
//! - `UserProfile`: biometrics, activity level, goal and dietary preference
//! - `FoodItem`: one catalog row with its nutrient values and diet tag
//! - `MacroTargets`: daily calorie and macronutrient targets
//! - `MealPlan`: ordered `DayPlan` entries, each split into `PlannedMeal` slots
//! - `Insight`: motivational summary and where it came from
//! - `PlanResult`: everything a single planning request produces

mod food;
mod plan;
mod profile;

// Profile domain
pub use profile::{ActivityLevel, DietaryPreference, Gender, Goal, UserProfile};

// Food domain
pub use food::{DietTag, FoodItem, MealType};

// Plan domain
pub use plan::{
    Biometrics, BmiCategory, DayPlan, HealthAnalysis, Insight, InsightSource, MacroTargets,
    MacroTotals, MealPlan, PlanResult, PlannedMeal,
};

/// Normalize free-form user input for lenient enum parsing
///
/// Lower-cases, treats `-` and `_` as spaces and collapses whitespace, so
/// "Weight_Loss", "weight-loss" and "  weight   loss " all compare equal.
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
