// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy conversion factors, physiological bounds, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large block.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// BMI category boundaries (WHO adult classification)
pub mod bmi {
    /// Below this BMI a person is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this BMI (and at or above underweight) a person is in the normal band
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this BMI (and at or above normal) a person is overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Main library / CLI service name
    pub const MEALWISE: &str = "mealwise";
}

/// Environment variable names shared across crates
pub mod env_config {
    /// Path of the food catalog CSV
    pub const CATALOG_PATH: &str = "MEALWISE_CATALOG_PATH";
    /// LLM provider selection (gemini, groq, local, none)
    pub const LLM_PROVIDER: &str = "MEALWISE_LLM_PROVIDER";
    /// LLM model override
    pub const LLM_MODEL: &str = "MEALWISE_LLM_MODEL";
    /// Insight generation timeout in seconds
    pub const INSIGHT_TIMEOUT_SECS: &str = "MEALWISE_INSIGHT_TIMEOUT_SECS";
}

/// Defaults that are not part of the tunable planner configuration
pub mod defaults {
    /// Default location of the bundled food catalog
    pub const CATALOG_PATH: &str = "data/food_catalog.csv";
    /// Default number of days in a plan
    pub const PLAN_DAYS: u8 = 7;
}
