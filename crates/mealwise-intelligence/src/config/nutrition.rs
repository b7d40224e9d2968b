// ABOUTME: Nutrition configuration for metabolic calculations and calorie targets
// ABOUTME: Configures BMR coefficients, activity factors, goal multipliers, adjustments and macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Nutrition Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - BMI bands: WHO Technical Report Series 894 (2000)

use mealwise_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};

/// Nutrition Calculation Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie multipliers applied to TDEE per goal
    pub goal_multipliers: GoalMultipliersConfig,
    /// Age and BMI based calorie adjustments
    pub adjustments: CalorieAdjustmentConfig,
    /// Protein/carb/fat split per goal
    pub macro_splits: MacroSplitsConfig,
    /// Plausible ranges for profile biometrics
    pub profile_bounds: ProfileBoundsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }
}

/// TDEE multipliers per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalMultipliersConfig {
    /// Weight loss deficit: 0.85
    pub weight_loss: f64,
    /// Maintenance: 1.0
    pub maintenance: f64,
    /// Muscle gain surplus: 1.15
    pub muscle_gain: f64,
}

impl GoalMultipliersConfig {
    /// Multiplier for a goal
    #[must_use]
    pub const fn multiplier_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::WeightLoss => self.weight_loss,
            Goal::Maintenance => self.maintenance,
            Goal::MuscleGain => self.muscle_gain,
        }
    }
}

/// Age and BMI based adjustments applied after the goal multiplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// Apply the adjustments at all
    pub enabled: bool,
    /// Ages strictly above this get `older_adult_multiplier`: 40
    pub older_adult_age_above: u32,
    /// Slower metabolism multiplier: 0.95
    pub older_adult_multiplier: f64,
    /// Young adult band lower bound (inclusive): 18
    pub young_adult_min_age: u32,
    /// Young adult band upper bound (inclusive): 25
    pub young_adult_max_age: u32,
    /// Young adult muscle gain multiplier: 1.05
    pub young_adult_gain_multiplier: f64,
    /// Underweight floor as a fraction of TDEE: 1.1
    pub underweight_min_tdee_ratio: f64,
    /// Overweight/obese weight loss multiplier: 0.95
    pub overweight_loss_multiplier: f64,
}

/// Macro distribution (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.protein_pct as u16 + self.carbs_pct as u16 + self.fat_pct as u16
    }

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }
}

/// Macro split per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitsConfig {
    /// Weight loss: 30/40/30
    pub weight_loss: MacroDistribution,
    /// Maintenance: 25/50/25
    pub maintenance: MacroDistribution,
    /// Muscle gain: 30/50/20
    pub muscle_gain: MacroDistribution,
}

impl MacroSplitsConfig {
    /// Split for a goal
    #[must_use]
    pub const fn split_for(&self, goal: Goal) -> MacroDistribution {
        match goal {
            Goal::WeightLoss => self.weight_loss,
            Goal::Maintenance => self.maintenance,
            Goal::MuscleGain => self.muscle_gain,
        }
    }
}

/// Plausible human ranges; values outside are rejected as invalid profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileBoundsConfig {
    /// Minimum age in years: 10
    pub min_age: u32,
    /// Maximum age in years: 120
    pub max_age: u32,
    /// Minimum height in cm: 50
    pub min_height_cm: f64,
    /// Maximum height in cm: 272
    pub max_height_cm: f64,
    /// Minimum weight in kg: 2
    pub min_weight_kg: f64,
    /// Maximum weight in kg: 350
    pub max_weight_kg: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for GoalMultipliersConfig {
    fn default() -> Self {
        Self {
            weight_loss: 0.85,
            maintenance: 1.0,
            muscle_gain: 1.15,
        }
    }
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            older_adult_age_above: 40,
            older_adult_multiplier: 0.95,
            young_adult_min_age: 18,
            young_adult_max_age: 25,
            young_adult_gain_multiplier: 1.05,
            underweight_min_tdee_ratio: 1.1,
            overweight_loss_multiplier: 0.95,
        }
    }
}

impl Default for MacroSplitsConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroDistribution::new(30, 40, 30),
            maintenance: MacroDistribution::new(25, 50, 25),
            muscle_gain: MacroDistribution::new(30, 50, 20),
        }
    }
}

impl Default for ProfileBoundsConfig {
    fn default() -> Self {
        Self {
            min_age: 10,
            max_age: 120,
            min_height_cm: 50.0,
            max_height_cm: 272.0,
            min_weight_kg: 2.0,
            max_weight_kg: 350.0,
        }
    }
}
