// ABOUTME: Health calculator: BMI, BMR, TDEE, goal-adjusted calorie target and macro split
// ABOUTME: Pure functions over a UserProfile and NutritionConfig, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Nutrition Calculator Module
//!
//! Turns a `UserProfile` into a `HealthAnalysis`: body metrics plus the daily
//! calorie and macronutrient targets the meal selector plans against.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig, ProfileBoundsConfig};
use mealwise_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use mealwise_core::errors::PlanError;
use mealwise_core::models::{
    ActivityLevel, Biometrics, BmiCategory, Gender, Goal, HealthAnalysis, MacroTargets,
    UserProfile,
};
use tracing::{debug, instrument};

/// Reject profiles with non-positive, non-finite or implausible biometrics
///
/// # Errors
///
/// Returns `PlanError::InvalidProfile` naming the first offending field
pub fn validate_profile(
    profile: &UserProfile,
    bounds: &ProfileBoundsConfig,
) -> Result<(), PlanError> {
    if profile.age == 0 {
        return Err(PlanError::invalid_profile("age", "must be positive"));
    }
    if !(bounds.min_age..=bounds.max_age).contains(&profile.age) {
        return Err(PlanError::invalid_profile(
            "age",
            format!(
                "{} is outside {}-{} years",
                profile.age, bounds.min_age, bounds.max_age
            ),
        ));
    }

    check_measurement(
        "height_cm",
        profile.height_cm,
        bounds.min_height_cm,
        bounds.max_height_cm,
        "cm",
    )?;
    check_measurement(
        "weight_kg",
        profile.weight_kg,
        bounds.min_weight_kg,
        bounds.max_weight_kg,
        "kg",
    )
}

fn check_measurement(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    unit: &str,
) -> Result<(), PlanError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlanError::invalid_profile(field, "must be a positive number"));
    }
    if value < min || value > max {
        return Err(PlanError::invalid_profile(
            field,
            format!("{value} is outside {min}-{max} {unit}"),
        ));
    }
    Ok(())
}

/// Body mass index: kg / m²
///
/// Callers validate `height_cm` first; the result is rounded to two decimals.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    (weight_kg / (height_m * height_m) * 100.0).round() / 100.0
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    config.msj_age_coef.mul_add(
        f64::from(age),
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    ) + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Daily calorie target for a goal, rounded to whole kcal
///
/// Applies the goal multiplier, then (when enabled) the age and BMI adjustments:
/// - age above 40: x0.95
/// - otherwise age 18-25 with muscle gain: x1.05
/// - underweight: at least TDEE x1.1
/// - otherwise overweight/obese with weight loss: x0.95
#[must_use]
pub fn calculate_target_calories(
    tdee: f64,
    goal: Goal,
    age: u32,
    bmi_category: BmiCategory,
    config: &NutritionConfig,
) -> f64 {
    let mut calories = tdee * config.goal_multipliers.multiplier_for(goal);

    let adj = &config.adjustments;
    if adj.enabled {
        if age > adj.older_adult_age_above {
            calories *= adj.older_adult_multiplier;
        } else if (adj.young_adult_min_age..=adj.young_adult_max_age).contains(&age)
            && goal == Goal::MuscleGain
        {
            calories *= adj.young_adult_gain_multiplier;
        }

        if bmi_category == BmiCategory::Underweight {
            calories = calories.max(tdee * adj.underweight_min_tdee_ratio);
        } else if bmi_category.is_above_normal() && goal == Goal::WeightLoss {
            calories *= adj.overweight_loss_multiplier;
        }
    }

    calories.round()
}

/// Split a calorie target into protein, carbohydrate and fat grams
///
/// Grams are derived with 4/4/9 kcal per gram so the energy of the split
/// equals `calories`.
#[must_use]
pub fn calculate_macro_targets(calories: f64, goal: Goal, config: &NutritionConfig) -> MacroTargets {
    let (protein_pct, carbs_pct, fat_pct) = config.macro_splits.split_for(goal).as_tuple();

    MacroTargets {
        calories,
        protein_g: calories * f64::from(protein_pct) / 100.0 / KCAL_PER_GRAM_PROTEIN,
        carbs_g: calories * f64::from(carbs_pct) / 100.0 / KCAL_PER_GRAM_CARBS,
        fat_g: calories * f64::from(fat_pct) / 100.0 / KCAL_PER_GRAM_FAT,
    }
}

/// Full health analysis: validate, BMI, BMR, TDEE, target calories, macros
///
/// # Errors
///
/// Returns `PlanError::InvalidProfile` if the profile fails validation
#[instrument(skip_all, fields(goal = %profile.goal, activity = %profile.activity_level))]
pub fn analyze_profile(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> Result<HealthAnalysis, PlanError> {
    validate_profile(profile, &config.profile_bounds)?;

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmi_category = BmiCategory::from_bmi(bmi);
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let calories = calculate_target_calories(tdee, profile.goal, profile.age, bmi_category, config);

    // Extremely low BMR inputs can push the target to zero or below
    if calories <= 0.0 {
        return Err(PlanError::invalid_profile(
            "weight_kg",
            format!("profile yields a non-positive calorie target ({calories} kcal)"),
        ));
    }

    let targets = calculate_macro_targets(calories, profile.goal, config);

    debug!(bmi, %bmi_category, bmr, tdee, calories, "Analyzed profile");

    Ok(HealthAnalysis {
        biometrics: Biometrics {
            bmi,
            bmi_category,
            bmr,
            tdee,
        },
        targets,
    })
}
