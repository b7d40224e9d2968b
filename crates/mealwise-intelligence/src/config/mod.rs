// ABOUTME: Planner configuration for metabolic calculations, meal selection and insights
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Planner Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR, activity factors, goal multipliers, adjustments, macro splits
//! - `selection` - Plan length, meal slots, pairings, calorie tolerance and repetition limits
//! - `insight` - LLM call timeout and sampling parameters

pub mod error;
pub mod insight;
pub mod nutrition;
pub mod selection;

pub use error::ConfigError;
pub use insight::InsightConfig;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, GoalMultipliersConfig,
    MacroDistribution, MacroSplitsConfig, NutritionConfig, ProfileBoundsConfig,
};
pub use selection::{MealSlotConfig, SelectionConfig};

use mealwise_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Metabolic calculation settings
    pub nutrition: NutritionConfig,
    /// Meal selection settings
    pub selection: SelectionConfig,
    /// Insight generation settings
    pub insight: InsightConfig,
}

impl PlannerConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_selection()?;

        if self.insight.timeout_secs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Insight timeout must be at least 1 second",
            ));
        }
        if !(0.0..=2.0).contains(&self.insight.temperature) {
            return Err(ConfigError::ValueOutOfRange(
                "Insight temperature must be between 0.0 and 2.0",
            ));
        }

        Ok(())
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &nutr.goal_multipliers;
        if goals.weight_loss <= 0.0 || goals.maintenance <= 0.0 || goals.muscle_gain <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Goal multipliers must be positive",
            ));
        }
        if goals.weight_loss > goals.maintenance || goals.maintenance > goals.muscle_gain {
            return Err(ConfigError::InvalidRange(
                "Goal multipliers must satisfy weight_loss <= maintenance <= muscle_gain",
            ));
        }

        let adj = &nutr.adjustments;
        if adj.young_adult_min_age > adj.young_adult_max_age {
            return Err(ConfigError::InvalidRange(
                "young_adult_min_age must be <= young_adult_max_age",
            ));
        }
        if adj.older_adult_multiplier <= 0.0
            || adj.young_adult_gain_multiplier <= 0.0
            || adj.underweight_min_tdee_ratio <= 0.0
            || adj.overweight_loss_multiplier <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie adjustment multipliers must be positive",
            ));
        }

        let splits = &nutr.macro_splits;
        for split in [splits.weight_loss, splits.maintenance, splits.muscle_gain] {
            if split.total() != 100 {
                return Err(ConfigError::InvalidWeights(
                    "Macro split percentages must sum to 100",
                ));
            }
        }

        let bounds = &nutr.profile_bounds;
        if bounds.min_age == 0
            || bounds.min_height_cm <= 0.0
            || bounds.min_weight_kg <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Profile lower bounds must be positive",
            ));
        }
        if bounds.min_age >= bounds.max_age
            || bounds.min_height_cm >= bounds.max_height_cm
            || bounds.min_weight_kg >= bounds.max_weight_kg
        {
            return Err(ConfigError::InvalidRange(
                "Profile bounds: each minimum must be < its maximum",
            ));
        }

        Ok(())
    }

    fn validate_selection(&self) -> Result<(), ConfigError> {
        let sel = &self.selection;

        if !(1..=31).contains(&sel.plan_days) {
            return Err(ConfigError::ValueOutOfRange(
                "plan_days must be between 1 and 31",
            ));
        }
        if sel.calorie_tolerance_percent <= 0.0 || sel.calorie_tolerance_percent >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_tolerance_percent must be in (0, 1)",
            ));
        }
        if sel.calorie_tolerance_min_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_tolerance_min_kcal must be positive",
            ));
        }
        if sel.max_uses_per_item == 0 || sel.max_items_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_uses_per_item and max_items_per_day must be at least 1",
            ));
        }
        if sel.tie_epsilon_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "tie_epsilon_kcal must not be negative",
            ));
        }

        if sel.meal_slots.is_empty() {
            return Err(ConfigError::MissingField("meal_slots"));
        }
        if sel.meal_slots.iter().any(|slot| slot.share <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Meal slot shares must be positive",
            ));
        }
        let total_share: f64 = sel.meal_slots.iter().map(|slot| slot.share).sum();
        if (total_share - 1.0).abs() > 0.001 {
            return Err(ConfigError::InvalidWeights(
                "Meal slot shares must sum to 1.0",
            ));
        }
        for (position, slot) in sel.meal_slots.iter().enumerate() {
            if sel.meal_slots[..position].iter().any(|earlier| earlier.meal == slot.meal) {
                return Err(ConfigError::InvalidRange(
                    "Each meal may appear in only one slot",
                ));
            }
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Selection overrides
        Self::apply_env_var("MEALWISE_PLAN_DAYS", &mut self.selection.plan_days)?;
        Self::apply_env_var(
            "MEALWISE_CALORIE_TOLERANCE_PERCENT",
            &mut self.selection.calorie_tolerance_percent,
        )?;
        Self::apply_env_var(
            "MEALWISE_CALORIE_TOLERANCE_MIN_KCAL",
            &mut self.selection.calorie_tolerance_min_kcal,
        )?;
        Self::apply_env_var(
            "MEALWISE_MAX_USES_PER_ITEM",
            &mut self.selection.max_uses_per_item,
        )?;
        Self::apply_env_var(
            "MEALWISE_MAX_ITEMS_PER_DAY",
            &mut self.selection.max_items_per_day,
        )?;
        Self::apply_env_var(
            "MEALWISE_VARIETY_WINDOW_DAYS",
            &mut self.selection.variety_window_days,
        )?;

        // Nutrition overrides
        Self::apply_env_var(
            "MEALWISE_CALORIE_ADJUSTMENTS_ENABLED",
            &mut self.nutrition.adjustments.enabled,
        )?;

        // Insight overrides
        Self::apply_env_var(
            env_config::INSIGHT_TIMEOUT_SECS,
            &mut self.insight.timeout_secs,
        )?;
        Self::apply_env_var(
            "MEALWISE_INSIGHT_TEMPERATURE",
            &mut self.insight.temperature,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_macro_split_must_sum_to_100() {
        let mut config = PlannerConfig::default();
        config.nutrition.macro_splits.maintenance = MacroDistribution::new(30, 50, 30);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_activity_factors_must_ascend() {
        let mut config = PlannerConfig::default();
        config.nutrition.activity_factors.very_active = 1.5;

        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_plan_days_bounds() {
        let mut config = PlannerConfig::default();
        config.selection.plan_days = 0;
        assert!(config.validate().is_err());

        config.selection.plan_days = 32;
        assert!(config.validate().is_err());

        config.selection.plan_days = 31;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_meal_slot_shares_must_cover_the_day() {
        let mut config = PlannerConfig::default();
        config.selection.meal_slots[2].share = 0.25;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));

        config.selection.meal_slots.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField("meal_slots"))
        ));
    }

    #[test]
    fn test_meal_slots_must_be_distinct() {
        let mut config = PlannerConfig::default();
        config.selection.meal_slots[1].meal = config.selection.meal_slots[0].meal;

        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_applies() {
        env::set_var("MEALWISE_PLAN_DAYS", "3");
        env::set_var(env_config::INSIGHT_TIMEOUT_SECS, "2");
        let loaded = PlannerConfig::load();
        env::remove_var("MEALWISE_PLAN_DAYS");
        env::remove_var(env_config::INSIGHT_TIMEOUT_SECS);

        let config = loaded.unwrap();
        assert_eq!(config.selection.plan_days, 3);
        assert_eq!(config.insight.timeout_secs, 2);
    }

    #[test]
    #[serial]
    fn test_unparsable_env_override_is_rejected() {
        env::set_var("MEALWISE_MAX_USES_PER_ITEM", "lots");
        let loaded = PlannerConfig::load();
        env::remove_var("MEALWISE_MAX_USES_PER_ITEM");

        assert!(matches!(loaded, Err(ConfigError::Parse(_))));
    }
}
