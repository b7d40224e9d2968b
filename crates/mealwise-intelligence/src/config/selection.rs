// ABOUTME: Meal selection configuration: plan length, meal slots, tolerance, repetition and item caps
// ABOUTME: Every greedy-selection knob lives here with its documented default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::models::MealType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One meal of the day and its share of the daily calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSlotConfig {
    /// Meal served in this slot
    pub meal: MealType,
    /// Fraction of the daily target planned for this meal
    pub share: f64,
}

impl MealSlotConfig {
    /// Slot for `meal` taking `share` of the day
    #[must_use]
    pub const fn new(meal: MealType, share: f64) -> Self {
        Self { meal, share }
    }
}

/// Greedy meal selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Days in a plan: 7
    pub plan_days: u8,
    /// Meals planned each day, in serving order: breakfast 25%, lunch 40%, dinner 35%
    pub meal_slots: Vec<MealSlotConfig>,
    /// Side-dish categories that go with a main dish category
    pub pairings: BTreeMap<String, Vec<String>>,
    /// Tolerance as a fraction of the daily target: 0.05
    pub calorie_tolerance_percent: f64,
    /// Tolerance floor in kcal: 75
    pub calorie_tolerance_min_kcal: f64,
    /// Maximum uses of one item across the whole plan: 3
    pub max_uses_per_item: u32,
    /// Maximum items selected for one day: 10
    pub max_items_per_day: usize,
    /// Items eaten within this many previous days are only reused when needed: 2
    pub variety_window_days: u8,
    /// Candidates closer than this (kcal) are considered equally close: 0.5
    pub tie_epsilon_kcal: f64,
}

impl SelectionConfig {
    /// Allowed absolute deviation (kcal) from `target_calories`
    #[must_use]
    pub fn tolerance_for(&self, target_calories: f64) -> f64 {
        (target_calories * self.calorie_tolerance_percent).max(self.calorie_tolerance_min_kcal)
    }

    /// Uses of one item the plan may have made by the end of `day` (1-based)
    ///
    /// Spreads `max_uses_per_item` evenly over the plan so early days do not
    /// exhaust the best items.
    #[must_use]
    pub fn spread_quota(&self, day: u8) -> u32 {
        let days = u32::from(self.plan_days.max(1));
        (self.max_uses_per_item * u32::from(day)).div_ceil(days)
    }

    /// Side categories that pair with a main dish of `category`
    #[must_use]
    pub fn pairings_for(&self, category: &str) -> &[String] {
        self.pairings.get(category).map_or(&[], Vec::as_slice)
    }

    /// Default main/side pairings by dish category
    #[must_use]
    pub fn default_pairings() -> BTreeMap<String, Vec<String>> {
        const RULES: &[(&str, &[&str])] = &[
            ("curry", &["rice", "flatbread", "dry_veg"]),
            ("dry_veg", &["flatbread", "rice", "curry"]),
            ("rice", &["curry", "dry_veg", "yogurt"]),
            ("soup", &["flatbread", "salad"]),
            ("pasta", &["salad", "soup", "flatbread"]),
            ("breakfast_item", &["beverage", "fruit"]),
            ("oats", &["fruit", "milk", "nuts"]),
        ];

        RULES
            .iter()
            .map(|(main, sides)| {
                (
                    (*main).to_owned(),
                    sides.iter().map(|side| (*side).to_owned()).collect(),
                )
            })
            .collect()
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            plan_days: 7,
            meal_slots: vec![
                MealSlotConfig::new(MealType::Breakfast, 0.25),
                MealSlotConfig::new(MealType::Lunch, 0.40),
                MealSlotConfig::new(MealType::Dinner, 0.35),
            ],
            pairings: Self::default_pairings(),
            calorie_tolerance_percent: 0.05,
            calorie_tolerance_min_kcal: 75.0,
            max_uses_per_item: 3,
            max_items_per_day: 10,
            variety_window_days: 2,
            tie_epsilon_kcal: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_uses_floor_for_small_targets() {
        let config = SelectionConfig::default();
        assert!((config.tolerance_for(1000.0) - 75.0).abs() < f64::EPSILON);
        assert!((config.tolerance_for(2556.0) - 127.8).abs() < 1e-9);
    }

    #[test]
    fn test_spread_quota_reaches_cap_on_last_day() {
        let config = SelectionConfig::default();
        let quotas: Vec<u32> = (1..=7).map(|day| config.spread_quota(day)).collect();
        assert_eq!(quotas, [1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_default_slots_cover_the_day() {
        let config = SelectionConfig::default();
        let total: f64 = config.meal_slots.iter().map(|slot| slot.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(config.pairings_for("curry"), ["rice", "flatbread", "dry_veg"]);
        assert!(config.pairings_for("generic").is_empty());
    }
}
