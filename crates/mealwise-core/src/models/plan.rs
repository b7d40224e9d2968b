// ABOUTME: Planning output models: targets, biometrics, day plans, meal plans and insights
// ABOUTME: Everything a planning request derives from a UserProfile and the food catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use super::{DietaryPreference, FoodItem, MealType, UserProfile};
use crate::constants::bmi;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Target kilocalories, whole number
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
}

/// Running nutrient totals for a set of food items
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Kilocalories
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
}

impl MacroTotals {
    /// Add one serving of `item`
    pub fn add_item(&mut self, item: &FoodItem) {
        self.calories += item.calories;
        self.protein_g += item.protein_g;
        self.carbs_g += item.carbs_g;
        self.fat_g += item.fat_g;
    }

    /// Divide every total by `count`, zero totals when `count` is zero
    #[must_use]
    pub fn divided_by(&self, count: usize) -> Self {
        if count == 0 {
            return Self::default();
        }
        let n = count as f64;
        Self {
            calories: self.calories / n,
            protein_g: self.protein_g / n,
            carbs_g: self.carbs_g / n,
            fat_g: self.fat_g / n,
        }
    }
}

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to below 25
    Normal,
    /// BMI 25 to below 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::Normal
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Overweight or obese
    #[must_use]
    pub const fn is_above_normal(self) -> bool {
        matches!(self, Self::Overweight | Self::Obese)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        })
    }
}

/// Derived body metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
}

/// Output of the health calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthAnalysis {
    /// Body metrics
    pub biometrics: Biometrics,
    /// Daily targets
    pub targets: MacroTargets,
}

/// One meal of a day: its calorie budget and the items chosen for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Meal this slot serves
    pub meal: MealType,
    /// Calorie budget for this meal
    pub target_calories: f64,
    /// Selected items in selection order
    pub items: Vec<Arc<FoodItem>>,
    /// Totals of `items`
    pub totals: MacroTotals,
}

impl PlannedMeal {
    /// Empty meal with a calorie budget
    #[must_use]
    pub const fn new(meal: MealType, target_calories: f64) -> Self {
        Self {
            meal,
            target_calories,
            items: Vec::new(),
            totals: MacroTotals {
                calories: 0.0,
                protein_g: 0.0,
                carbs_g: 0.0,
                fat_g: 0.0,
            },
        }
    }

    /// Append an item and update the totals
    pub fn push(&mut self, item: Arc<FoodItem>) {
        self.totals.add_item(&item);
        self.items.push(item);
    }
}

/// One day of a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number
    pub day: u8,
    /// Calorie target for this day
    pub target_calories: f64,
    /// Meals in serving order
    pub meals: Vec<PlannedMeal>,
    /// Totals of every meal
    pub totals: MacroTotals,
}

impl DayPlan {
    /// Day without meals
    #[must_use]
    pub const fn new(day: u8, target_calories: f64) -> Self {
        Self {
            day,
            target_calories,
            meals: Vec::new(),
            totals: MacroTotals {
                calories: 0.0,
                protein_g: 0.0,
                carbs_g: 0.0,
                fat_g: 0.0,
            },
        }
    }

    /// Append a finished meal and update the day totals
    pub fn push_meal(&mut self, meal: PlannedMeal) {
        for item in &meal.items {
            self.totals.add_item(item);
        }
        self.meals.push(meal);
    }

    /// Calories still available before reaching the target (negative when over)
    #[must_use]
    pub fn remaining_calories(&self) -> f64 {
        self.target_calories - self.totals.calories
    }

    /// Every item of the day in serving order
    pub fn items(&self) -> impl Iterator<Item = &FoodItem> {
        self.meals
            .iter()
            .flat_map(|meal| meal.items.iter().map(|item| &**item))
    }

    /// Number of items across all meals
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.meals.iter().map(|meal| meal.items.len()).sum()
    }
}

/// A multi-day meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Preference every item in the plan satisfies
    pub dietary_preference: DietaryPreference,
    /// Allowed absolute deviation from each day's target (kcal)
    pub tolerance_kcal: f64,
    /// Days in order
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    /// Average daily totals across the plan
    #[must_use]
    pub fn average_totals(&self) -> MacroTotals {
        let mut sum = MacroTotals::default();
        for day in &self.days {
            sum.calories += day.totals.calories;
            sum.protein_g += day.totals.protein_g;
            sum.carbs_g += day.totals.carbs_g;
            sum.fat_g += day.totals.fat_g;
        }
        sum.divided_by(self.days.len())
    }

    /// Every selected item across all days
    pub fn items(&self) -> impl Iterator<Item = &FoodItem> {
        self.days.iter().flat_map(DayPlan::items)
    }
}

/// Where an insight's text came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsightSource {
    /// Generated by an LLM provider
    Llm {
        /// Provider name (e.g. "gemini")
        provider: String,
        /// Model identifier
        model: String,
    },
    /// Deterministic template text
    Fallback {
        /// Why the LLM was not used
        reason: String,
    },
}

/// Motivational summary of a meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Summary text
    pub text: String,
    /// Origin of `text`
    pub source: InsightSource,
}

impl Insight {
    /// Whether this insight is the deterministic fallback
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, InsightSource::Fallback { .. })
    }
}

/// Complete result of one planning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Profile the plan was built for
    pub profile: UserProfile,
    /// Biometrics and targets
    pub analysis: HealthAnalysis,
    /// The meal plan
    pub plan: MealPlan,
    /// Summary describing `plan`
    pub insight: Insight,
    /// When the result was produced
    pub generated_at: DateTime<Utc>,
}
