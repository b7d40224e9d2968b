// ABOUTME: Food catalog item model with diet tag and optional meal type
// ABOUTME: FoodItem, DietTag, and MealType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use super::normalize_label;
use super::DietaryPreference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a food item is vegetarian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietTag {
    /// Vegetarian
    Veg,
    /// Contains meat, fish or egg
    NonVeg,
}

impl DietTag {
    /// Parse a catalog diet cell, returning `None` for unknown tags
    #[must_use]
    pub fn parse_lossy(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "veg" | "vegetarian" | "vegan" | "v" => Some(Self::Veg),
            "non veg" | "nonveg" | "non vegetarian" | "nv" => Some(Self::NonVeg),
            _ => None,
        }
    }

    /// Whether an item with this tag may appear in a plan for `preference`
    #[must_use]
    pub const fn allowed_for(self, preference: DietaryPreference) -> bool {
        match preference {
            DietaryPreference::Veg => matches!(self, Self::Veg),
            DietaryPreference::NonVeg => true,
        }
    }
}

impl fmt::Display for DietTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
        })
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, `None` when blank or unknown
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" | "snacks" => Some(Self::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        })
    }
}

/// One row of the food catalog, nutrient values per serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Category (given in the catalog or inferred from the name)
    pub category: String,
    /// Calories per serving
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Carbohydrates per serving (grams)
    pub carbs_g: f64,
    /// Fat per serving (grams)
    pub fat_g: f64,
    /// Vegetarian or not
    pub diet: DietTag,
    /// Meal the item is intended for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}
