// ABOUTME: User profile model and its enums (gender, activity level, goal, dietary preference)
// ABOUTME: Enum values parse leniently from human labels such as "Weight Loss" or "non-veg"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use super::normalize_label;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR offset)
    Male,
    /// Female (-161 kcal BMR offset)
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" | "m" | "man" => Ok(Self::Male),
            "female" | "f" | "woman" => Ok(Self::Female),
            _ => Err(AppError::invalid_input(format!("Unknown gender: '{s}'"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

/// Habitual physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise plus physical job
    ExtraActive,
}

impl ActivityLevel {
    /// All activity levels in ascending order of energy expenditure
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly active" | "light" | "lightly" | "light active" => Ok(Self::LightlyActive),
            "moderately active" | "moderate" | "moderately" | "moderate active" => {
                Ok(Self::ModeratelyActive)
            }
            "very active" | "very" | "active" => Ok(Self::VeryActive),
            "extra active" | "extra" | "extremely active" | "super active" => Ok(Self::ExtraActive),
            _ => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{s}'"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtraActive => "Extra Active",
        })
    }
}

/// Body composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric balance
    Maintenance,
    /// Caloric surplus
    MuscleGain,
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "weight loss" | "loss" | "lose" | "lose weight" | "cut" => Ok(Self::WeightLoss),
            "maintenance" | "maintain" | "maintain weight" => Ok(Self::Maintenance),
            "muscle gain" | "gain" | "gain muscle" | "bulk" | "weight gain" => Ok(Self::MuscleGain),
            _ => Err(AppError::invalid_input(format!("Unknown goal: '{s}'"))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WeightLoss => "Weight Loss",
            Self::Maintenance => "Maintenance",
            Self::MuscleGain => "Muscle Gain",
        })
    }
}

/// Which food items a plan may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    /// Vegetarian items only
    Veg,
    /// Any item
    NonVeg,
}

impl FromStr for DietaryPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "veg" | "vegetarian" | "v" => Ok(Self::Veg),
            "non veg" | "nonveg" | "non vegetarian" | "nv" => Ok(Self::NonVeg),
            _ => Err(AppError::invalid_input(format!(
                "Unknown dietary preference: '{s}'"
            ))),
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
        })
    }
}

/// Immutable description of the person a plan is built for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Biological sex
    pub gender: Gender,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
    /// Goal
    pub goal: Goal,
}

impl UserProfile {
    /// Create a profile without a display name
    #[must_use]
    pub const fn new(
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        gender: Gender,
        activity_level: ActivityLevel,
        dietary_preference: DietaryPreference,
        goal: Goal,
    ) -> Self {
        Self {
            name: None,
            age,
            height_cm,
            weight_kg,
            gender,
            activity_level,
            dietary_preference,
            goal,
        }
    }

    /// Attach a display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
