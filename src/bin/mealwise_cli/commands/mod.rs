// ABOUTME: Subcommand implementations for mealwise-cli
// ABOUTME: Shared profile arguments plus plan, targets and catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

pub mod catalog;
pub mod plan;
pub mod targets;

use clap::Args;
use mealwise::models::{ActivityLevel, DietaryPreference, Gender, Goal, UserProfile};

/// Profile flags shared by `plan` and `targets`
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Height in centimetres
    #[arg(long)]
    pub height: f64,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,

    /// male or female
    #[arg(long)]
    pub gender: Gender,

    /// sedentary, lightly_active, moderately_active, very_active or extra_active
    #[arg(long)]
    pub activity: ActivityLevel,

    /// veg or non-veg
    #[arg(long)]
    pub diet: DietaryPreference,

    /// weight_loss, maintenance or muscle_gain
    #[arg(long)]
    pub goal: Goal,
}

impl ProfileArgs {
    /// Build the domain profile from the parsed flags
    pub fn to_profile(&self) -> UserProfile {
        let profile = UserProfile::new(
            self.age,
            self.height,
            self.weight,
            self.gender,
            self.activity,
            self.diet,
            self.goal,
        );
        match &self.name {
            Some(name) => profile.with_name(name.clone()),
            None => profile,
        }
    }
}
