// ABOUTME: `targets` subcommand: biometrics and daily macro targets without a plan
// ABOUTME: Does not load the catalog or contact an LLM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise::config::AppConfig;
use mealwise::errors::AppResult;
use mealwise::intelligence::analyze_profile;

use super::ProfileArgs;
use crate::helpers::display;
use crate::helpers::output::{self, OutputFormat};

pub fn run(config: &AppConfig, profile: &ProfileArgs, format: OutputFormat) -> AppResult<()> {
    let profile = profile.to_profile();
    let analysis = analyze_profile(&profile, &config.planner.nutrition)?;

    match format {
        OutputFormat::Json => output::print_json(&analysis),
        OutputFormat::Text => {
            display::display_analysis(&profile, &analysis);
            Ok(())
        }
    }
}
