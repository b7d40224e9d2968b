// ABOUTME: `plan` subcommand: runs the recommendation engine for one profile
// ABOUTME: Applies the --days override before building the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise::config::AppConfig;
use mealwise::errors::{AppError, AppResult};
use mealwise::services::RecommendationEngine;
use tracing::info;

use super::ProfileArgs;
use crate::helpers::display;
use crate::helpers::output::{self, OutputFormat};

pub async fn run(
    mut config: AppConfig,
    profile: &ProfileArgs,
    days: Option<u8>,
    format: OutputFormat,
) -> AppResult<()> {
    if let Some(days) = days {
        config.planner.selection.plan_days = days;
        config.planner.validate().map_err(AppError::from)?;
    }

    let engine = RecommendationEngine::from_config(config)?;
    info!(items = engine.catalog().len(), "Planning with catalog");

    let result = engine.generate_plan(&profile.to_profile()).await?;

    match format {
        OutputFormat::Json => output::print_json(&result),
        OutputFormat::Text => {
            display::display_plan(&result);
            Ok(())
        }
    }
}
