// ABOUTME: `catalog` subcommand: loads the food catalog and prints its summary
// ABOUTME: Useful for checking a custom CSV before planning with it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise::catalog::FoodCatalog;
use mealwise::config::AppConfig;
use mealwise::errors::AppResult;

use crate::helpers::display;
use crate::helpers::output::{self, OutputFormat};

pub fn run(config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    let catalog = FoodCatalog::load_from_path(&config.catalog_path)?;
    let summary = catalog.summary();

    match format {
        OutputFormat::Json => output::print_json(&summary),
        OutputFormat::Text => {
            display::display_catalog_summary(&config.catalog_path, &summary);
            Ok(())
        }
    }
}
