// ABOUTME: Mealwise CLI - compute targets, build weekly meal plans and inspect the catalog
// ABOUTME: Renders results as human-readable text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors
//!
//! Usage:
//! ```bash
//! # Weekly vegetarian maintenance plan
//! mealwise-cli plan --age 30 --height 175 --weight 70 --gender male \
//!     --activity moderately_active --diet veg --goal maintenance
//!
//! # Same plan as JSON, without calling an LLM
//! mealwise-cli --format json --llm none plan --age 30 --height 175 --weight 70 \
//!     --gender male --activity moderate --diet veg --goal maintain
//!
//! # Only the metabolic targets
//! mealwise-cli targets --age 45 --height 160 --weight 82 --gender female \
//!     --activity sedentary --diet non-veg --goal weight_loss
//!
//! # Catalog statistics
//! mealwise-cli --catalog data/food_catalog.csv catalog
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mealwise::config::{AppConfig, LlmProviderType};
use mealwise::errors::{AppError, AppResult};
use mealwise::logging::LoggingConfig;
use tracing::debug;

use commands::ProfileArgs;
use helpers::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "mealwise-cli",
    version,
    about = "Mealwise meal planner",
    long_about = "Compute calorie and macro targets, build a weekly meal plan from a food catalog, and summarize it."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Food catalog CSV (overrides MEALWISE_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// LLM provider for insights: gemini, groq, local or none (overrides MEALWISE_LLM_PROVIDER)
    #[arg(long, global = true)]
    llm: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build a meal plan with targets and a coaching summary
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Number of days to plan (overrides MEALWISE_PLAN_DAYS)
        #[arg(long)]
        days: Option<u8>,
    },

    /// Show BMI, BMR, TDEE and daily macro targets
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Summarize the food catalog
    Catalog,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let mut config = AppConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config = config.with_catalog_path(path);
    }
    if let Some(llm) = cli.llm.as_deref() {
        config = config.with_llm_provider(LlmProviderType::from_str_or_default(llm));
    }
    debug!(?config, "CLI configuration resolved");

    match cli.command {
        Command::Plan { profile, days } => {
            commands::plan::run(config, &profile, days, cli.format).await?;
        }
        Command::Targets { profile } => {
            commands::targets::run(&config, &profile, cli.format)?;
        }
        Command::Catalog => {
            commands::catalog::run(&config, cli.format)?;
        }
    }

    Ok(())
}
