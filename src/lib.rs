// ABOUTME: Main library entry point for the Mealwise meal planner
// ABOUTME: Wires the catalog, planning core, LLM insights and configuration together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise
//!
//! Turns a user profile into daily calorie and macro targets, a week of
//! catalog meals that hit those targets, and a short coaching note.
//!
//! ## Architecture
//!
//! - **catalog**: CSV food catalog loaded once and shared read-only
//! - **intelligence**: health calculator and meal selector (from
//!   `mealwise-intelligence`) plus the LLM insight generator
//! - **llm**: provider trait with Gemini and `OpenAI`-compatible backends
//! - **services**: `RecommendationEngine`, the end-to-end pipeline
//! - **config** / **logging**: environment-driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mealwise::config::AppConfig;
//! use mealwise::errors::AppResult;
//! use mealwise::services::RecommendationEngine;
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let engine = RecommendationEngine::from_config(config)?;
//!     println!("Catalog has {} items", engine.catalog().len());
//!     Ok(())
//! }
//! ```

/// Unified error handling (re-exported from `mealwise-core`)
pub use mealwise_core::errors;

/// Application constants (re-exported from `mealwise-core`)
pub use mealwise_core::constants;

/// Domain models (re-exported from `mealwise-core`)
pub use mealwise_core::models;

/// Food catalog loading
pub mod catalog;

/// Environment configuration and provider selection
pub mod config;

/// Health calculation, meal selection and plan insights
pub mod intelligence;

/// LLM provider abstraction
pub mod llm;

/// Structured logging setup
pub mod logging;

/// End-to-end planning services
pub mod services;
