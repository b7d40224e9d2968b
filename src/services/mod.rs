// ABOUTME: Domain service layer that composes catalog, calculator, selector and insights
// ABOUTME: Entry points shared by the CLI and library callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Domain service layer

/// End-to-end plan generation
pub mod recommendation_engine;

pub use recommendation_engine::RecommendationEngine;
