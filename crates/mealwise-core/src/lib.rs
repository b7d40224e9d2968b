// ABOUTME: Core types and constants for the Mealwise meal planning workspace
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Core
//!
//! Foundation crate providing shared types and constants for the Mealwise
//! planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the planning errors
//! - **constants**: Energy conversion factors, physiological bounds, environment variable names
//! - **models**: User profile, food item, macro targets, meal plan and insight types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `FoodItem`, `MealPlan`, etc.)
pub mod models;
