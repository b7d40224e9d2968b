// ABOUTME: Helper modules for mealwise-cli
// ABOUTME: Text display and JSON output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

pub mod display;
pub mod output;
