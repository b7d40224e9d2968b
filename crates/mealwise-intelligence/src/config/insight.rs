// ABOUTME: Insight generation configuration: LLM call timeout and sampling parameters
// ABOUTME: Consumed by the insight generator in the main crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// LLM insight configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Upper bound on the whole LLM call in seconds: 10
    pub timeout_secs: u64,
    /// Sampling temperature: 0.7
    pub temperature: f32,
    /// Maximum tokens in the reply: 256
    pub max_tokens: u32,
}

impl InsightConfig {
    /// Timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            temperature: 0.7,
            max_tokens: 256,
        }
    }
}
