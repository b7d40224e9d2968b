// ABOUTME: Errors raised while loading the food catalog at startup
// ABOUTME: Malformed rows fail fast here instead of leaking into plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Food catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read
    #[error("Failed to read food catalog {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The CSV reader rejected the input
    #[error("Food catalog is not valid CSV: {0}")]
    Csv(String),

    /// A required column is not present in the header row
    #[error("Food catalog is missing required column '{column}'")]
    MissingColumn {
        /// Canonical name of the missing column
        column: &'static str,
    },

    /// A data row could not be turned into a food item
    #[error("Malformed food catalog row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the source file (header is line 1)
        line: u64,
        /// Description of the problem
        reason: String,
    },
}

impl CatalogError {
    /// Create a malformed row error
    #[must_use]
    pub fn malformed_row(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
