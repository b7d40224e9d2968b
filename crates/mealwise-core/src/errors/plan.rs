// ABOUTME: Errors raised by the planning pipeline (health calculator and meal selector)
// ABOUTME: InvalidProfile for out-of-range biometrics, InsufficientCatalog for unplannable catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use thiserror::Error;

/// Errors surfaced to the caller of a planning request.
///
/// Neither variant is retried: an invalid profile needs correcting by the user
/// and an insufficient catalog needs more food data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A biometric input is non-positive or outside plausible human range
    #[error("Invalid profile field '{field}': {reason}")]
    InvalidProfile {
        /// Name of the offending profile field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The catalog, after dietary filtering, cannot produce a plan
    #[error("Insufficient food catalog for {preference} plan: {reason}")]
    InsufficientCatalog {
        /// Dietary preference the plan was built for
        preference: String,
        /// What could not be satisfied
        reason: String,
    },
}

impl PlanError {
    /// Create an invalid profile error
    #[must_use]
    pub fn invalid_profile(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }

    /// Create an insufficient catalog error
    #[must_use]
    pub fn insufficient_catalog(preference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InsufficientCatalog {
            preference: preference.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is caused by the user's profile input
    #[must_use]
    pub const fn is_invalid_profile(&self) -> bool {
        matches!(self, Self::InvalidProfile { .. })
    }

    /// Whether this error is caused by the food catalog
    #[must_use]
    pub const fn is_insufficient_catalog(&self) -> bool {
        matches!(self, Self::InsufficientCatalog { .. })
    }
}
