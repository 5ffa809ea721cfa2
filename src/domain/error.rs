//! Validation errors for caller-supplied numeric input.
//!
//! The profit engine itself never fails; these errors come from the thin
//! validation layer in [`crate::domain::input`] that decides whether a
//! computation should run at all.

use thiserror::Error;

/// Errors raised when a required numeric input is unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// The value was absent, or zero (zero is treated as absent).
    #[error("{field} is required and must be non-zero")]
    Missing {
        /// Name of the offending input.
        field: &'static str,
    },

    /// The value was NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
