//! statistical_tests::errors — error surface for goodness-of-fit tests.
//!
//! Purpose
//! -------
//! Provide [`GofError`] and the alias [`GofResult`] for the chi-square and
//! Kolmogorov–Smirnov goodness-of-fit routines, wrapping distribution-level
//! failures ([`VskError`]) instead of flattening them.
//!
//! Conventions
//! -----------
//! - Messages state the violated constraint with the offending values
//!   (e.g. "2 ≤ groups ≤ n").
//! - At the Python boundary every variant maps to `ValueError` with the
//!   `Display` message.
//!
//! Testing notes
//! -------------
//! - Unit tests check payload embedding in `Display` and the `From`
//!   conversion from [`VskError`]. The PyO3 conversion is left to
//!   Python-level tests.

use crate::distribution::VskError;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type GofResult<T> = Result<T, GofError>;

/// Failures raised by the goodness-of-fit tests.
///
/// Variants
/// --------
/// - `InsufficientData { needed, got }`: too few valid observations after
///   filtering.
/// - `InvalidGroupCount { groups, n_obs }`: the chi-square group count is
///   outside `2 ≤ groups ≤ n_obs`.
/// - `InvalidDegreesOfFreedom { df }`: the χ² reference distribution could
///   not be built.
/// - `Distribution(VskError)`: parameter validation or filtering failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GofError {
    #[error("Insufficient data: need at least {needed} valid observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Invalid group count {groups}: must satisfy 2 ≤ groups ≤ n ({n_obs})")]
    InvalidGroupCount { groups: usize, n_obs: usize },

    #[error("Invalid degrees of freedom {df} for the chi-square distribution")]
    InvalidDegreesOfFreedom { df: f64 },

    #[error(transparent)]
    Distribution(#[from] VskError),
}

#[cfg(feature = "python-bindings")]
impl From<GofError> for PyErr {
    fn from(err: GofError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidGroupCount` embeds both the group count and the
    // sample size in its message.
    //
    // Given
    // -----
    // - `InvalidGroupCount { groups: 12, n_obs: 7 }`.
    //
    // Expect
    // ------
    // - The message contains "12" and "7".
    fn invalid_group_count_includes_payload_in_display() {
        // Arrange
        let err = GofError::InvalidGroupCount { groups: 12, n_obs: 7 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("12") && msg.contains('7'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Distribution errors convert with `?` and keep their message.
    //
    // Given
    // -----
    // - `VskError::InvalidRho { value: 2.0 }`.
    //
    // Expect
    // ------
    // - `GofError::Distribution(..)` with the same `Display` text.
    fn distribution_errors_are_wrapped_transparently() {
        // Arrange
        let inner = VskError::InvalidRho { value: 2.0 };

        // Act
        let err: GofError = inner.clone().into();

        // Assert
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, GofError::Distribution(inner));
    }
}
