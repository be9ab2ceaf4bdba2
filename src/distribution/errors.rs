//! distribution::errors — error surface for the Vasicek model layer.
//!
//! Purpose
//! -------
//! Provide [`VskError`] and the alias [`VskResult`] for everything that
//! touches the Vasicek model directly: parameter validation, sample
//! filtering, the pointwise functions, and the estimators. Optimizer
//! failures are wrapped rather than flattened so the underlying
//! [`OptError`] stays inspectable.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of the domain constraint that failed
//!   (`rho ∈ [0, 1)`, `p ∈ (0, 1)`), with the offending value embedded.
//! - At the Python boundary every variant becomes a `ValueError` carrying
//!   the `Display` message.

use crate::optimization::errors::OptError;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type VskResult<T> = Result<T, VskError>;

/// Failures raised by the Vasicek distribution and its estimators.
///
/// Variants
/// --------
/// - `InvalidRho { value }`: correlation outside `[0, 1)` or non-finite.
/// - `InvalidP { value }`: mean probability outside `(0, 1)` or non-finite.
/// - `EmptySample`: no observation survived filtering.
/// - `DegenerateSample { reason }`: the sample cannot identify the
///   parameters (e.g. zero spread for a moment estimator).
/// - `UnknownMethod { name }`: estimator name not recognized.
/// - `Optimization(OptError)`: the underlying solver failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VskError {
    #[error("Invalid rho {value}: must be finite and satisfy 0 ≤ rho < 1")]
    InvalidRho { value: f64 },

    #[error("Invalid p {value}: must be finite and satisfy 0 < p < 1")]
    InvalidP { value: f64 },

    #[error("No valid observations left after filtering")]
    EmptySample,

    #[error("Degenerate sample: {reason}")]
    DegenerateSample { reason: &'static str },

    #[error("Unknown estimation method '{name}': expected one of mle, imm, dmm, qbe")]
    UnknownMethod { name: String },

    #[error("Optimization failed: {0}")]
    Optimization(#[from] OptError),
}

#[cfg(feature = "python-bindings")]
impl From<VskError> for PyErr {
    fn from(err: VskError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
