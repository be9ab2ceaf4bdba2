//! optimization::errors — unified error surface for the optimizer layer.
//!
//! Purpose
//! -------
//! Collect every failure the simplex maximizer and the bounded scalar
//! minimizer can report into one enum, [`OptError`], with the result alias
//! [`OptResult`]. Backend (`argmin`) errors are downcast into typed variants
//! so callers never see raw `argmin::core::Error` values.
//!
//! Conventions
//! -----------
//! - Configuration errors carry the offending value and a static reason.
//! - Objective errors are reserved for genuinely undefined values (`NaN`);
//!   an objective that is `±∞` outside its domain is *not* an error.

use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptError {
    // ---- Options ----
    /// Cost tolerance needs to be positive and finite.
    #[error("Invalid cost tolerance {tol}: {reason}")]
    InvalidTolCost { tol: f64, reason: &'static str },

    /// Maximum iterations needs to be positive.
    #[error("Invalid maximum iterations {max_iter}: {reason}")]
    InvalidMaxIter { max_iter: usize, reason: &'static str },

    /// At least one stopping rule must be provided.
    #[error("No tolerances provided")]
    NoTolerancesProvided,

    /// Simplex perturbations need to be positive and finite.
    #[error("Invalid simplex step {step}: {reason}")]
    InvalidSimplexStep { step: f64, reason: &'static str },

    /// Brent tolerances need to be positive and finite.
    #[error("Invalid bracket tolerance {tol}: {reason}")]
    InvalidBracketTol { tol: f64, reason: &'static str },

    /// Search interval must be finite with `lower < upper`.
    #[error("Invalid search bounds [{lower}, {upper}]: {reason}")]
    InvalidBounds { lower: f64, upper: f64, reason: &'static str },

    /// Starting point must be non-empty.
    #[error("Initial parameter vector is empty")]
    EmptyTheta,

    /// Starting point must be finite.
    #[error("Invalid initial parameter at index {index}: {value}, must be finite")]
    InvalidThetaInput { index: usize, value: f64 },

    /// Parameter vector has the wrong dimension for the objective.
    #[error("Parameter vector has length {actual}, expected {expected}")]
    ThetaLengthMismatch { expected: usize, actual: usize },

    // ---- Objective ----
    /// Objective returned `NaN`.
    #[error("Objective evaluated to NaN at {theta:?}")]
    NanObjective { theta: Vec<f64> },

    /// Objective returned a non-finite value where a finite one is required.
    #[error("Non-finite objective value: {value}")]
    NonFiniteCost { value: f64 },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    #[error("Invalid estimated parameter at index {index}: {value}: {reason}")]
    InvalidThetaHat { index: usize, value: f64, reason: &'static str },

    /// Best parameter is missing from the final solver state.
    #[error("Missing estimated parameters (theta hat)")]
    MissingThetaHat,

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    #[error("Invalid parameter: {text}")]
    InvalidParameter { text: String },
    /// Wrapper for argmin::NotImplemented
    #[error("Not implemented: {text}")]
    NotImplemented { text: String },
    /// Wrapper for argmin::NotInitialized
    #[error("Not initialized: {text}")]
    NotInitialized { text: String },
    /// Wrapper for argmin::ConditionViolated
    #[error("Condition violated: {text}")]
    ConditionViolated { text: String },
    /// Wrapper for argmin::CheckpointNotFound
    #[error("Checkpoint not found: {text}")]
    CheckPointNotFound { text: String },
    /// Wrapper for argmin::PotentialBug
    #[error("Potential bug: {text}")]
    PotentialBug { text: String },
    /// Wrapper for argmin::ImpossibleError
    #[error("Impossible error: {text}")]
    ImpossibleError { text: String },
    /// Wrapper for other argmin::Error types
    #[error("Backend error: {text}")]
    BackendError { text: String },

    // ---- Fallback ----
    #[error("Unknown error")]
    UnknownError,
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Our own errors travel through argmin boxed; recover them first.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that an `OptError` boxed into an argmin `Error` comes back as
    // the same variant rather than as an opaque backend error.
    //
    // Given
    // -----
    // - `OptError::NanObjective` converted into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - `OptError::from` returns the original variant.
    fn opt_error_round_trips_through_argmin_error() {
        // Arrange
        let original = OptError::NanObjective { theta: vec![0.1, 0.2] };
        let boxed: Error = original.clone().into();

        // Act
        let recovered = OptError::from(boxed);

        // Assert
        assert_eq!(recovered, original);
    }

    #[test]
    // Purpose
    // -------
    // Verify that typed argmin errors map to their dedicated variants.
    //
    // Given
    // -----
    // - `ArgminError::InvalidParameter` with a message.
    //
    // Expect
    // ------
    // - `OptError::InvalidParameter` carrying the same text.
    fn argmin_invalid_parameter_maps_to_typed_variant() {
        // Arrange
        let boxed: Error = ArgminError::InvalidParameter { text: "bad".to_string() }.into();

        // Act
        let err = OptError::from(boxed);

        // Assert
        assert_eq!(err, OptError::InvalidParameter { text: "bad".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // Check that `Display` messages embed the offending payload.
    //
    // Given
    // -----
    // - `OptError::InvalidBounds` with bounds (1, 0).
    //
    // Expect
    // ------
    // - The message mentions both bounds.
    fn invalid_bounds_display_includes_payload() {
        // Arrange
        let err = OptError::InvalidBounds { lower: 1.0, upper: 0.0, reason: "lower >= upper" };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("[1, 0]"), "Display should embed the bounds.\nGot: {msg}");
    }
}
