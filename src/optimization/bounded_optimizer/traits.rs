//! Public surface of the bounded scalar minimizer.
//!
//! - [`ScalarObjective`]: trait implemented by the quantity to minimize.
//! - [`BoundedOptions`]: Brent tolerances and iteration cap.
//! - [`BoundedOutcome`]: normalized result of [`super::minimize_bounded`].
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{FnEvalMap, traits::describe_termination, validation::validate_value},
};
use argmin::core::TerminationStatus;

/// Scalar objective `g(x)` minimized over an interval.
///
/// Return `NaN` only for a genuine failure; it is reported as
/// [`OptError::NanObjective`].
pub trait ScalarObjective {
    type Data;

    fn value(&self, x: f64, data: &Self::Data) -> OptResult<f64>;
}

/// Brent configuration.
///
/// The search stops once the bracket around the minimizer is narrower than
/// `2·(tol_rel·|x| + tol_abs)`.
///
/// Default:
/// - `tol_rel`: `√ε` (≈ 1.49e-8)
/// - `tol_abs`: `1e-10`
/// - `max_iter`: `500`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedOptions {
    pub tol_rel: f64,
    pub tol_abs: f64,
    pub max_iter: usize,
}

impl BoundedOptions {
    /// Construct validated Brent options.
    ///
    /// # Errors
    /// - [`OptError::InvalidBracketTol`] if a tolerance is non-finite or ≤ 0.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol_rel: f64, tol_abs: f64, max_iter: usize) -> OptResult<Self> {
        for tol in [tol_rel, tol_abs] {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(OptError::InvalidBracketTol {
                    tol,
                    reason: "Tolerance must be finite and positive.",
                });
            }
        }
        if max_iter == 0 {
            return Err(OptError::InvalidMaxIter {
                max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        Ok(Self { tol_rel, tol_abs, max_iter })
    }
}

impl Default for BoundedOptions {
    fn default() -> Self {
        Self { tol_rel: f64::EPSILON.sqrt(), tol_abs: 1e-10, max_iter: 500 }
    }
}

/// Result of a bounded minimization.
///
/// - `x_hat`: best point found inside the bracket.
/// - `value`: objective at `x_hat`.
/// - `converged`, `status`, `iterations`, `fn_evals`: as for
///   [`crate::optimization::loglik_optimizer::OptimOutcome`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedOutcome {
    pub x_hat: f64,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl BoundedOutcome {
    /// Build a validated [`BoundedOutcome`] from raw solver state.
    ///
    /// # Errors
    /// - [`OptError::MissingThetaHat`] if the solver produced no best point.
    /// - [`OptError::NonFiniteCost`] if the best value is not finite.
    pub fn new(
        x_hat: Option<f64>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let x_hat = x_hat.ok_or(OptError::MissingThetaHat)?;
        validate_value(value)?;
        let (converged, status) = describe_termination(&termination);
        Ok(Self { x_hat, value, converged, status, iterations: iterations as usize, fn_evals })
    }
}
