//! Public API surface for log-likelihood maximization.
//!
//! - [`LogLikelihood`]: trait users implement for their model.
//! - [`MLEOptions`] and [`Tolerances`]: configuration for the simplex optimizer.
//! - [`OptimOutcome`]: normalized result returned by the high-level `maximize` API.
//!
//! Convention: we *maximize* a user log-likelihood `ℓ(θ)` by minimizing the cost
//! `c(θ) = -ℓ(θ)`. The simplex method is derivative-free, so no gradient is
//! ever requested from the model.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Cost, FnEvalMap, Theta,
        validation::{validate_theta_hat, validate_value, verify_simplex_step, verify_tol_cost},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};

/// User-implemented log-likelihood interface.
///
/// You maximize `ℓ(θ)`; internally we minimize the cost `c(θ) = -ℓ(θ)`.
///
/// - `type Data`: per-model data carried into `value`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `ℓ(θ)`.
///   Return `f64::NEG_INFINITY` for `θ` outside the parameter space; the
///   simplex then treats that vertex as infinitely bad. `NaN` is an error.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
pub trait LogLikelihood {
    type Data;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;
}

/// Optimizer-level configuration for the Nelder–Mead simplex.
///
/// Fields:
/// - `tols: Tolerances` — stopping rules.
/// - `initial_step: f64` — relative perturbation applied to each non-zero
///   coordinate of `θ₀` to build the initial simplex.
/// - `zero_step: f64` — absolute perturbation used for zero coordinates.
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
///
/// Default:
/// - `tols`: `tol_cost = 1e-10`, `max_iter = 1000`
/// - `initial_step`: `0.05`
/// - `zero_step`: `0.00025`
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub initial_step: f64,
    pub zero_step: f64,
    pub verbose: bool,
}

impl MLEOptions {
    /// Create a new set of optimizer options.
    ///
    /// # Errors
    /// - [`OptError::InvalidSimplexStep`] if either step is non-finite or ≤ 0.
    pub fn new(
        tols: Tolerances, initial_step: f64, zero_step: f64, verbose: bool,
    ) -> OptResult<Self> {
        verify_simplex_step(initial_step)?;
        verify_simplex_step(zero_step)?;
        Ok(Self { tols, initial_step, zero_step, verbose })
    }
}

impl Default for MLEOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances { tol_cost: Some(1e-10), max_iter: Some(1000) },
            initial_step: 0.05,
            zero_step: 0.00025,
            verbose: false,
        }
    }
}

/// Stopping rules for the simplex.
///
/// - `tol_cost`: terminate when the standard deviation of the cost over the
///   simplex vertices falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Either field can be `None` but **at least one** must be provided
/// (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_cost` or `max_iter` must be `Some`.
    /// - If provided, `tol_cost` must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if both are `None`.
    /// - [`OptError::InvalidTolCost`] for a non-finite or non-positive tolerance.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol_cost: Option<f64>, max_iter: Option<usize>) -> OptResult<Self> {
        if tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_cost, max_iter })
    }
}

/// Canonical result returned by `maximize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best **log-likelihood** value `ℓ(θ)` (not the cost).
/// - `converged`: `true` only if the solver met its own convergence rule;
///   hitting `max_iter` leaves this `false`.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus,
        iterations: u64, fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = describe_termination(&termination);
        Ok(Self { theta_hat, value, converged, status, iterations: iterations as usize, fn_evals })
    }
}

/// Map an argmin termination status into `(converged, status)`.
pub(crate) fn describe_termination(termination: &TerminationStatus) -> (bool, String) {
    match termination {
        TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
        TerminationStatus::Terminated(reason) => {
            let converged = matches!(
                reason,
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            );
            (converged, format!("{reason:?}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Ensure `Tolerances::new` rejects a configuration with no stopping rule.
    //
    // Given
    // -----
    // - `tol_cost = None`, `max_iter = None`.
    //
    // Expect
    // ------
    // - `Err(OptError::NoTolerancesProvided)`.
    fn tolerances_require_at_least_one_rule() {
        // Act
        let result = Tolerances::new(None, None);

        // Assert
        assert_eq!(result, Err(OptError::NoTolerancesProvided));
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-positive cost tolerances and zero iteration caps are rejected.
    //
    // Given
    // -----
    // - `tol_cost = -1.0`; separately `max_iter = 0`.
    //
    // Expect
    // ------
    // - `InvalidTolCost` and `InvalidMaxIter` respectively.
    fn tolerances_reject_invalid_values() {
        // Act
        let bad_tol = Tolerances::new(Some(-1.0), None);
        let bad_iter = Tolerances::new(None, Some(0));

        // Assert
        assert!(matches!(bad_tol, Err(OptError::InvalidTolCost { .. })));
        assert!(matches!(bad_iter, Err(OptError::InvalidMaxIter { max_iter: 0, .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify `MLEOptions::new` validates simplex steps and that the default
    // configuration is itself valid.
    //
    // Given
    // -----
    // - `initial_step = 0.0` (invalid) and the default options.
    //
    // Expect
    // ------
    // - The zero step is rejected; rebuilding the defaults succeeds.
    fn mle_options_validate_steps() {
        // Arrange
        let defaults = MLEOptions::default();

        // Act
        let bad = MLEOptions::new(defaults.tols, 0.0, defaults.zero_step, false);
        let rebuilt =
            MLEOptions::new(defaults.tols, defaults.initial_step, defaults.zero_step, false);

        // Assert
        assert!(matches!(bad, Err(OptError::InvalidSimplexStep { .. })));
        assert_eq!(rebuilt, Ok(defaults));
    }

    #[test]
    // Purpose
    // -------
    // Check that only genuine convergence sets `converged = true`.
    //
    // Given
    // -----
    // - `SolverConverged` and `MaxItersReached` terminations.
    //
    // Expect
    // ------
    // - The first is converged, the second is not.
    fn optim_outcome_distinguishes_convergence_from_iteration_cap() {
        // Arrange
        let converged = TerminationStatus::Terminated(TerminationReason::SolverConverged);
        let capped = TerminationStatus::Terminated(TerminationReason::MaxItersReached);

        // Act
        let ok = OptimOutcome::new(Some(vec![0.1]), -1.0, converged, 10, FnEvalMap::new())
            .expect("valid outcome");
        let cap = OptimOutcome::new(Some(vec![0.1]), -1.0, capped, 10, FnEvalMap::new())
            .expect("valid outcome");

        // Assert
        assert!(ok.converged);
        assert!(!cap.converged);
        assert_eq!(cap.status, "MaxItersReached");
    }

    #[test]
    // Purpose
    // -------
    // Ensure outcomes with a missing or non-finite optimum are rejected.
    //
    // Given
    // -----
    // - `theta_hat = None`; separately a NaN coordinate.
    //
    // Expect
    // ------
    // - `MissingThetaHat` and `InvalidThetaHat` respectively.
    fn optim_outcome_rejects_invalid_theta_hat() {
        // Arrange
        let status = TerminationStatus::NotTerminated;

        // Act
        let missing = OptimOutcome::new(None, 0.0, status.clone(), 0, FnEvalMap::new());
        let nan = OptimOutcome::new(Some(vec![f64::NAN]), 0.0, status, 0, FnEvalMap::new());

        // Assert
        assert_eq!(missing, Err(OptError::MissingThetaHat));
        assert!(matches!(nan, Err(OptError::InvalidThetaHat { index: 0, .. })));
    }
}
