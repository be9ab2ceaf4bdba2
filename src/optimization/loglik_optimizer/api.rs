//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! This builds a Nelder–Mead simplex around the starting point, wraps the
//! model in an `ArgMinAdapter` (which *minimizes* `-ℓ(θ)`), and delegates the
//! run to `run_simplex`.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::build_simplex,
        run::run_simplex,
        traits::{LogLikelihood, MLEOptions},
        validation::validate_theta0,
    },
};

/// Maximize a log-likelihood `ℓ(θ)` with the derivative-free simplex method.
///
/// # Behavior
/// - Validates that `theta0` is non-empty and finite.
/// - Validates the initial guess via `f.check(theta0, data)` and requires a
///   finite `ℓ(θ₀)`, so the simplex always holds at least one finite vertex.
/// - Builds the initial simplex from `opts` and runs Nelder–Mead.
///
/// # Parameters
/// - `f`: Your model implementing [`LogLikelihood`].
/// - `theta0`: Initial parameter vector.
/// - `data`: Model data passed through to `value`/`check`.
/// - `opts`: Optimizer options (tolerances, simplex steps, verbosity).
///
/// # Errors
/// - [`OptError::EmptyTheta`] / [`OptError::InvalidThetaInput`] for a bad start.
/// - Propagates any error from `f.check` or `f.value`.
/// - [`OptError::NonFiniteCost`] if `ℓ(θ₀)` is not finite.
/// - Propagates runtime errors from `run_simplex`.
///
/// # Example
/// ```
/// use vasicek::optimization::errors::OptResult;
/// use vasicek::optimization::loglik_optimizer::{maximize, LogLikelihood, MLEOptions, Theta};
///
/// struct Quadratic;
/// impl LogLikelihood for Quadratic {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok(-(theta[0] - 1.0).powi(2) - (theta[1] + 2.0).powi(2))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let out = maximize(&Quadratic, vec![0.5, 0.5], &(), &MLEOptions::default())?;
/// assert!((out.theta_hat[0] - 1.0).abs() < 1e-3);
/// assert!((out.theta_hat[1] + 2.0).abs() < 1e-3);
/// # Ok::<(), vasicek::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    validate_theta0(&theta0)?;
    f.check(&theta0, data)?;
    let value0 = f.value(&theta0, data)?;
    if !value0.is_finite() {
        return Err(OptError::NonFiniteCost { value: value0 });
    }
    let problem = ArgMinAdapter::new(f, data);
    let solver = build_simplex(&theta0, opts)?;
    run_simplex(opts, problem, solver)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bowl;

    impl LogLikelihood for Bowl {
        type Data = (f64, f64);

        fn value(&self, theta: &Theta, centre: &(f64, f64)) -> OptResult<f64> {
            if theta[0] <= 0.0 {
                return Ok(f64::NEG_INFINITY);
            }
            Ok(-(theta[0] - centre.0).powi(2) - 3.0 * (theta[1] - centre.1).powi(2))
        }

        fn check(&self, theta: &Theta, _: &(f64, f64)) -> OptResult<()> {
            if theta.len() != 2 {
                return Err(OptError::EmptyTheta);
            }
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `maximize` finds the optimum of a concave bowl whose
    // domain is restricted to a half-plane.
    //
    // Given
    // -----
    // - ℓ(θ) = -(θ₀ - 0.2)² - 3(θ₁ - 0.7)² on θ₀ > 0, `-∞` elsewhere.
    // - θ₀ = [0.1, 0.3] and default options.
    //
    // Expect
    // ------
    // - θ̂ within 1e-4 of (0.2, 0.7), converged, ℓ(θ̂) ≈ 0.
    fn maximize_recovers_optimum_of_restricted_bowl() {
        // Act
        let out = maximize(&Bowl, vec![0.1, 0.3], &(0.2, 0.7), &MLEOptions::default())
            .expect("maximize should succeed");

        // Assert
        assert!(out.converged, "status: {}", out.status);
        assert!((out.theta_hat[0] - 0.2).abs() < 1e-4, "θ̂ = {:?}", out.theta_hat);
        assert!((out.theta_hat[1] - 0.7).abs() < 1e-4, "θ̂ = {:?}", out.theta_hat);
        assert!(out.value <= 0.0 && out.value > -1e-7);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a start outside the domain is rejected before the run.
    //
    // Given
    // -----
    // - θ₀ = [-1.0, 0.0], where ℓ = -∞.
    //
    // Expect
    // ------
    // - `Err(OptError::NonFiniteCost { .. })`.
    fn maximize_rejects_infeasible_start() {
        // Act
        let result = maximize(&Bowl, vec![-1.0, 0.0], &(0.2, 0.7), &MLEOptions::default());

        // Assert
        assert!(matches!(result, Err(OptError::NonFiniteCost { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Confirm that hitting the iteration cap is reported, not raised.
    //
    // Given
    // -----
    // - `max_iter = 2` and no cost tolerance.
    //
    // Expect
    // ------
    // - `Ok(outcome)` with `converged == false`.
    fn maximize_reports_iteration_cap_without_error() {
        // Arrange
        let opts = MLEOptions {
            tols: crate::optimization::loglik_optimizer::Tolerances::new(None, Some(2))
                .expect("valid tolerances"),
            ..MLEOptions::default()
        };

        // Act
        let out = maximize(&Bowl, vec![0.1, 0.3], &(0.2, 0.7), &opts).expect("capped run is Ok");

        // Assert
        assert!(!out.converged);
        assert_eq!(out.iterations, 2);
    }
}
