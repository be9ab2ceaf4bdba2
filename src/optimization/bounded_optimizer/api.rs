//! Entry point for bounded scalar minimization with Brent's method.
use crate::optimization::{
    bounded_optimizer::{BoundedOptions, BoundedOutcome, ScalarObjective, adapter::ScalarAdapter},
    errors::{OptError, OptResult},
};
use argmin::{
    core::{Executor, State},
    solver::brent::BrentOpt,
};

/// Minimize `g(x)` over `[lower, upper]`.
///
/// # Behavior
/// - Runs Argmin's [`BrentOpt`] with `opts.tol_rel` / `opts.tol_abs` as the
///   relative and absolute bracket tolerances.
/// - Stops after `opts.max_iter` iterations at the latest; a capped run is
///   returned with `converged = false` and logged at `warn`.
///
/// # Errors
/// - [`OptError::InvalidBounds`] if a bound is non-finite or `lower >= upper`.
/// - Propagates objective errors and Argmin runtime errors.
pub fn minimize_bounded<G: ScalarObjective>(
    g: &G, data: &G::Data, lower: f64, upper: f64, opts: &BoundedOptions,
) -> OptResult<BoundedOutcome> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(OptError::InvalidBounds { lower, upper, reason: "Bounds must be finite." });
    }
    if lower >= upper {
        return Err(OptError::InvalidBounds {
            lower,
            upper,
            reason: "Lower bound must be strictly below the upper bound.",
        });
    }

    let solver = BrentOpt::new(lower, upper).set_tolerance(opts.tol_rel, opts.tol_abs);
    let mut result = Executor::new(ScalarAdapter::new(g, data), solver)
        .configure(|state| state.max_iters(opts.max_iter as u64))
        .run()?
        .state()
        .clone();

    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let outcome = BoundedOutcome::new(
        result.take_best_param(),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
    )?;

    if outcome.converged {
        tracing::debug!(iterations = outcome.iterations, x_hat = outcome.x_hat, "brent converged");
    } else {
        tracing::warn!(
            iterations = outcome.iterations,
            status = %outcome.status,
            "brent stopped without converging; returning best point"
        );
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Kink;

    impl ScalarObjective for Kink {
        type Data = f64;

        fn value(&self, x: f64, target: &f64) -> OptResult<f64> {
            Ok((x * x - target).abs())
        }
    }

    struct Parabola;

    impl ScalarObjective for Parabola {
        type Data = ();

        fn value(&self, x: f64, _: &()) -> OptResult<f64> {
            Ok((x - 0.37).powi(2) + 1.0)
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify Brent locates the minimizer of a smooth parabola.
    //
    // Given
    // -----
    // - g(x) = (x - 0.37)² + 1 on [0, 1], default options.
    //
    // Expect
    // ------
    // - x̂ ≈ 0.37, g(x̂) ≈ 1, converged.
    fn minimize_bounded_finds_parabola_vertex() {
        // Act
        let out = minimize_bounded(&Parabola, &(), 0.0, 1.0, &BoundedOptions::default())
            .expect("brent should succeed");

        // Assert
        assert!(out.converged, "status: {}", out.status);
        assert!((out.x_hat - 0.37).abs() < 1e-6, "x̂ = {}", out.x_hat);
        assert!((out.value - 1.0).abs() < 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Verify Brent handles a non-smooth absolute-deviation objective.
    //
    // Given
    // -----
    // - g(x) = |x² - 0.25| on [0, 1].
    //
    // Expect
    // ------
    // - x̂ ≈ 0.5.
    fn minimize_bounded_handles_kinked_objective() {
        // Act
        let out = minimize_bounded(&Kink, &0.25, 0.0, 1.0, &BoundedOptions::default())
            .expect("brent should succeed");

        // Assert
        assert!((out.x_hat - 0.5).abs() < 1e-6, "x̂ = {}", out.x_hat);
        assert!(out.value < 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // Ensure reversed or non-finite brackets are rejected.
    //
    // Given
    // -----
    // - [1, 0] and [0, ∞).
    //
    // Expect
    // ------
    // - `OptError::InvalidBounds` in both cases.
    fn minimize_bounded_rejects_invalid_bracket() {
        let opts = BoundedOptions::default();
        assert!(matches!(
            minimize_bounded(&Parabola, &(), 1.0, 0.0, &opts),
            Err(OptError::InvalidBounds { .. })
        ));
        assert!(matches!(
            minimize_bounded(&Parabola, &(), 0.0, f64::INFINITY, &opts),
            Err(OptError::InvalidBounds { .. })
        ));
    }
}
