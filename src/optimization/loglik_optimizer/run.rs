//! Execution helper that runs the Nelder–Mead solver on a log-likelihood
//! problem and returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{LogLikelihood, MLEOptions, OptimOutcome, Simplex, adapter::ArgMinAdapter},
};
use argmin::core::{Executor, State};

/// Run the simplex on a log-likelihood problem.
///
/// Wires up:
/// - the user model via [`ArgMinAdapter`],
/// - the prepared [`Simplex`] (which already owns its initial vertices),
/// - optional observers (behind the `obs_slog` feature),
/// - optional `max_iter`,
///
/// then executes the solver and converts the final state into [`OptimOutcome`].
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always`.
///
/// # Returns
/// An [`OptimOutcome`] containing the best vertex found, the best
/// log-likelihood value ℓ(θ̂), termination status, iteration count, and
/// function-evaluation counts. Stopping at `max_iter` is not an error; it is
/// reported through `converged = false` and a `tracing` warning.
///
/// # Errors
/// - Propagates any `argmin` runtime error (including objective errors
///   raised by the adapter) via `From<argmin::core::Error>`.
/// - Propagates validation errors raised while building [`OptimOutcome`].
pub fn run_simplex<F>(
    opts: &MLEOptions, problem: ArgMinAdapter<'_, F>, solver: Simplex,
) -> OptResult<OptimOutcome>
where
    F: LogLikelihood,
{
    let mut optimizer = Executor::new(problem, solver);
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let outcome = OptimOutcome::new(
        result.take_best_param(),
        -result.get_best_cost(),
        termination,
        iterations,
        function_counts,
    )?;

    if outcome.converged {
        tracing::debug!(
            iterations = outcome.iterations,
            loglik = outcome.value,
            "simplex converged"
        );
    } else {
        tracing::warn!(
            iterations = outcome.iterations,
            status = %outcome.status,
            "simplex stopped without converging; returning best vertex"
        );
    }
    Ok(outcome)
}
