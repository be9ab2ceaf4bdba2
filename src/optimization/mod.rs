//! optimization — numerical optimizers behind the Vasicek estimators.
//!
//! Purpose
//! -------
//! Provide the two solver layers the estimators need, on top of Argmin:
//! a derivative-free simplex maximizer for log-likelihoods
//! (`loglik_optimizer`) and a bounded Brent minimizer for scalar objectives
//! (`bounded_optimizer`). Both share one error surface (`errors::OptError`).
//!
//! Key behaviors
//! -------------
//! - `loglik_optimizer::maximize` runs Nelder–Mead on `-ℓ(θ)` from a caller
//!   supplied start, with a relative initial simplex.
//! - `bounded_optimizer::minimize_bounded` runs Brent's method on `g(x)` over
//!   a finite interval.
//! - Configuration issues, objective failures, and Argmin runtime errors are
//!   normalized into `OptError` with the alias `OptResult<T>`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters are plain `Vec<f64>` (simplex) or `f64` (Brent); domain
//!   restrictions are expressed by the objective itself (`ℓ = -∞` outside
//!   the domain), not by parameter transforms.
//! - Neither solver treats "iteration cap reached" as an error: the best
//!   point is returned with `converged = false` and a `tracing` warning.
//!
//! Conventions
//! -----------
//! - User-facing outcomes are expressed in terms of the caller's objective
//!   (`ℓ` for the maximizer, `g` for the minimizer), never the internal
//!   Argmin cost.
//! - Progress logging goes through `tracing`; the optional `obs_slog` feature
//!   additionally attaches Argmin's slog observer to verbose simplex runs.
//!
//! Downstream usage
//! ----------------
//! - `estimation::mle` implements `LogLikelihood` and calls `maximize`.
//! - `estimation::moments::dmm` implements `ScalarObjective` and calls
//!   `minimize_bounded` on `ρ ∈ [0, 1]`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests on toy objectives (bowls, parabolas,
//!   kinked targets) plus configuration validation.
//! - `errors` tests cover the round trip through `argmin::core::Error`.

pub mod bounded_optimizer;
pub mod errors;
pub mod loglik_optimizer;

pub mod prelude {
    pub use super::bounded_optimizer::{BoundedOptions, BoundedOutcome, ScalarObjective, minimize_bounded};
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
}
