//! loglik_optimizer — derivative-free, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)`. Callers implement a single trait,
//! [`LogLikelihood`], and invoke [`maximize`] to run a Nelder–Mead simplex
//! with configurable stopping rules and initial-simplex geometry.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates the initial guess with [`LogLikelihood::check`],
//!   - builds the initial simplex via [`builders`],
//!   - executes the solver via [`run::run_simplex`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Centralize optimizer configuration ([`Tolerances`], [`MLEOptions`]) and
//!   validation logic ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** a log-likelihood `ℓ(θ)` by minimizing
//!   a cost `c(θ) = -ℓ(θ)`; user code implements `ℓ(θ)`, never the cost.
//! - `ℓ(θ) = -∞` marks θ outside the parameter space; `NaN` is an error.
//! - `ℓ(θ₀)` must be finite, so the simplex always contains a finite vertex.
//! - Non-convergence within `max_iter` is reported on the outcome, never as
//!   an error: the best vertex is always returned.
//!
//! Downstream usage
//! ----------------
//! - The Vasicek maximum-likelihood estimator implements [`LogLikelihood`]
//!   over the probit-transformed sample and calls [`maximize`] from
//!   `(ρ, p) = (0.1, x̄)`.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover sign conventions in [`adapter`], simplex
//!   geometry in [`builders`], configuration invariants in [`traits`], and
//!   end-to-end behavior of [`maximize`] on toy log-likelihoods.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, FnEvalMap, Simplex, Theta};

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Theta};
}
