//! loglik_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the numeric types used by the simplex log-likelihood
//! optimizer so the rest of the code stays agnostic to the concrete
//! container Argmin operates on.
//!
//! Conventions
//! -----------
//! - Parameter vectors are plain `Vec<f64>`; Argmin's `vec` math backend
//!   supplies the vertex arithmetic Nelder–Mead needs.
//! - `Cost` is always the minimized quantity `c(θ) = -ℓ(θ)`.
use argmin::solver::neldermead::NelderMead;
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
pub type Theta = Vec<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is the cost `c(θ) = -ℓ(θ)` derived from a
/// log-likelihood `ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Nelder–Mead solver specialized to this crate's numeric types.
pub type Simplex = NelderMead<Theta, Cost>;
