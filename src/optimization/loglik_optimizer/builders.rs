//! loglik_optimizer::builders — construct Nelder–Mead solvers from options.
//!
//! Purpose
//! -------
//! Turn a starting point `θ₀` and validated [`MLEOptions`] into a ready-to-run
//! Argmin [`NelderMead`] solver. The initial simplex is built here so that
//! every caller perturbs `θ₀` the same way.
//!
//! Conventions
//! -----------
//! - The simplex has `d + 1` vertices for `d = θ₀.len()`: `θ₀` itself, then
//!   one vertex per coordinate with that coordinate scaled by
//!   `1 + initial_step` (or set to `zero_step` when it is exactly zero).
//! - `tol_cost`, when present, becomes Argmin's standard-deviation tolerance
//!   on vertex costs; otherwise Argmin's default applies.
//! - Errors are always reported via [`OptResult`]; the underlying
//!   `argmin::core::Error` values never leak directly across module
//!   boundaries.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{MLEOptions, Simplex, Theta},
};
use argmin::solver::neldermead::NelderMead;

/// Build the initial simplex around `theta0`.
///
/// # Returns
/// `theta0.len() + 1` vertices, starting with `theta0`.
pub fn initial_simplex(theta0: &Theta, opts: &MLEOptions) -> Vec<Theta> {
    let mut vertices = Vec::with_capacity(theta0.len() + 1);
    vertices.push(theta0.clone());
    for k in 0..theta0.len() {
        let mut vertex = theta0.clone();
        vertex[k] = if vertex[k] != 0.0 { (1.0 + opts.initial_step) * vertex[k] } else { opts.zero_step };
        vertices.push(vertex);
    }
    vertices
}

/// Build a Nelder–Mead solver for `theta0` under `opts`.
///
/// # Errors
/// Propagates Argmin's rejection of the standard-deviation tolerance.
pub fn build_simplex(theta0: &Theta, opts: &MLEOptions) -> OptResult<Simplex> {
    let solver = NelderMead::new(initial_simplex(theta0, opts));
    match opts.tols.tol_cost {
        Some(tol) => Ok(solver.with_sd_tolerance(tol)?),
        None => Ok(solver),
    }
}
