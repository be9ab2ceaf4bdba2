//! estimation::mle — maximum-likelihood estimation of `(ρ, p)`.
//!
//! Purpose
//! -------
//! Fit the Vasicek distribution by maximizing the log-likelihood of the
//! filtered sample with the derivative-free simplex from
//! `optimization::loglik_optimizer`.
//!
//! Key behaviors
//! -------------
//! - The sample is filtered to `(0, 1)` and mapped once to probits
//!   `zᵢ = Φ⁻¹(xᵢ)`; the likelihood is evaluated on the `zᵢ`.
//! - `ℓ(ρ, p) = Σ [½·ln((1 − ρ)/ρ) − (√(1 − ρ)·zᵢ − c)²/(2ρ) + zᵢ²/2]`
//!   with `c = Φ⁻¹(p)`, and `ℓ = −∞` outside `(0, 1)²`.
//! - The simplex starts at `(ρ, p) = (0.1, x̄)`.
//! - Non-convergence is not an error: the best vertex is returned and the
//!   optimizer logs a warning.
//!
//! Invariants & assumptions
//! ------------------------
//! - At least two distinct observations are required; with a single value
//!   the likelihood is unbounded as `ρ → 0`.

use crate::{
    distribution::{VskError, VskResult, normal::norm_ppf, vasicek::ln_pdf_probit},
    estimation::types::{Estimate, MleFit},
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{LogLikelihood, MLEOptions, Theta, maximize},
    },
    utils::{SampleDomain, mean},
};

/// Starting correlation for the simplex.
const RHO_START: f64 = 0.1;

/// Vasicek log-likelihood over a probit-transformed sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct VasicekLikelihood;

impl LogLikelihood for VasicekLikelihood {
    type Data = Vec<f64>;

    fn value(&self, theta: &Theta, z: &Vec<f64>) -> OptResult<f64> {
        let (rho, p) = (theta[0], theta[1]);
        if !(rho > 0.0 && rho < 1.0 && p > 0.0 && p < 1.0) {
            return Ok(f64::NEG_INFINITY);
        }
        let c = norm_ppf(p);
        Ok(z.iter().map(|&zi| ln_pdf_probit(zi, rho, c)).sum())
    }

    fn check(&self, theta: &Theta, _: &Vec<f64>) -> OptResult<()> {
        if theta.len() != 2 {
            return Err(OptError::ThetaLengthMismatch { expected: 2, actual: theta.len() });
        }
        Ok(())
    }
}

/// Maximum-likelihood estimate with default simplex options.
///
/// # Errors
/// - [`VskError::EmptySample`] if nothing survives filtering.
/// - [`VskError::DegenerateSample`] if all observations are equal.
/// - [`VskError::Optimization`] on a solver failure.
pub fn mle(x: &[f64]) -> VskResult<Estimate> {
    Ok(mle_with_options(x, &MLEOptions::default())?.estimate)
}

/// Maximum-likelihood estimate with explicit simplex options, returning
/// the optimizer diagnostics alongside the rounded estimate.
///
/// # Errors
/// As for [`mle`].
pub fn mle_with_options(x: &[f64], opts: &MLEOptions) -> VskResult<MleFit> {
    let sample = SampleDomain::Open.filter_nonempty(x)?;
    if sample.iter().all(|&v| v == sample[0]) {
        return Err(VskError::DegenerateSample {
            reason: "maximum likelihood needs at least two distinct observations",
        });
    }
    let z: Vec<f64> = sample.iter().map(|&v| norm_ppf(v)).collect();
    let theta0 = vec![RHO_START, mean(&sample)];

    let outcome = maximize(&VasicekLikelihood, theta0, &z, opts)?;
    let estimate = Estimate::rounded(outcome.theta_hat[0], outcome.theta_hat[1]);
    tracing::debug!(
        n = sample.len(),
        rho = estimate.rho,
        p = estimate.p,
        loglik = outcome.value,
        converged = outcome.converged,
        "mle fit"
    );
    Ok(MleFit { estimate, outcome })
}
