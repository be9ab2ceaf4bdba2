//! estimation::moments — moment-matching estimators.
//!
//! Purpose
//! -------
//! Closed-form and one-dimensional moment matching for `(ρ, p)`:
//!
//! - [`imm`] matches mean and variance on the probit scale. If
//!   `X ~ Vasicek(ρ, p)` then `Φ⁻¹(X) ~ N(c/√(1 − ρ), ρ/(1 − ρ))`, so with
//!   `µ = mean(z)` and `s² = var(z)` (population variance),
//!   `p = Φ(µ/√(1 + s²))` and `ρ = s²/(1 + s²)`.
//! - [`dmm`] matches the first two raw moments on the original scale:
//!   `p = x̄` and `ρ` solves `Φ₂(c, c; ρ) = mean(x²)`, found by Brent
//!   minimization of the absolute gap over `ρ ∈ [0, 1]`.
//!
//! Conventions
//! -----------
//! - Samples are filtered to `(0, 1)` first; estimates are rounded to 10
//!   decimals.
//! - A sample without spread yields `ρ = 0`, the point-mass limit.

use crate::{
    distribution::{VskResult, bivariate_normal_cdf, normal::norm_cdf, normal::norm_ppf},
    estimation::types::Estimate,
    optimization::{
        bounded_optimizer::{BoundedOptions, ScalarObjective, minimize_bounded},
        errors::OptResult,
    },
    utils::{SampleDomain, mean},
};

/// Map probit-scale location `µ` and variance `s²` to `(ρ, p)`.
pub(crate) fn from_probit_moments(mu: f64, s2: f64) -> Estimate {
    let s2 = s2.max(0.0);
    Estimate::rounded(s2 / (1.0 + s2), norm_cdf(mu / (1.0 + s2).sqrt()))
}

/// Indirect moment matching on `z = Φ⁻¹(x)`.
///
/// # Errors
/// [`VskError::EmptySample`](crate::distribution::VskError::EmptySample)
/// if nothing survives filtering.
pub fn imm(x: &[f64]) -> VskResult<Estimate> {
    let sample = SampleDomain::Open.filter_nonempty(x)?;
    let z: Vec<f64> = sample.iter().map(|&v| norm_ppf(v)).collect();
    let mu = mean(&z);
    let s2 = z.iter().map(|zi| zi * zi).sum::<f64>() / z.len() as f64 - mu * mu;
    let estimate = from_probit_moments(mu, s2);
    tracing::debug!(n = z.len(), rho = estimate.rho, p = estimate.p, "imm fit");
    Ok(estimate)
}

/// Targets for the direct moment match.
#[derive(Debug, Clone, Copy)]
pub struct MomentTargets {
    /// `c = Φ⁻¹(x̄)`.
    pub threshold: f64,
    /// `mean(x²)`.
    pub second_moment: f64,
}

/// `|Φ₂(c, c; ρ) − mean(x²)|` as a function of `ρ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondMomentGap;

impl ScalarObjective for SecondMomentGap {
    type Data = MomentTargets;

    fn value(&self, rho: f64, t: &MomentTargets) -> OptResult<f64> {
        Ok((bivariate_normal_cdf(t.threshold, t.threshold, rho) - t.second_moment).abs())
    }
}

/// Direct moment matching with default Brent options.
///
/// # Errors
/// - [`VskError::EmptySample`](crate::distribution::VskError::EmptySample)
///   if nothing survives filtering.
/// - [`VskError::Optimization`](crate::distribution::VskError::Optimization)
///   on a solver failure.
pub fn dmm(x: &[f64]) -> VskResult<Estimate> {
    dmm_with_options(x, &BoundedOptions::default())
}

/// Direct moment matching with explicit Brent options.
///
/// # Errors
/// As for [`dmm`].
pub fn dmm_with_options(x: &[f64], opts: &BoundedOptions) -> VskResult<Estimate> {
    let sample = SampleDomain::Open.filter_nonempty(x)?;
    let p = mean(&sample);
    let targets = MomentTargets {
        threshold: norm_ppf(p),
        second_moment: sample.iter().map(|v| v * v).sum::<f64>() / sample.len() as f64,
    };
    let outcome = minimize_bounded(&SecondMomentGap, &targets, 0.0, 1.0, opts)?;
    let estimate = Estimate::rounded(outcome.x_hat, p);
    tracing::debug!(
        n = sample.len(),
        rho = estimate.rho,
        p = estimate.p,
        gap = outcome.value,
        "dmm fit"
    );
    Ok(estimate)
}
