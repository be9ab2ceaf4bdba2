//! distribution::functions — vectorized pointwise functions and sampling.
//!
//! Purpose
//! -------
//! Slice-in, records-out entry points over [`Vasicek`]: each function
//! validates `(rho, p)`, filters its input with the crate-wide
//! [`SampleDomain`] rule, and pairs every surviving input with its value.
//!
//! Conventions
//! -----------
//! - `pdf` uses the open interval `(0, 1)`; `cdf` and `ppf` use the closed
//!   interval `[0, 1]`. Other entries (including `NaN`) are dropped.
//! - Output order follows input order; output length equals the number of
//!   surviving inputs, and an empty result is not an error.
//! - Only `ppf` rounds (to 10 decimals).
//! - `rvs` draws from a PCG-64 generator seeded with `seed`, so a fixed
//!   seed reproduces the sample bit for bit.

use crate::{
    distribution::{errors::VskResult, vasicek::Vasicek},
    utils::{ROUND_DECIMALS, SampleDomain, round_to},
};
use rand::{SeedableRng, distr::Distribution};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, ContinuousCDF};

/// Density value at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdfPoint {
    pub x: f64,
    pub pdf: f64,
}

/// Distribution function value at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdfPoint {
    pub x: f64,
    pub cdf: f64,
}

/// Quantile at level `alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PpfPoint {
    #[serde(rename = "Alpha")]
    pub alpha: f64,
    pub ppf: f64,
}

/// Density of the Vasicek distribution at each `x ∈ (0, 1)`.
///
/// # Errors
/// [`VskError::InvalidRho`](crate::distribution::VskError::InvalidRho) /
/// [`VskError::InvalidP`](crate::distribution::VskError::InvalidP).
pub fn pdf(x: &[f64], rho: f64, p: f64) -> VskResult<Vec<PdfPoint>> {
    let dist = Vasicek::new(rho, p)?;
    Ok(SampleDomain::Open.filter(x).into_iter().map(|x| PdfPoint { x, pdf: dist.pdf(x) }).collect())
}

/// Distribution function at each `x ∈ [0, 1]`.
///
/// # Errors
/// Parameter validation only.
pub fn cdf(x: &[f64], rho: f64, p: f64) -> VskResult<Vec<CdfPoint>> {
    let dist = Vasicek::new(rho, p)?;
    Ok(SampleDomain::Closed.filter(x).into_iter().map(|x| CdfPoint { x, cdf: dist.cdf(x) }).collect())
}

/// Quantile at each level `alpha ∈ [0, 1]`, rounded to 10 decimals.
///
/// # Errors
/// Parameter validation only.
pub fn ppf(alpha: &[f64], rho: f64, p: f64) -> VskResult<Vec<PpfPoint>> {
    let dist = Vasicek::new(rho, p)?;
    Ok(SampleDomain::Closed
        .filter(alpha)
        .into_iter()
        .map(|alpha| PpfPoint { alpha, ppf: round_to(dist.inverse_cdf(alpha), ROUND_DECIMALS) })
        .collect())
}

/// Draw `n` values from the Vasicek distribution with a seeded generator.
///
/// # Errors
/// Parameter validation only.
pub fn rvs(n: usize, rho: f64, p: f64, seed: u64) -> VskResult<Vec<f64>> {
    let dist = Vasicek::new(rho, p)?;
    let rng = Pcg64::seed_from_u64(seed);
    Ok(dist.sample_iter(rng).take(n).collect())
}
