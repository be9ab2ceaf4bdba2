//! statistical_tests::kolmogorov_smirnov — two-sample KS goodness-of-fit.
//!
//! Purpose
//! -------
//! Measure the largest gap between the distribution of the empirical CDF
//! values `F̂(x₍ᵢ₎)` and that of the model CDF values `F(x₍ᵢ₎)` at the sorted
//! sample, and attach an asymptotic p-value.
//!
//! Key behaviors
//! -------------
//! - `D = sup_t |G₁(t) − G₂(t)|`, where `G₁`, `G₂` are the step functions of
//!   the two value sets (each of size `n`).
//! - p-value `Q_KS(λ)` with `λ = (√nₑ + 0.12 + 0.11/√nₑ)·D` (Stephens'
//!   small-sample correction) and effective size `nₑ = n·m/(n + m)`.
//! - `Q_KS` is summed from the alternating series
//!   `2 Σ (−1)^{j−1} exp(−2j²λ²)` for `λ ≥ 1.18` and from the theta-function
//!   form `1 − (√(2π)/λ) Σ exp(−(2j − 1)²π²/(8λ²))` below, so both tails
//!   converge in a handful of terms.
//!
//! Invariants & assumptions
//! ------------------------
//! - `D ∈ [0, 1]`, p-value clamped to `[0, 1]`.
//! - At least two observations after filtering.
//! - The p-value is always the asymptotic one. It is unreliable for small
//!   samples: with `n = 2` and `D = 1` it reports about `0.097`, while the
//!   exact two-sample probability is `1/3`.
use crate::{
    distribution::Vasicek,
    statistical_tests::{empirical::CdfComparison, errors::GofResult},
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Switch point between the two series for `Q_KS`.
const SERIES_SWITCH: f64 = 1.18;
/// Terms beyond this contribute below `exp(-45)`.
const MAX_TERMS: usize = 100;

/// Outcome of the Kolmogorov–Smirnov goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KsOutcome {
    ks: f64,
    pvalue: f64,
}

impl KsOutcome {
    /// Run the two-sample KS test of `x` against `dist`.
    ///
    /// # Errors
    /// [`GofError::InsufficientData`](crate::statistical_tests::GofError::InsufficientData)
    /// if fewer than two observations survive filtering.
    pub fn kolmogorov_smirnov(x: &[f64], dist: &Vasicek) -> GofResult<Self> {
        let cmp = CdfComparison::new(x, dist)?;
        let ks = two_sample_statistic(&cmp.empirical, &cmp.model);
        let (n, m) = (cmp.empirical.len() as f64, cmp.model.len() as f64);
        let pvalue = kolmogorov_upper_tail(ks, n * m / (n + m));
        tracing::debug!(n = cmp.len(), ks, pvalue, "kolmogorov-smirnov goodness of fit");
        Ok(Self { ks, pvalue })
    }

    /// Statistic `D`.
    pub fn ks(&self) -> f64 {
        self.ks
    }

    /// Asymptotic p-value of `D`; unreliable for small samples.
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }
}

/// `sup_t |G₁(t) − G₂(t)|` for two ascending samples.
fn two_sample_statistic(a: &[f64], b: &[f64]) -> f64 {
    let (n, m) = (a.len(), b.len());
    let (mut i, mut j) = (0, 0);
    let mut d: f64 = 0.0;
    while i < n && j < m {
        let t = a[i].min(b[j]);
        while i < n && a[i] <= t {
            i += 1;
        }
        while j < m && b[j] <= t {
            j += 1;
        }
        d = d.max((i as f64 / n as f64 - j as f64 / m as f64).abs());
    }
    d
}

/// `P(D > d)` under the asymptotic Kolmogorov law for effective size `en`.
///
/// Stephens' correction helps for moderate `en` but no exact small-sample
/// distribution is used, so values for a handful of observations are loose.
fn kolmogorov_upper_tail(d: f64, en: f64) -> f64 {
    if d <= 0.0 || en <= 0.0 {
        return 1.0;
    }
    let sqrt_en = en.sqrt();
    let lambda = (sqrt_en + 0.12 + 0.11 / sqrt_en) * d;
    let q = if lambda < SERIES_SWITCH {
        let sum: f64 = (1..=MAX_TERMS)
            .map(|j| {
                let k = (2 * j - 1) as f64;
                (-k * k * PI * PI / (8.0 * lambda * lambda)).exp()
            })
            .sum();
        1.0 - (2.0 * PI).sqrt() / lambda * sum
    } else {
        let sum: f64 = (1..=MAX_TERMS)
            .map(|j| {
                let sign = if j % 2 == 1 { 1.0 } else { -1.0 };
                sign * (-2.0 * (j * j) as f64 * lambda * lambda).exp()
            })
            .sum();
        2.0 * sum
    };
    q.clamp(0.0, 1.0)
}

/// Kolmogorov–Smirnov goodness-of-fit of `x` against `Vasicek(rho, p)`.
///
/// The p-value is asymptotic and unreliable for small `x.len()`.
///
/// # Errors
/// - [`GofError::Distribution`](crate::statistical_tests::GofError::Distribution)
///   for invalid `(rho, p)`.
/// - Otherwise as [`KsOutcome::kolmogorov_smirnov`].
pub fn gof_ks(x: &[f64], rho: f64, p: f64) -> GofResult<KsOutcome> {
    let dist = Vasicek::new(rho, p)?;
    KsOutcome::kolmogorov_smirnov(x, &dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{distribution::rvs, statistical_tests::GofError};

    #[test]
    // Purpose
    // -------
    // Document that tiny samples get the asymptotic tail, not an exact one.
    //
    // Given
    // -----
    // - x = [0.1, 0.2] against Vasicek(0.2, 0.3). The empirical values
    //   [0.5, 1.0] all lie above the model values [0.082, 0.305].
    //
    // Expect
    // ------
    // - D = 1 and p = Q_KS(1.23) ≈ 0.0970, well below the exact 1/3.
    fn small_sample_uses_asymptotic_tail() {
        // Act
        let out = gof_ks(&[0.1, 0.2], 0.2, 0.3).expect("two observations suffice");

        // Assert
        assert_eq!(out.ks(), 1.0);
        assert!((out.pvalue() - 0.097_026_897_595_220_83).abs() < 1e-12, "p = {}", out.pvalue());
        assert!(out.pvalue() < 1.0 / 3.0);
    }

    #[test]
    // Purpose
    // -------
    // Check the two-sample statistic on hand-computable inputs.
    //
    // Given
    // -----
    // - a = [0.1, 0.2, 0.3, 0.4], b = [0.35, 0.45, 0.5, 0.6]; and a = b.
    //
    // Expect
    // ------
    // - D = 0.75 (three points of `a` precede every point of `b`); D = 0
    //   for identical samples.
    fn two_sample_statistic_on_known_inputs() {
        let a = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(two_sample_statistic(&a, &[0.35, 0.45, 0.5, 0.6]), 0.75);
        assert_eq!(two_sample_statistic(&a, &a), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Pin the asymptotic tail on both sides of the series switch.
    //
    // Given
    // -----
    // - λ = 0.3 and λ = 1.36, obtained by choosing d for en = 10_000.
    //
    // Expect
    // ------
    // - Q ≈ 0.99999069 and Q ≈ 0.04948588.
    fn upper_tail_matches_reference_values() {
        let en: f64 = 10_000.0;
        let scale = en.sqrt() + 0.12 + 0.11 / en.sqrt();
        let low = kolmogorov_upper_tail(0.3 / scale, en);
        let high = kolmogorov_upper_tail(1.36 / scale, en);
        assert!((low - 0.999_990_694_198_665_5).abs() < 1e-10, "Q(0.3) = {low}");
        assert!((high - 0.049_485_876_755_377_9).abs() < 1e-10, "Q(1.36) = {high}");
        assert_eq!(kolmogorov_upper_tail(0.0, en), 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Non-rejection under the true model and rejection under a wrong one.
    //
    // Given
    // -----
    // - rvs(2000, 0.2, 0.3, seed = 9) tested against (0.2, 0.3) and
    //   (0.6, 0.3).
    //
    // Expect
    // ------
    // - p > 0.01 for the true model, p < 1e-6 for the wrong correlation.
    fn ks_separates_true_and_wrong_models() {
        let x = rvs(2000, 0.2, 0.3, 9).expect("valid params");
        let good = gof_ks(&x, 0.2, 0.3).expect("test runs");
        let bad = gof_ks(&x, 0.6, 0.3).expect("test runs");
        assert!(good.pvalue() > 0.01, "p = {}", good.pvalue());
        assert!(bad.pvalue() < 1e-6, "p = {}", bad.pvalue());
        assert!((0.0..=1.0).contains(&good.ks()));
    }

    #[test]
    // Purpose
    // -------
    // Validation and serialized keys.
    //
    // Given
    // -----
    // - A one-point sample; a valid four-point sample.
    //
    // Expect
    // ------
    // - `InsufficientData`; JSON keys `ks` and `pvalue`.
    fn validation_and_serialization() {
        assert!(matches!(gof_ks(&[0.3], 0.2, 0.3), Err(GofError::InsufficientData { .. })));
        let out = gof_ks(&[0.1, 0.2, 0.3, 0.4], 0.2, 0.3).expect("test runs");
        let json = serde_json::to_value(out).expect("serialize");
        assert!(json["ks"].is_number() && json["pvalue"].is_number());
    }
}
