//! Integration tests for the Vasicek estimation and goodness-of-fit pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end flow: seeded sampling, parameter recovery by
//!   all four estimators, pointwise functions at the estimates, and
//!   goodness-of-fit tests against both the true and a wrong model.
//! - Pin the documented literal scenarios through the public crate root.
//!
//! Coverage
//! --------
//! - `distribution`: `pdf`, `ppf`, `rvs` literal values and determinism.
//! - `estimation`: `mle`, `imm`, `dmm`, `qbe` consistency and the
//!   `estimate` dispatcher.
//! - `statistical_tests`: `gof_chisq` table invariants and rejection,
//!   `gof_ks` non-rejection under the true model across seeds.
//!
//! Exclusions
//! ----------
//! - Optimizer internals and error payloads; covered by unit tests.
//! - Python bindings; tested at the Python level.
use vasicek::{
    EstimationMethod, Estimate, VskError, cdf, dmm, estimate, gof_chisq, gof_ks, imm, mle, pdf,
    ppf, qbe, rvs,
};

const RHO: f64 = 0.2;
const P: f64 = 0.3;

/// Purpose
/// -------
/// Draw the reference sample shared by the consistency tests.
///
/// Returns
/// -------
/// - `rvs(10_000, 0.2, 0.3, seed = 1)`.
fn reference_sample() -> Vec<f64> {
    rvs(10_000, RHO, P, 1).expect("rvs should accept valid parameters")
}

fn assert_close_to_truth(name: &str, est: Estimate) {
    assert!((est.rho - RHO).abs() < 0.05, "{name}: ρ̂ = {}", est.rho);
    assert!((est.p - P).abs() < 0.05, "{name}: p̂ = {}", est.p);
}

#[test]
// Purpose
// -------
// Reproduce the literal pdf / ppf scenarios through the crate root.
//
// Given
// -----
// - pdf([0.01, 0.02], 0.2, 0.3) and ppf([0.5, 0.9], 0.2, 0.3).
//
// Expect
// ------
// - pdf ≈ [0.07019659…, 0.22207563…]; ppf ≈ [0.2788377728, 0.521722906].
fn literal_scenarios_hold() {
    let dens = pdf(&[0.01, 0.02], RHO, P).expect("valid params");
    assert_eq!(dens.len(), 2);
    assert!((dens[0].pdf - 0.070_196_590_486_972_56).abs() < 1e-10);
    assert!((dens[1].pdf - 0.222_075_638_388_807_87).abs() < 1e-10);

    let quant = ppf(&[0.5, 0.9], RHO, P).expect("valid params");
    assert!((quant[0].ppf - 0.278_837_772_815_679).abs() < 1e-10);
    assert!((quant[1].ppf - 0.521_722_906_026_034_3).abs() < 1e-10);
}

#[test]
// Purpose
// -------
// Every estimator recovers the parameters of a large seeded sample.
//
// Given
// -----
// - rvs(10_000, 0.2, 0.3, seed = 1).
//
// Expect
// ------
// - mle, imm, dmm and qbe each within ±0.05 of (0.2, 0.3), and the
//   dispatcher agrees with the direct calls.
fn estimators_are_consistent_on_seeded_sample() {
    // Arrange
    let x = reference_sample();

    // Act
    let fits = [
        ("mle", mle(&x).expect("mle fits")),
        ("imm", imm(&x).expect("imm fits")),
        ("dmm", dmm(&x).expect("dmm fits")),
        ("qbe", qbe(&x).expect("qbe fits")),
    ];

    // Assert
    for (name, est) in fits {
        assert_close_to_truth(name, est);
        let method: EstimationMethod = name.parse().expect("known method");
        assert_eq!(estimate(&x, method), Ok(est));
    }
}

#[test]
// Purpose
// -------
// Sampling is reproducible and filtering shapes every output.
//
// Given
// -----
// - Two rvs calls with seed 1; a mixed input with out-of-range entries.
//
// Expect
// ------
// - Identical samples; pdf drops the boundary points, cdf keeps them;
//   estimators ignore invalid entries.
fn determinism_and_filtering() {
    assert_eq!(rvs(1000, RHO, P, 1), rvs(1000, RHO, P, 1));

    let mixed = [-1.0, 0.0, 0.05, 0.1, f64::NAN, 0.2, 0.3, 0.5, 1.0, 2.0];
    let clean = [0.05, 0.1, 0.2, 0.3, 0.5];
    assert_eq!(pdf(&mixed, RHO, P).expect("valid params").len(), 5);
    assert_eq!(cdf(&mixed, RHO, P).expect("valid params").len(), 7);
    assert_eq!(imm(&mixed), imm(&clean));
    assert_eq!(qbe(&mixed), qbe(&clean));
    assert_eq!(mle(&[f64::NAN, 0.0, 1.0]), Err(VskError::EmptySample));
}

#[test]
// Purpose
// -------
// Goodness-of-fit tests accept the generating model and reject a wrong
// one.
//
// Given
// -----
// - The reference sample, tested against (0.2, 0.3), against its own MLE,
//   and against (0.2, 0.45), with 10 chi-square groups.
//
// Expect
// ------
// - KS p-value > 0.01 for the true model and for the MLE fit.
// - Chi-square table with 10 groups whose observed and expected counts
//   both sum to 10_000; p-value < 1e-6 for the wrong mean.
fn goodness_of_fit_separates_models() {
    // Arrange
    let x = reference_sample();
    let fit = mle(&x).expect("mle fits");

    // Act
    let ks_true = gof_ks(&x, RHO, P).expect("ks runs");
    let ks_fit = gof_ks(&x, fit.rho, fit.p).expect("ks runs");
    let chisq_true = gof_chisq(&x, RHO, P, 10).expect("chisq runs");
    let chisq_wrong = gof_chisq(&x, RHO, 0.45, 10).expect("chisq runs");

    // Assert
    assert!(ks_true.pvalue() > 0.01, "KS p = {}", ks_true.pvalue());
    assert!(ks_fit.pvalue() > 0.01, "KS p = {}", ks_fit.pvalue());

    let tbl = chisq_true.table();
    assert_eq!(tbl.len(), 10);
    assert_eq!(tbl.iter().map(|r| r.observed).sum::<usize>(), 10_000);
    assert_eq!(tbl.iter().map(|r| r.expected).sum::<usize>(), 10_000);
    assert!((0.0..=1.0).contains(&chisq_true.pvalue()));
    assert!(chisq_wrong.pvalue() < 1e-6, "χ² p = {}", chisq_wrong.pvalue());
}

#[test]
// Purpose
// -------
// KS rarely rejects the generating model across repeated draws.
//
// Given
// -----
// - 20 samples of size 1000 from Vasicek(0.2, 0.3), seeds 1..=20.
//
// Expect
// ------
// - KS p-value > 0.05 in at least 18 of the 20 trials.
fn ks_accepts_true_model_across_seeds() {
    // Arrange
    let seeds = 1..=20_u64;

    // Act
    let accepted = seeds
        .map(|seed| {
            let x = rvs(1000, RHO, P, seed).expect("rvs should accept valid parameters");
            gof_ks(&x, RHO, P).expect("ks runs").pvalue()
        })
        .filter(|&pvalue| pvalue > 0.05)
        .count();

    // Assert
    assert!(accepted >= 18, "KS accepted the true model in {accepted}/20 trials");
}
