//! statistical_tests::chi_square — equal-frequency chi-square goodness-of-fit.
//!
//! Purpose
//! -------
//! Test whether a sample in `(0, 1)` is consistent with a given Vasicek
//! distribution by comparing, on the probability scale, where the empirical
//! CDF values fall against where the model CDF values fall.
//!
//! Key behaviors
//! -------------
//! - The sample is filtered to `(0, 1)` and sorted; at each point the
//!   empirical CDF `F̂(x₍ᵢ₎)` and the model CDF `F(x₍ᵢ₎)` are evaluated.
//! - `groups − 1` interior cut points are the equal-frequency
//!   (linear-interpolation) quantiles `k/groups` of the model CDF values.
//!   Groups are right-closed `(lower, upper]`; the outer groups are open
//!   ended and reported with bounds `0` and `1`.
//! - Observed count = number of empirical CDF values per group; expected
//!   count = number of model CDF values per group. Both sum to `n`.
//! - Statistic `Σ (o − e)²/e` with `groups − 1` degrees of freedom; the
//!   p-value is the χ² upper tail.
//!
//! Invariants & assumptions
//! ------------------------
//! - `2 ≤ groups ≤ n` after filtering.
//! - A group with `e = 0` contributes `0` when `o = 0` and `+∞` otherwise;
//!   an infinite statistic has p-value `0`.
//! - The usual validity condition (about five or more per cell) is left to
//!   the caller.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the table invariants (group count, counts summing to
//!   `n`, contiguous bounds), the p-value range, rejection under a wrong
//!   `p`, and input validation.
use crate::{
    distribution::Vasicek,
    statistical_tests::{
        empirical::{CdfComparison, bin_counts, equal_frequency_cuts},
        errors::{GofError, GofResult},
        validation::validate_group_count,
    },
};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// One row of the chi-square contingency table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupCount {
    /// 1-based group index.
    pub group: usize,
    pub lower: f64,
    pub upper: f64,
    pub observed: usize,
    pub expected: usize,
}

/// Chi-square statistic and its upper-tail probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareStat {
    pub chisq: f64,
    pub pvalue: f64,
}

/// Outcome of the chi-square goodness-of-fit test.
///
/// Serializes as `{ "stat": { "chisq", "pvalue" }, "tbl": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareOutcome {
    stat: ChiSquareStat,
    tbl: Vec<GroupCount>,
}

impl ChiSquareOutcome {
    /// Run the equal-frequency chi-square test of `x` against `dist`.
    ///
    /// # Errors
    /// - [`GofError::InsufficientData`] if fewer than two observations
    ///   survive filtering.
    /// - [`GofError::InvalidGroupCount`] unless `2 ≤ groups ≤ n`.
    /// - [`GofError::InvalidDegreesOfFreedom`] if the χ² reference
    ///   distribution cannot be built.
    pub fn chi_square(x: &[f64], dist: &Vasicek, groups: usize) -> GofResult<Self> {
        let cmp = CdfComparison::new(x, dist)?;
        validate_group_count(groups, cmp.len())?;

        let cuts = equal_frequency_cuts(&cmp.model, groups);
        let observed = bin_counts(&cmp.empirical, &cuts);
        let expected = bin_counts(&cmp.model, &cuts);

        let tbl: Vec<GroupCount> = (0..groups)
            .map(|j| GroupCount {
                group: j + 1,
                lower: if j == 0 { 0.0 } else { cuts[j - 1] },
                upper: if j + 1 == groups { 1.0 } else { cuts[j] },
                observed: observed[j],
                expected: expected[j],
            })
            .collect();

        let chisq: f64 = tbl.iter().map(|row| cell_contribution(row.observed, row.expected)).sum();
        let df = (groups - 1) as f64;
        let pvalue = if chisq.is_finite() {
            ChiSquared::new(df).map_err(|_| GofError::InvalidDegreesOfFreedom { df })?.sf(chisq)
        } else {
            0.0
        };
        tracing::debug!(n = cmp.len(), groups, chisq, pvalue, "chi-square goodness of fit");

        Ok(Self { stat: ChiSquareStat { chisq, pvalue }, tbl })
    }

    /// Pearson statistic `Σ (o − e)²/e`.
    pub fn chisq(&self) -> f64 {
        self.stat.chisq
    }

    /// χ²(groups − 1) upper-tail p-value.
    pub fn pvalue(&self) -> f64 {
        self.stat.pvalue
    }

    pub fn stat(&self) -> ChiSquareStat {
        self.stat
    }

    /// Per-group table, in group order.
    pub fn table(&self) -> &[GroupCount] {
        &self.tbl
    }

    /// Degrees of freedom, `groups − 1`.
    pub fn df(&self) -> usize {
        self.tbl.len() - 1
    }
}

fn cell_contribution(observed: usize, expected: usize) -> f64 {
    match (observed, expected) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        (o, e) => {
            let diff = o as f64 - e as f64;
            diff * diff / e as f64
        }
    }
}

/// Chi-square goodness-of-fit of `x` against `Vasicek(rho, p)` with
/// `groups` equal-frequency groups.
///
/// # Errors
/// - [`GofError::Distribution`] for invalid `(rho, p)`.
/// - Otherwise as [`ChiSquareOutcome::chi_square`].
pub fn gof_chisq(x: &[f64], rho: f64, p: f64, groups: usize) -> GofResult<ChiSquareOutcome> {
    let dist = Vasicek::new(rho, p)?;
    ChiSquareOutcome::chi_square(x, &dist, groups)
}
