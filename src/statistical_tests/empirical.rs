//! statistical_tests::empirical — ECDF values, equal-frequency cuts, and
//! binning shared by the goodness-of-fit tests.
//!
//! Both tests compare two vectors evaluated at the sorted sample points
//! `x₍₁₎ ≤ … ≤ x₍ₙ₎`: the empirical CDF values `F̂(x₍ᵢ₎)` (fraction of the
//! sample `≤ x₍ᵢ₎`, so ties share the largest rank) and the model CDF
//! values `F(x₍ᵢ₎)`.
use crate::{
    distribution::Vasicek,
    statistical_tests::{errors::GofResult, validation::validate_sample_size},
    utils::{SampleDomain, quantile_sorted},
};
use statrs::distribution::ContinuousCDF;

/// Empirical and model CDF values at the sorted, filtered sample.
#[derive(Debug, Clone, PartialEq)]
pub struct CdfComparison {
    /// `F̂(x₍ᵢ₎)`, ascending.
    pub empirical: Vec<f64>,
    /// `F(x₍ᵢ₎)`, ascending.
    pub model: Vec<f64>,
}

impl CdfComparison {
    /// Filter `x` to `(0, 1)`, sort it, and evaluate both CDFs.
    ///
    /// # Errors
    /// [`GofError::InsufficientData`](crate::statistical_tests::GofError::InsufficientData)
    /// when fewer than two observations survive filtering.
    pub fn new(x: &[f64], dist: &Vasicek) -> GofResult<Self> {
        let mut sorted = SampleDomain::Open.filter(x);
        validate_sample_size(sorted.len())?;
        sorted.sort_by(f64::total_cmp);

        let empirical = ecdf_values(&sorted);
        let mut model: Vec<f64> = sorted.iter().map(|&v| dist.cdf(v)).collect();
        model.sort_by(f64::total_cmp);
        Ok(Self { empirical, model })
    }

    pub fn len(&self) -> usize {
        self.empirical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.empirical.is_empty()
    }
}

/// `F̂(x₍ᵢ₎)` for an ascending slice.
pub fn ecdf_values(sorted: &[f64]) -> Vec<f64> {
    let n = sorted.len() as f64;
    sorted.iter().map(|&v| sorted.partition_point(|&w| w <= v) as f64 / n).collect()
}

/// The `groups − 1` interior cut points at levels `k/groups`.
pub fn equal_frequency_cuts(sorted: &[f64], groups: usize) -> Vec<f64> {
    (1..groups).map(|k| quantile_sorted(sorted, k as f64 / groups as f64)).collect()
}

/// Count `values` per right-closed group delimited by ascending `cuts`.
///
/// Group `0` is `(-∞, cuts[0]]`, group `j` is `(cuts[j−1], cuts[j]]`, and
/// the last group is `(cuts[last], +∞)`.
pub fn bin_counts(values: &[f64], cuts: &[f64]) -> Vec<usize> {
    let mut counts = vec![0; cuts.len() + 1];
    for &v in values {
        counts[cuts.partition_point(|&c| c < v)] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistical_tests::GofError;

    #[test]
    // Purpose
    // -------
    // Ties share the largest rank in the empirical CDF.
    //
    // Given
    // -----
    // - sorted = [0.1, 0.2, 0.2, 0.4].
    //
    // Expect
    // ------
    // - [0.25, 0.75, 0.75, 1].
    fn ecdf_values_handle_ties() {
        assert_eq!(ecdf_values(&[0.1, 0.2, 0.2, 0.4]), vec![0.25, 0.75, 0.75, 1.0]);
    }

    #[test]
    // Purpose
    // -------
    // Cut points and right-closed binning on a simple grid.
    //
    // Given
    // -----
    // - values = [0.1, 0.2, …, 1.0] and 4 groups.
    //
    // Expect
    // ------
    // - Cuts [0.325, 0.55, 0.775]; counts [3, 2, 2, 3] summing to 10;
    //   a value equal to a cut falls in the lower group.
    fn cuts_and_bins_are_right_closed() {
        // Arrange
        let values: Vec<f64> = (1..=10).map(|i| i as f64 / 10.0).collect();

        // Act
        let cuts = equal_frequency_cuts(&values, 4);
        let counts = bin_counts(&values, &cuts);

        // Assert
        assert_eq!(cuts.len(), 3);
        for (got, want) in cuts.iter().zip([0.325, 0.55, 0.775]) {
            assert!((got - want).abs() < 1e-12, "cut {got} vs {want}");
        }
        assert_eq!(counts, vec![3, 2, 2, 3]);
        assert_eq!(bin_counts(&[0.5, 0.50001], &[0.5]), vec![1, 1]);
    }

    #[test]
    // Purpose
    // -------
    // The comparison filters, sorts, and rejects tiny samples.
    //
    // Given
    // -----
    // - x = [0.4, NaN, 0.1, 1.0, 0.2] and x = [0.3, 0.0].
    //
    // Expect
    // ------
    // - Three points with ECDF [1/3, 2/3, 1] and ascending model values;
    //   `InsufficientData` for the second sample.
    fn comparison_filters_and_sorts() {
        // Arrange
        let dist = Vasicek::new(0.2, 0.3).expect("valid params");

        // Act
        let cmp = CdfComparison::new(&[0.4, f64::NAN, 0.1, 1.0, 0.2], &dist).expect("valid");

        // Assert
        assert_eq!(cmp.len(), 3);
        assert!((cmp.empirical[0] - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(cmp.empirical[2], 1.0);
        assert!(cmp.model.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(
            CdfComparison::new(&[0.3, 0.0], &dist),
            Err(GofError::InsufficientData { needed: 2, got: 1 })
        );
    }
}
