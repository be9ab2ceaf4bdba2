//! statistical_tests::validation — shared input guards for goodness-of-fit.
//!
//! Purpose
//! -------
//! Check sample sizes and tuning constants once, before any sorting or
//! binning, so the test modules can assume a usable sample.
//!
//! Invariants & assumptions
//! ------------------------
//! - Samples passed here are already filtered to `(0, 1)`.
//! - A goodness-of-fit test needs at least [`MIN_OBSERVATIONS`] points.
//! - The chi-square group count satisfies `2 ≤ groups ≤ n`, so the test
//!   has at least one degree of freedom and no group is empty by
//!   construction.

use crate::statistical_tests::errors::{GofError, GofResult};

/// Smallest sample a goodness-of-fit test accepts.
pub const MIN_OBSERVATIONS: usize = 2;

/// Validate the size of a filtered sample.
///
/// # Errors
/// [`GofError::InsufficientData`] when `n_obs < MIN_OBSERVATIONS`.
pub fn validate_sample_size(n_obs: usize) -> GofResult<()> {
    if n_obs < MIN_OBSERVATIONS {
        return Err(GofError::InsufficientData { needed: MIN_OBSERVATIONS, got: n_obs });
    }
    Ok(())
}

/// Validate the chi-square group count against the sample size.
///
/// # Errors
/// [`GofError::InvalidGroupCount`] unless `2 ≤ groups ≤ n_obs`.
pub fn validate_group_count(groups: usize, n_obs: usize) -> GofResult<()> {
    if groups < 2 || groups > n_obs {
        return Err(GofError::InvalidGroupCount { groups, n_obs });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Cover every branch of both guards.
    //
    // Given
    // -----
    // - n_obs ∈ {1, 2}; (groups, n_obs) ∈ {(1, 10), (11, 10), (10, 10)}.
    //
    // Expect
    // ------
    // - Error, Ok; error, error, Ok.
    fn guards_enforce_documented_bounds() {
        assert_eq!(
            validate_sample_size(1),
            Err(GofError::InsufficientData { needed: 2, got: 1 })
        );
        assert!(validate_sample_size(2).is_ok());
        assert_eq!(
            validate_group_count(1, 10),
            Err(GofError::InvalidGroupCount { groups: 1, n_obs: 10 })
        );
        assert!(validate_group_count(11, 10).is_err());
        assert!(validate_group_count(10, 10).is_ok());
    }
}
