//! statistical_tests — goodness-of-fit tests for the Vasicek distribution.
//!
//! Purpose
//! -------
//! Decide whether an observed default-rate sample is consistent with a
//! given `Vasicek(ρ, p)`. Two tests share one preparation step: filter the
//! sample to `(0, 1)`, sort it, and evaluate the empirical and model CDFs
//! at every point ([`empirical::CdfComparison`]).
//!
//! Key behaviors
//! -------------
//! - [`gof_chisq`]: equal-frequency chi-square test returning the
//!   statistic, its χ²(groups − 1) p-value, and the per-group table.
//! - [`gof_ks`]: two-sample Kolmogorov–Smirnov statistic between the two
//!   CDF value sets with an asymptotic p-value.
//! - Input guards live in [`validation`]; failures are typed as
//!   [`GofError`] with the alias [`GofResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters are validated through the distribution layer; invalid
//!   `(ρ, p)` surface as `GofError::Distribution`.
//! - Both tests need at least two valid observations; the chi-square test
//!   additionally needs `2 ≤ groups ≤ n`.
//! - p-values lie in `[0, 1]`.
//!
//! Conventions
//! -----------
//! - Outcomes are value objects with accessors and serde support; field
//!   names on the wire are `stat` / `chisq` / `pvalue` / `tbl` and
//!   `ks` / `pvalue`.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code:
//!
//!   ```rust
//!   use vasicek::distribution::rvs;
//!   use vasicek::statistical_tests::{gof_chisq, gof_ks};
//!
//!   let x = rvs(1000, 0.2, 0.3, 42)?;
//!   let chisq = gof_chisq(&x, 0.2, 0.3, 10)?;
//!   let ks = gof_ks(&x, 0.2, 0.3)?;
//!   assert!((0.0..=1.0).contains(&chisq.pvalue()));
//!   assert!((0.0..=1.0).contains(&ks.pvalue()));
//!   # Ok::<(), vasicek::statistical_tests::GofError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule; end-to-end checks against estimated
//!   parameters live in `tests/`.

pub mod chi_square;
pub mod empirical;
pub mod errors;
pub mod kolmogorov_smirnov;
pub mod validation;

pub use self::chi_square::{ChiSquareOutcome, ChiSquareStat, GroupCount, gof_chisq};
pub use self::errors::{GofError, GofResult};
pub use self::kolmogorov_smirnov::{KsOutcome, gof_ks};

pub mod prelude {
    pub use super::chi_square::{ChiSquareOutcome, GroupCount, gof_chisq};
    pub use super::errors::{GofError, GofResult};
    pub use super::kolmogorov_smirnov::{KsOutcome, gof_ks};
}
