//! estimation — fitting `(ρ, p)` to an observed default-rate sample.
//!
//! Purpose
//! -------
//! Four estimators of the Vasicek parameters with different trade-offs:
//!
//! | Estimator | Method | Notes |
//! |---|---|---|
//! | [`mle`] | maximum likelihood, Nelder–Mead simplex | most efficient |
//! | [`imm`] | mean/variance of `Φ⁻¹(x)` | closed form |
//! | [`dmm`] | first two raw moments, Brent on `ρ` | no probit transform of moments |
//! | [`qbe`] | median/IQR of `Φ⁻¹(x)` | robust, needs larger samples |
//!
//! Invariants & assumptions
//! ------------------------
//! - Every estimator filters its input to the open interval `(0, 1)` and
//!   fails with `VskError::EmptySample` when nothing survives.
//! - Reported estimates are rounded to 10 decimals.
//! - Optimizer non-convergence never fails an estimator.
//!
//! Downstream usage
//! ----------------
//! - [`estimate`] selects an estimator by [`EstimationMethod`], which also
//!   parses from `"mle" | "imm" | "dmm" | "qbe"`.
//! - [`Estimate::distribution`] turns a fit into a [`crate::distribution::Vasicek`]
//!   for goodness-of-fit testing.

pub mod api;
pub mod mle;
pub mod moments;
pub mod quantile;
pub mod types;

pub use self::api::estimate;
pub use self::mle::{VasicekLikelihood, mle, mle_with_options};
pub use self::moments::{dmm, dmm_with_options, imm};
pub use self::quantile::qbe;
pub use self::types::{Estimate, EstimationMethod, MleFit};

pub mod prelude {
    pub use super::api::estimate;
    pub use super::mle::{mle, mle_with_options};
    pub use super::moments::{dmm, dmm_with_options, imm};
    pub use super::quantile::qbe;
    pub use super::types::{Estimate, EstimationMethod, MleFit};
}
