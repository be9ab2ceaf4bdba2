//! distribution — the Vasicek distribution and its Gaussian building blocks.
//!
//! Purpose
//! -------
//! Model default-rate / loss-rate data in `(0, 1)` with the Vasicek
//! distribution, parameterized by asset correlation `ρ ∈ [0, 1)` and
//! unconditional mean probability `p ∈ (0, 1)`. This subtree owns the
//! parameter type, the distribution type, the vectorized pointwise
//! functions, and the normal / bivariate-normal primitives they rest on.
//!
//! Key behaviors
//! -------------
//! - [`Vasicek`] implements `statrs`' `Continuous` / `ContinuousCDF` and
//!   `rand`'s `Distribution<f64>`, plus closed-form `mean` / `variance`.
//! - [`pdf`], [`cdf`], [`ppf`], [`rvs`] are the slice-level entry points,
//!   returning serde-serializable records in input order.
//! - [`normal::bivariate_normal_cdf`] evaluates `Φ₂(h, k; r)`, used by the
//!   variance and by the direct moment-matching estimator.
//!
//! Invariants & assumptions
//! ------------------------
//! - `(ρ, p)` is validated once ([`VasicekParams::new`]); invalid pairs
//!   surface as [`VskError`] and never as `NaN` outputs.
//! - Filtering follows `utils::SampleDomain`: open interval for the
//!   density, closed interval for the distribution function and quantile.
//!
//! Downstream usage
//! ----------------
//! - `estimation` evaluates the log-density on probit-transformed samples.
//! - `statistical_tests` compares empirical CDF values with
//!   [`Vasicek`]'s `cdf`.
//!
//! Testing notes
//! -------------
//! - Reference values for every pointwise function, boundary behavior,
//!   the `ρ = 0` point-mass limit, numerical integration of the density,
//!   seeded Monte Carlo moments, and `proptest` properties for monotonicity
//!   and the `ppf ∘ cdf` round trip.

pub mod errors;
pub mod functions;
pub mod normal;
pub mod params;
pub mod vasicek;

pub use self::errors::{VskError, VskResult};
pub use self::functions::{CdfPoint, PdfPoint, PpfPoint, cdf, pdf, ppf, rvs};
pub use self::normal::bivariate_normal_cdf;
pub use self::params::VasicekParams;
pub use self::vasicek::Vasicek;

pub mod prelude {
    pub use super::errors::{VskError, VskResult};
    pub use super::functions::{CdfPoint, PdfPoint, PpfPoint, cdf, pdf, ppf, rvs};
    pub use super::params::VasicekParams;
    pub use super::vasicek::Vasicek;
}
