//! bounded_optimizer — Brent minimization of a scalar objective on an interval.
//!
//! Purpose
//! -------
//! Minimize a one-dimensional objective `g(x)` over a closed interval
//! `[lower, upper]` with Argmin's Brent method (golden-section search with
//! parabolic interpolation). Callers implement [`ScalarObjective`] and call
//! [`minimize_bounded`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The bracket is finite with `lower < upper`; the solver only evaluates
//!   `g` at interior points.
//! - `g` may be non-smooth (e.g. an absolute deviation); Brent falls back to
//!   golden-section steps where parabolic steps are not accepted.
//! - Like the simplex maximizer, reaching `max_iter` is reported on the
//!   outcome rather than raised.
//!
//! Downstream usage
//! ----------------
//! - The direct moment-matching estimator minimizes
//!   `|Φ₂(c, c; ρ) − m₂|` over `ρ ∈ [0, 1]` through this module.

pub mod adapter;
pub mod api;
pub mod traits;

pub use self::api::minimize_bounded;
pub use self::traits::{BoundedOptions, BoundedOutcome, ScalarObjective};
