//! utils — sample filtering, rounding, and Python argument extraction.
//!
//! Purpose
//! -------
//! Hold the small helpers every public entry point shares: the filtering
//! rule applied to raw observation vectors, the 10-decimal rounding of
//! reported estimates and quantiles, order-statistic helpers, and (behind `python-bindings`) the
//! conversion of Python array-likes and optimizer arguments.
//!
//! Conventions
//! -----------
//! - Filtering never reorders: surviving values keep their input order.
//! - `NaN` is always dropped; `±∞` always falls outside either domain.

use crate::distribution::errors::{VskError, VskResult};

#[cfg(feature = "python-bindings")]
use crate::optimization::loglik_optimizer::{MLEOptions, Tolerances};
#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};
#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

/// Decimal places kept by estimators and `ppf`.
pub const ROUND_DECIMALS: i32 = 10;

/// Admissible support for an observation vector.
///
/// - `Open`: `0 < x < 1`, used wherever `Φ⁻¹(x)` must be finite (density,
///   estimators, goodness-of-fit).
/// - `Closed`: `0 ≤ x ≤ 1`, used by `cdf` and `ppf`, which are finite at
///   the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleDomain {
    Open,
    Closed,
}

impl SampleDomain {
    pub fn contains(self, x: f64) -> bool {
        match self {
            SampleDomain::Open => x > 0.0 && x < 1.0,
            SampleDomain::Closed => (0.0..=1.0).contains(&x),
        }
    }

    /// Keep the entries of `x` inside this domain, in input order.
    pub fn filter(self, x: &[f64]) -> Vec<f64> {
        let kept: Vec<f64> = x.iter().copied().filter(|&v| self.contains(v)).collect();
        if kept.len() < x.len() {
            tracing::debug!(
                domain = ?self,
                kept = kept.len(),
                dropped = x.len() - kept.len(),
                "filtered observations outside the unit interval"
            );
        }
        kept
    }

    /// Like [`SampleDomain::filter`], but an empty result is an error.
    ///
    /// # Errors
    /// [`VskError::EmptySample`] if no entry survives.
    pub fn filter_nonempty(self, x: &[f64]) -> VskResult<Vec<f64>> {
        let kept = self.filter(x);
        if kept.is_empty() {
            return Err(VskError::EmptySample);
        }
        Ok(kept)
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

/// Linear-interpolation quantile of an ascending, non-empty slice.
///
/// Position `h = (n − 1)·q`; the result interpolates between the order
/// statistics at `⌊h⌋` and `⌈h⌉`. Returns `NaN` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let h = (n - 1) as f64 * q.clamp(0.0, 1.0);
            let lo = h.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
        }
    }
}

/// Arithmetic mean; `NaN` for an empty slice.
pub fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    // pandas.Series and friends.
    if let Ok(obj) = raw_data.call_method1("to_numpy", ()) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Simplex options from optional Python keyword arguments.
#[cfg(feature = "python-bindings")]
pub fn extract_mle_opts(tol_cost: Option<f64>, max_iter: Option<usize>) -> PyResult<MLEOptions> {
    let defaults = MLEOptions::default();
    let tols = Tolerances::new(
        tol_cost.or(defaults.tols.tol_cost),
        max_iter.or(defaults.tols.max_iter),
    )
    .map_err(VskError::from)?;
    Ok(MLEOptions { tols, ..defaults })
}
