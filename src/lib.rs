//! vasicek — estimation, distribution functions, sampling, and
//! goodness-of-fit tests for the Vasicek distribution.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the same routines to Python through the `_vasicek` extension
//! module. The Vasicek distribution describes default-rate / loss-rate data
//! in `(0, 1)` under a one-factor Gaussian model with asset correlation
//! `ρ ∈ [0, 1)` and unconditional mean probability `p ∈ (0, 1)`.
//!
//! Key behaviors
//! -------------
//! - Re-export the public surface: the estimators `mle`, `imm`, `dmm`,
//!   `qbe`; the pointwise functions `pdf`, `cdf`, `ppf`, `rvs`; and the
//!   goodness-of-fit tests `gof_chisq`, `gof_ks`.
//! - When `python-bindings` is enabled, define `#[pyfunction]` wrappers
//!   (`vsk_mle`, …, `gof_ks`) returning dicts / lists of dicts keyed like
//!   the serde representation of the Rust records.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file only converts
//!   arguments and maps errors.
//! - Every entry point filters its input (`utils::SampleDomain`) and
//!   validates `(ρ, p)` before computing.
//!
//! Conventions
//! -----------
//! - Errors are typed per subtree (`OptError`, `VskError`, `GofError`) and
//!   become Python `ValueError`s at the PyO3 boundary.
//! - Logging goes through `tracing`; the library never installs a
//!   subscriber.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use vasicek::{gof_ks, mle, rvs};
//!
//! let x = rvs(2000, 0.2, 0.3, 1)?;
//! let est = mle(&x)?;
//! let ks = gof_ks(&x, est.rho, est.p)?;
//! assert!(ks.pvalue() > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests sit next to the code; `tests/` holds end-to-end checks of
//!   the literal scenarios, estimator consistency, and goodness-of-fit
//!   behavior. The PyO3 layer is exercised by Python-level tests.

pub mod distribution;
pub mod estimation;
pub mod optimization;
pub mod statistical_tests;
pub mod utils;

pub use crate::distribution::{
    CdfPoint, PdfPoint, PpfPoint, Vasicek, VasicekParams, VskError, VskResult, cdf, pdf, ppf, rvs,
};
pub use crate::estimation::{
    Estimate, EstimationMethod, MleFit, dmm, dmm_with_options, estimate, imm, mle,
    mle_with_options, qbe,
};
pub use crate::statistical_tests::{
    ChiSquareOutcome, GofError, GofResult, GroupCount, KsOutcome, gof_chisq, gof_ks,
};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::utils::{extract_f64_array, extract_mle_opts};

/// Run `f` on a contiguous `f64` view of a Python array-like.
#[cfg(feature = "python-bindings")]
fn with_f64_slice<'py, T>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, f: impl FnOnce(&[f64]) -> PyResult<T>,
) -> PyResult<T> {
    let arr: PyReadonlyArray1<f64> = extract_f64_array(py, raw_data)?;
    let data = arr.as_slice().map_err(|_| PyValueError::new_err("expected a contiguous 1-D array"))?;
    f(data)
}

#[cfg(feature = "python-bindings")]
fn estimate_to_dict<'py>(py: Python<'py>, est: Estimate) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("Rho", est.rho)?;
    dict.set_item("P", est.p)?;
    Ok(dict)
}

/// Maximum-likelihood estimate as `{"Rho": ρ̂, "P": p̂}`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (x, /, tol_cost = None, max_iter = None))]
fn vsk_mle<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, tol_cost: Option<f64>, max_iter: Option<usize>,
) -> PyResult<Bound<'py, PyDict>> {
    let opts = extract_mle_opts(tol_cost, max_iter)?;
    let fit = with_f64_slice(py, x, |data| Ok(mle_with_options(data, &opts)?))?;
    estimate_to_dict(py, fit.estimate)
}

/// Indirect moment-matching estimate as `{"Rho": ρ̂, "P": p̂}`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn vsk_imm<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyDict>> {
    let est = with_f64_slice(py, x, |data| Ok(imm(data)?))?;
    estimate_to_dict(py, est)
}

/// Direct moment-matching estimate as `{"Rho": ρ̂, "P": p̂}`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn vsk_dmm<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyDict>> {
    let est = with_f64_slice(py, x, |data| Ok(dmm(data)?))?;
    estimate_to_dict(py, est)
}

/// Quantile-based estimate as `{"Rho": ρ̂, "P": p̂}`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn vsk_qbe<'py>(py: Python<'py>, x: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyDict>> {
    let est = with_f64_slice(py, x, |data| Ok(qbe(data)?))?;
    estimate_to_dict(py, est)
}

/// Density as a list of `{"x", "pdf"}` dicts.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn vsk_pdf<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, rho: f64, p: f64,
) -> PyResult<Vec<Bound<'py, PyDict>>> {
    let points = with_f64_slice(py, x, |data| Ok(pdf(data, rho, p)?))?;
    points
        .into_iter()
        .map(|pt| {
            let dict = PyDict::new(py);
            dict.set_item("x", pt.x)?;
            dict.set_item("pdf", pt.pdf)?;
            Ok(dict)
        })
        .collect()
}

/// Distribution function as a list of `{"x", "cdf"}` dicts.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn vsk_cdf<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, rho: f64, p: f64,
) -> PyResult<Vec<Bound<'py, PyDict>>> {
    let points = with_f64_slice(py, x, |data| Ok(cdf(data, rho, p)?))?;
    points
        .into_iter()
        .map(|pt| {
            let dict = PyDict::new(py);
            dict.set_item("x", pt.x)?;
            dict.set_item("cdf", pt.cdf)?;
            Ok(dict)
        })
        .collect()
}

/// Quantiles as a list of `{"Alpha", "ppf"}` dicts.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn vsk_ppf<'py>(
    py: Python<'py>, alpha: &Bound<'py, PyAny>, rho: f64, p: f64,
) -> PyResult<Vec<Bound<'py, PyDict>>> {
    let points = with_f64_slice(py, alpha, |data| Ok(ppf(data, rho, p)?))?;
    points
        .into_iter()
        .map(|pt| {
            let dict = PyDict::new(py);
            dict.set_item("Alpha", pt.alpha)?;
            dict.set_item("ppf", pt.ppf)?;
            Ok(dict)
        })
        .collect()
}

/// `n` seeded draws from `Vasicek(rho, p)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (n, rho, p, seed = 1))]
fn vsk_rvs(n: usize, rho: f64, p: f64, seed: u64) -> PyResult<Vec<f64>> {
    Ok(rvs(n, rho, p, seed)?)
}

/// Chi-square goodness of fit as `{"stat": {"chisq", "pvalue"}, "tbl": [...]}`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "gof_chisq", signature = (x, rho, p, n = 10))]
fn py_gof_chisq<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, rho: f64, p: f64, n: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let outcome = with_f64_slice(py, x, |data| Ok(gof_chisq(data, rho, p, n)?))?;

    let stat = PyDict::new(py);
    stat.set_item("chisq", outcome.chisq())?;
    stat.set_item("pvalue", outcome.pvalue())?;

    let rows = outcome
        .table()
        .iter()
        .map(|row| {
            let dict = PyDict::new(py);
            dict.set_item("group", row.group)?;
            dict.set_item("lower", row.lower)?;
            dict.set_item("upper", row.upper)?;
            dict.set_item("observed", row.observed)?;
            dict.set_item("expected", row.expected)?;
            Ok(dict)
        })
        .collect::<PyResult<Vec<_>>>()?;

    let dict = PyDict::new(py);
    dict.set_item("stat", stat)?;
    dict.set_item("tbl", rows)?;
    Ok(dict)
}

/// Kolmogorov–Smirnov goodness of fit as `{"ks", "pvalue"}`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "gof_ks")]
fn py_gof_ks<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, rho: f64, p: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let outcome = with_f64_slice(py, x, |data| Ok(gof_ks(data, rho, p)?))?;
    let dict = PyDict::new(py);
    dict.set_item("ks", outcome.ks())?;
    dict.set_item("pvalue", outcome.pvalue())?;
    Ok(dict)
}

/// `_vasicek` — Python extension module initializer.
///
/// Registers the estimator, distribution, and goodness-of-fit functions at
/// module level; a thin pure-Python package re-exports them.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _vasicek<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(vsk_mle, m)?)?;
    m.add_function(wrap_pyfunction!(vsk_imm, m)?)?;
    m.add_function(wrap_pyfunction!(vsk_dmm, m)?)?;
    m.add_function(wrap_pyfunction!(vsk_qbe, m)?)?;
    m.add_function(wrap_pyfunction!(vsk_pdf, m)?)?;
    m.add_function(wrap_pyfunction!(vsk_cdf, m)?)?;
    m.add_function(wrap_pyfunction!(vsk_ppf, m)?)?;
    m.add_function(wrap_pyfunction!(vsk_rvs, m)?)?;
    m.add_function(wrap_pyfunction!(py_gof_chisq, m)?)?;
    m.add_function(wrap_pyfunction!(py_gof_ks, m)?)?;
    Ok(())
}
