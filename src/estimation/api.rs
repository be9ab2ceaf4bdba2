//! Method dispatch over the four estimators.
use crate::{
    distribution::VskResult,
    estimation::{
        mle::mle,
        moments::{dmm, imm},
        quantile::qbe,
        types::{Estimate, EstimationMethod},
    },
};

/// Estimate `(ρ, p)` from `x` with the selected method.
///
/// # Examples
/// ```
/// use vasicek::estimation::{EstimationMethod, estimate};
///
/// let x = [0.05, 0.1, 0.2, 0.3, 0.5];
/// let method: EstimationMethod = "imm".parse()?;
/// let est = estimate(&x, method)?;
/// assert!(est.rho > 0.0 && est.rho < 1.0);
/// # Ok::<(), vasicek::distribution::VskError>(())
/// ```
///
/// # Errors
/// Whatever the selected estimator returns.
pub fn estimate(x: &[f64], method: EstimationMethod) -> VskResult<Estimate> {
    match method {
        EstimationMethod::Mle => mle(x),
        EstimationMethod::Imm => imm(x),
        EstimationMethod::Dmm => dmm(x),
        EstimationMethod::Qbe => qbe(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Dispatch reaches the named estimator.
    //
    // Given
    // -----
    // - A five-point sample and every method.
    //
    // Expect
    // ------
    // - `estimate(x, m)` equals the direct call.
    fn estimate_dispatches_to_each_method() {
        let x = [0.05, 0.1, 0.2, 0.3, 0.5];
        assert_eq!(estimate(&x, EstimationMethod::Mle), mle(&x));
        assert_eq!(estimate(&x, EstimationMethod::Imm), imm(&x));
        assert_eq!(estimate(&x, EstimationMethod::Dmm), dmm(&x));
        assert_eq!(estimate(&x, EstimationMethod::Qbe), qbe(&x));
    }
}
