//! Validated Vasicek parameters.
use crate::distribution::{
    errors::{VskError, VskResult},
    normal::norm_ppf,
};
use serde::{Deserialize, Serialize};

/// Vasicek parameters `(ρ, p)`.
///
/// - `rho`: asset correlation, `0 ≤ ρ < 1`.
/// - `p`: unconditional mean probability, `0 < p < 1`.
///
/// Construct through [`VasicekParams::new`]; fields are read-only once
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VasicekParams {
    #[serde(rename = "Rho")]
    rho: f64,
    #[serde(rename = "P")]
    p: f64,
}

impl VasicekParams {
    /// Validate and build a parameter pair.
    ///
    /// # Errors
    /// - [`VskError::InvalidRho`] unless `rho` is finite with `0 ≤ rho < 1`.
    /// - [`VskError::InvalidP`] unless `p` is finite with `0 < p < 1`.
    pub fn new(rho: f64, p: f64) -> VskResult<Self> {
        if !rho.is_finite() || !(0.0..1.0).contains(&rho) {
            return Err(VskError::InvalidRho { value: rho });
        }
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(VskError::InvalidP { value: p });
        }
        Ok(Self { rho, p })
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    /// Default threshold `c = Φ⁻¹(p)`.
    pub fn threshold(&self) -> f64 {
        norm_ppf(self.p)
    }
}
