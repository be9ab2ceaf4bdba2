//! estimation::types — result records and method selection.
use crate::{
    distribution::{Vasicek, VskError, VskResult},
    optimization::loglik_optimizer::OptimOutcome,
    utils::{ROUND_DECIMALS, round_to},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Estimated Vasicek parameters, rounded to 10 decimals.
///
/// Serializes with the keys `Rho` and `P`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    #[serde(rename = "Rho")]
    pub rho: f64,
    #[serde(rename = "P")]
    pub p: f64,
}

impl Estimate {
    pub(crate) fn rounded(rho: f64, p: f64) -> Self {
        Self { rho: round_to(rho, ROUND_DECIMALS), p: round_to(p, ROUND_DECIMALS) }
    }

    /// Distribution at the estimated parameters.
    ///
    /// # Errors
    /// Parameter validation, e.g. when a rounded `p` hits the boundary.
    pub fn distribution(&self) -> VskResult<Vasicek> {
        Vasicek::new(self.rho, self.p)
    }
}

/// Maximum-likelihood estimate together with the optimizer diagnostics.
///
/// `outcome.value` is the maximized log-likelihood of the probit-transformed
/// sample; `outcome.theta_hat` holds the unrounded `(ρ, p)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MleFit {
    pub estimate: Estimate,
    pub outcome: OptimOutcome,
}

/// Estimator selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstimationMethod {
    /// Maximum likelihood.
    Mle,
    /// Indirect moment matching on the probit scale.
    Imm,
    /// Direct moment matching on the original scale.
    Dmm,
    /// Quantile-based (median / inter-quartile range) estimator.
    Qbe,
}

impl FromStr for EstimationMethod {
    type Err = VskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mle" => Ok(EstimationMethod::Mle),
            "imm" => Ok(EstimationMethod::Imm),
            "dmm" => Ok(EstimationMethod::Dmm),
            "qbe" => Ok(EstimationMethod::Qbe),
            _ => Err(VskError::UnknownMethod { name: s.to_string() }),
        }
    }
}

impl fmt::Display for EstimationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EstimationMethod::Mle => "mle",
            EstimationMethod::Imm => "imm",
            EstimationMethod::Dmm => "dmm",
            EstimationMethod::Qbe => "qbe",
        };
        f.write_str(name)
    }
}
