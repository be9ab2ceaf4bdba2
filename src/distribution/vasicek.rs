//! distribution::vasicek — the Vasicek distribution as a `statrs`/`rand`
//! distribution type.
//!
//! Purpose
//! -------
//! Model the large-homogeneous-portfolio default rate
//! `X = Φ((c + √ρ·Z) / √(1 − ρ))`, `Z ~ N(0, 1)`, `c = Φ⁻¹(p)`, as a value
//! type that plugs into the ecosystem traits: `statrs`' [`Continuous`] and
//! [`ContinuousCDF`] for pointwise evaluation and `rand`'s
//! [`Distribution`] for sampling.
//!
//! Key behaviors
//! -------------
//! With `z = Φ⁻¹(x)`:
//! - density `f(x) = √((1 − ρ)/ρ) · exp(−(√(1 − ρ)·z − c)²/(2ρ) + z²/2)`,
//! - distribution `F(x) = Φ((√(1 − ρ)·z − c)/√ρ)`,
//! - quantile `F⁻¹(α) = Φ((c + √ρ·Φ⁻¹(α))/√(1 − ρ))`,
//! - `E[X] = p`, `Var[X] = Φ₂(c, c; ρ) − p²`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameters are validated once at construction ([`VasicekParams`]).
//! - Support is `[0, 1]`: the density is `0` outside `(0, 1)`, the CDF is
//!   `0` below and `1` above.
//! - `ρ = 0` degenerates to a point mass at `p`; the functions return the
//!   corresponding limits instead of `0/0`.
//! - Out-of-range quantile levels yield `NaN` rather than a panic.

use crate::distribution::{
    errors::VskResult,
    normal::{bivariate_normal_cdf, norm_cdf, norm_ppf},
    params::VasicekParams,
};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use statrs::{
    distribution::{Continuous, ContinuousCDF},
    statistics::{Max, Min},
};

/// Vasicek distribution with correlation `ρ` and mean `p`.
///
/// # Examples
/// ```
/// use statrs::distribution::{Continuous, ContinuousCDF};
/// use vasicek::distribution::Vasicek;
///
/// let dist = Vasicek::new(0.2, 0.3)?;
/// let x = dist.inverse_cdf(0.9);
/// assert!((dist.cdf(x) - 0.9).abs() < 1e-10);
/// assert!(dist.pdf(x) > 0.0);
/// # Ok::<(), vasicek::distribution::VskError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vasicek {
    params: VasicekParams,
    c: f64,
}

impl Vasicek {
    /// # Errors
    /// Propagates parameter validation from [`VasicekParams::new`].
    pub fn new(rho: f64, p: f64) -> VskResult<Self> {
        Ok(Self::from_params(VasicekParams::new(rho, p)?))
    }

    pub fn from_params(params: VasicekParams) -> Self {
        Self { params, c: params.threshold() }
    }

    pub fn params(&self) -> VasicekParams {
        self.params
    }

    pub fn rho(&self) -> f64 {
        self.params.rho()
    }

    pub fn p(&self) -> f64 {
        self.params.p()
    }

    pub fn mean(&self) -> f64 {
        self.p()
    }

    /// `Var[X] = Φ₂(c, c; ρ) − p²`.
    pub fn variance(&self) -> f64 {
        bivariate_normal_cdf(self.c, self.c, self.rho()) - self.p() * self.p()
    }

    /// Map a standard-normal systematic factor `z` to a default rate.
    pub fn conditional_rate(&self, z: f64) -> f64 {
        let rho = self.rho();
        if rho == 0.0 {
            return self.p();
        }
        norm_cdf((self.c + rho.sqrt() * z) / (1.0 - rho).sqrt())
    }
}

/// Log-density at probit `z = Φ⁻¹(x)` for correlation `rho > 0` and
/// threshold `c`.
pub(crate) fn ln_pdf_probit(z: f64, rho: f64, c: f64) -> f64 {
    let dev = (1.0 - rho).sqrt() * z - c;
    0.5 * ((1.0 - rho) / rho).ln() - dev * dev / (2.0 * rho) + 0.5 * z * z
}

impl Continuous<f64, f64> for Vasicek {
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 || x >= 1.0 {
            return 0.0;
        }
        if self.rho() == 0.0 {
            return if x == self.p() { f64::INFINITY } else { 0.0 };
        }
        ln_pdf_probit(norm_ppf(x), self.rho(), self.c).exp()
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 || x >= 1.0 {
            return f64::NEG_INFINITY;
        }
        if self.rho() == 0.0 {
            return if x == self.p() { f64::INFINITY } else { f64::NEG_INFINITY };
        }
        ln_pdf_probit(norm_ppf(x), self.rho(), self.c)
    }
}

impl ContinuousCDF<f64, f64> for Vasicek {
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let rho = self.rho();
        if rho == 0.0 {
            return if x < self.p() { 0.0 } else { 1.0 };
        }
        norm_cdf(((1.0 - rho).sqrt() * norm_ppf(x) - self.c) / rho.sqrt())
    }

    fn inverse_cdf(&self, alpha: f64) -> f64 {
        if !(0.0..=1.0).contains(&alpha) {
            return f64::NAN;
        }
        if self.rho() == 0.0 {
            return self.p();
        }
        if alpha == 0.0 {
            return 0.0;
        }
        if alpha == 1.0 {
            return 1.0;
        }
        self.conditional_rate(norm_ppf(alpha))
    }
}

impl Min<f64> for Vasicek {
    fn min(&self) -> f64 {
        0.0
    }
}

impl Max<f64> for Vasicek {
    fn max(&self) -> f64 {
        1.0
    }
}

impl Distribution<f64> for Vasicek {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = rng.sample(StandardNormal);
        self.conditional_rate(z)
    }
}
