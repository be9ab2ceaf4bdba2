//! Adapter that exposes a [`ScalarObjective`] as an `argmin` problem.
use crate::optimization::{bounded_optimizer::ScalarObjective, errors::OptError};
use argmin::core::{CostFunction, Error};

/// Bridges a [`ScalarObjective`] to `argmin`'s `CostFunction` over `f64`.
#[derive(Debug, Clone)]
pub struct ScalarAdapter<'a, G: ScalarObjective> {
    pub g: &'a G,
    pub data: &'a G::Data,
}

impl<'a, G: ScalarObjective> ScalarAdapter<'a, G> {
    pub fn new(g: &'a G, data: &'a G::Data) -> Self {
        Self { g, data }
    }
}

impl<'a, G: ScalarObjective> CostFunction for ScalarAdapter<'a, G> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &f64) -> Result<f64, Error> {
        let output = self.g.value(*x, self.data)?;
        if output.is_nan() {
            return Err((OptError::NanObjective { theta: vec![*x] }).into());
        }
        Ok(output)
    }
}
