use super::Optimizer;
use crate::{
    error::{OptimizerErr, Result},
    numeric::floor_round,
};

/// Steepest descent: a fixed-size step against the gradient.
#[derive(Debug)]
pub struct GradientDescent {
    step_size: f64,
}

impl GradientDescent {
    /// Creates a new `GradientDescent` optimizer.
    ///
    /// # Arguments
    /// * `step_size` - The coefficient scaling every step.
    ///
    /// # Returns
    /// A new `GradientDescent` instance.
    pub fn new(step_size: f64) -> Self {
        Self { step_size }
    }
}

impl Optimizer for GradientDescent {
    fn update_params(&mut self, grad: &[f64], params: &mut [f64]) -> Result<()> {
        if grad.len() != params.len() {
            return Err(OptimizerErr::DimensionalityMismatch {
                expected: params.len(),
                got: grad.len(),
            });
        }

        let step = self.step_size;

        for (p, g) in params.iter_mut().zip(grad) {
            *p = floor_round(*p - step * g);
        }

        Ok(())
    }
}
