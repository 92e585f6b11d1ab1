use super::Optimizer;
use crate::{
    error::{OptimizerErr, Result},
    numeric::floor_round,
};

/// Gradient descent following an exponentially weighted average of past gradients.
#[derive(Debug)]
pub struct GradientDescentWithMomentum {
    step_size: f64,
    beta: f64,
    velocity: Box<[f64]>,
}

impl GradientDescentWithMomentum {
    /// Creates a new `GradientDescentWithMomentum` optimizer.
    ///
    /// # Arguments
    /// * `len` - The dimensionality of the points this instance updates.
    /// * `step_size` - The coefficient scaling every step.
    /// * `beta` - Weight of the previous velocity, `0` degenerates into steepest descent.
    ///
    /// # Returns
    /// A new `GradientDescentWithMomentum` instance with zero velocity.
    pub fn new(len: usize, step_size: f64, beta: f64) -> Self {
        Self {
            step_size,
            beta,
            velocity: vec![0.; len].into_boxed_slice(),
        }
    }

    #[cfg(test)]
    fn velocity(&self) -> &[f64] {
        &self.velocity
    }
}

impl Optimizer for GradientDescentWithMomentum {
    fn update_params(&mut self, grad: &[f64], params: &mut [f64]) -> Result<()> {
        if grad.len() != params.len() || grad.len() != self.velocity.len() {
            return Err(OptimizerErr::DimensionalityMismatch {
                expected: self.velocity.len(),
                got: grad.len(),
            });
        }

        let step = self.step_size;
        let beta = self.beta;

        params
            .iter_mut()
            .zip(grad)
            .zip(self.velocity.iter_mut())
            .for_each(|((p, g), v)| {
                *v = beta * *v + (1. - beta) * g;
                *p = floor_round(*p - step * *v);
            });

        Ok(())
    }
}
