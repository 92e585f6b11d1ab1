use crate::error::Result;

/// Defines how a descent run moves its point given the current gradient.
pub trait Optimizer {
    /// Updates the provided point using the gradient computed at it.
    ///
    /// # Arguments
    /// * `grad` - The gradient at `params`.
    /// * `params` - The point to update in place, every coordinate is floored to five decimals.
    ///
    /// # Returns
    /// An error if there's a mismatch in the sizes of `grad` and `params`.
    fn update_params(&mut self, grad: &[f64], params: &mut [f64]) -> Result<()>;
}
