use crate::{
    error::{OptimizerErr, Result},
    functions::Bounds,
};

/// Checks that every coordinate of `point` lies inside `bounds`.
///
/// # Returns
/// `OutOfBounds` naming the first offending coordinate.
pub fn validate_bounds(point: &[f64], bounds: Bounds) -> Result<()> {
    match point.iter().position(|&v| !bounds.contains(v)) {
        Some(index) => Err(OptimizerErr::OutOfBounds {
            index,
            value: point[index],
            low: bounds.low,
            high: bounds.high,
        }),
        None => Ok(()),
    }
}
