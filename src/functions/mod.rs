mod ackley;
mod quadratic;
mod rastrigin;
mod rosenbrock;

use std::{fmt, str::FromStr};

use crate::error::OptimizerErr;

/// Interval every coordinate of an initial point must lie in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Bounds {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Bounds shared by every function that doesn't define its own.
pub const DEFAULT_BOUNDS: Bounds = Bounds::new(-5.0, 5.0);

/// Rastrigin's customary search domain.
pub const RASTRIGIN_BOUNDS: Bounds = Bounds::new(-5.12, 5.12);

/// The objective functions a run can minimize.
///
/// The set is closed, every operation dispatches with a `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectiveFunction {
    Quadratic,
    Rosenbrock,
    Ackley,
    Rastrigin,
}

impl ObjectiveFunction {
    /// Every supported function, in menu order.
    pub const ALL: [ObjectiveFunction; 4] = [
        ObjectiveFunction::Quadratic,
        ObjectiveFunction::Rosenbrock,
        ObjectiveFunction::Ackley,
        ObjectiveFunction::Rastrigin,
    ];

    /// Evaluates the function at `x`.
    pub fn compute(&self, x: &[f64]) -> f64 {
        match self {
            Self::Quadratic => quadratic::compute(x),
            Self::Rosenbrock => rosenbrock::compute(x),
            Self::Ackley => ackley::compute(x),
            Self::Rastrigin => rastrigin::compute(x),
        }
    }

    /// Writes the analytic gradient at `x` into `grad`.
    ///
    /// # Arguments
    /// * `x` - The point to differentiate at.
    /// * `grad` - Output buffer, must have the same length as `x`. Every entry is overwritten.
    pub fn gradient_into(&self, x: &[f64], grad: &mut [f64]) {
        debug_assert_eq!(x.len(), grad.len());

        match self {
            Self::Quadratic => quadratic::gradient_into(x, grad),
            Self::Rosenbrock => rosenbrock::gradient_into(x, grad),
            Self::Ackley => ackley::gradient_into(x, grad),
            Self::Rastrigin => rastrigin::gradient_into(x, grad),
        }
    }

    /// Allocating version of [`ObjectiveFunction::gradient_into`].
    pub fn gradient(&self, x: &[f64]) -> Vec<f64> {
        let mut grad = vec![0.; x.len()];
        self.gradient_into(x, &mut grad);
        grad
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rastrigin => RASTRIGIN_BOUNDS,
            Self::Quadratic | Self::Rosenbrock | Self::Ackley => DEFAULT_BOUNDS,
        }
    }

    /// Display name used in trace headers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quadratic => "Quadratic",
            Self::Rosenbrock => "Rosenbrock",
            Self::Ackley => "Ackley",
            Self::Rastrigin => "Rastrigin",
        }
    }
}

impl fmt::Display for ObjectiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectiveFunction {
    type Err = OptimizerErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quadratic" => Ok(Self::Quadratic),
            "rosenbrock" => Ok(Self::Rosenbrock),
            "ackley" => Ok(Self::Ackley),
            "rastrigin" => Ok(Self::Rastrigin),
            _ => Err(OptimizerErr::UnknownFunction(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_at_origin_is_flat() {
        let f = ObjectiveFunction::Quadratic;
        assert_eq!(f.compute(&[0., 0.]), 0.);
        assert_eq!(f.gradient(&[0., 0.]), vec![0., 0.]);
    }

    #[test]
    fn rastrigin_has_its_own_bounds() {
        assert_eq!(ObjectiveFunction::Rastrigin.bounds(), Bounds::new(-5.12, 5.12));
        for f in [
            ObjectiveFunction::Quadratic,
            ObjectiveFunction::Rosenbrock,
            ObjectiveFunction::Ackley,
        ] {
            assert_eq!(f.bounds(), DEFAULT_BOUNDS);
        }
    }

    #[test]
    fn rastrigin_minimum() {
        let f = ObjectiveFunction::Rastrigin;
        assert_eq!(f.compute(&[0., 0., 0.]), 0.);
        assert_eq!(f.gradient(&[0., 0., 0.]), vec![0., 0., 0.]);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(
            " Rosenbrock ".parse::<ObjectiveFunction>().unwrap(),
            ObjectiveFunction::Rosenbrock
        );
        for f in ObjectiveFunction::ALL {
            assert_eq!(f.name().parse::<ObjectiveFunction>().unwrap(), f);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "himmelblau".parse::<ObjectiveFunction>().unwrap_err();
        assert!(matches!(err, OptimizerErr::UnknownFunction(name) if name == "himmelblau"));
    }

    #[test]
    fn bounds_are_closed() {
        assert!(DEFAULT_BOUNDS.contains(5.0));
        assert!(DEFAULT_BOUNDS.contains(-5.0));
        assert!(!DEFAULT_BOUNDS.contains(5.1));
        assert!(RASTRIGIN_BOUNDS.contains(5.1));
    }
}
