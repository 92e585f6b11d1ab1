use std::{fmt, num::NonZeroUsize};

use serde::Deserialize;

use crate::{
    error::{OptimizerErr, Result},
    functions::ObjectiveFunction,
    validation::validate_bounds,
};

/// Momentum coefficient used when a momentum run doesn't specify one.
pub const DEFAULT_BETA: f64 = 0.9;

/// The descent rule a run applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    Steepest,
    Momentum { beta: f64 },
}

impl Algorithm {
    /// Resolves an algorithm from its configuration name.
    ///
    /// # Arguments
    /// * `name` - Either `steepest` or `momentum`, case-insensitive.
    /// * `beta` - Momentum coefficient, ignored for `steepest`. Defaults to [`DEFAULT_BETA`].
    pub fn from_name(name: &str, beta: Option<f64>) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "steepest" => Ok(Self::Steepest),
            "momentum" => {
                let beta = beta.unwrap_or(DEFAULT_BETA);
                if !(0.0..=1.0).contains(&beta) {
                    return Err(OptimizerErr::InvalidParameter {
                        name: "beta",
                        value: beta.to_string(),
                        reason: "must lie in [0, 1]",
                    });
                }
                Ok(Self::Momentum { beta })
            }
            _ => Err(OptimizerErr::UnknownAlgorithm(name.trim().to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steepest => f.write_str("Steepest Descent"),
            Self::Momentum { beta } => write!(f, "Momentum Descent (beta={beta:?})"),
        }
    }
}

/// An unvalidated run configuration, as read from a config document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfigDraft {
    pub function: String,
    pub algorithm: String,
    pub dimensionality: usize,
    pub iterations: usize,
    pub tolerance: f64,
    pub step_size: f64,
    #[serde(default)]
    pub beta: Option<f64>,
    pub initial_point: Vec<f64>,
}

/// Immutable, fully validated parameters of one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    function: ObjectiveFunction,
    algorithm: Algorithm,
    iterations: NonZeroUsize,
    tolerance: f64,
    step_size: f64,
    initial_point: Vec<f64>,
}

impl RunConfig {
    /// Creates a new `RunConfig`.
    ///
    /// # Arguments
    /// * `function` - The function to minimize.
    /// * `algorithm` - The descent rule.
    /// * `iterations` - The iteration budget, counting the initial point as iteration 1.
    /// * `tolerance` - Gradient norm below which the run converges.
    /// * `step_size` - Scale of every descent step.
    /// * `initial_point` - Starting coordinates, its length is the dimensionality.
    ///
    /// # Returns
    /// The configuration, or the first violated constraint. The initial point is checked
    /// against `function`'s own bounds.
    pub fn new(
        function: ObjectiveFunction,
        algorithm: Algorithm,
        iterations: usize,
        tolerance: f64,
        step_size: f64,
        initial_point: Vec<f64>,
    ) -> Result<Self> {
        let iterations = NonZeroUsize::new(iterations).ok_or_else(|| OptimizerErr::InvalidParameter {
            name: "iterations",
            value: iterations.to_string(),
            reason: "must be positive",
        })?;

        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(OptimizerErr::InvalidParameter {
                name: "tolerance",
                value: tolerance.to_string(),
                reason: "must be finite and non-negative",
            });
        }

        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(OptimizerErr::InvalidParameter {
                name: "step size",
                value: step_size.to_string(),
                reason: "must be finite and positive",
            });
        }

        if initial_point.is_empty() {
            return Err(OptimizerErr::InvalidParameter {
                name: "dimensionality",
                value: "0".into(),
                reason: "must be positive",
            });
        }

        validate_bounds(&initial_point, function.bounds())?;

        Ok(Self {
            function,
            algorithm,
            iterations,
            tolerance,
            step_size,
            initial_point,
        })
    }

    pub fn function(&self) -> ObjectiveFunction {
        self.function
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn dimensionality(&self) -> usize {
        self.initial_point.len()
    }

    pub fn iterations(&self) -> usize {
        self.iterations.get()
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn initial_point(&self) -> &[f64] {
        &self.initial_point
    }
}

impl TryFrom<RunConfigDraft> for RunConfig {
    type Error = OptimizerErr;

    fn try_from(draft: RunConfigDraft) -> Result<Self> {
        let function = draft.function.parse::<ObjectiveFunction>()?;
        let algorithm = Algorithm::from_name(&draft.algorithm, draft.beta)?;

        if draft.dimensionality == 0 {
            return Err(OptimizerErr::InvalidParameter {
                name: "dimensionality",
                value: "0".into(),
                reason: "must be positive",
            });
        }

        if draft.initial_point.len() != draft.dimensionality {
            return Err(OptimizerErr::DimensionalityMismatch {
                expected: draft.dimensionality,
                got: draft.initial_point.len(),
            });
        }

        Self::new(
            function,
            algorithm,
            draft.iterations,
            draft.tolerance,
            draft.step_size,
            draft.initial_point,
        )
    }
}
