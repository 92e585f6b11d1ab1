use log::{debug, warn};

use super::Optimizer;
use crate::{
    config::RunConfig,
    error::{OptimizerErr, Result},
    functions::ObjectiveFunction,
    numeric::{floor_round, norm},
    trace::{IterationRecord, TraceSink, TraceWriter},
};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient norm dropped below the tolerance.
    Converged,
    /// The iteration budget ran out first.
    BudgetExhausted,
}

/// Struct that holds the optimization result.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizeResult {
    pub x: Vec<f64>,
    pub f: f64,
    /// Number of the last reported iteration.
    pub iters: usize,
    /// Gradient norm of the last performed step, `None` if no step was taken.
    pub grad_norm: Option<f64>,
    pub status: Status,
}

impl OptimizeResult {
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Runs the descent loop shared by every update rule.
///
/// Iteration 1 reports the initial point. Every following iteration computes the
/// gradient at the current point, lets `rule` move the point, and reports the new
/// objective value together with the norm of that pre-update gradient. The run
/// converges as soon as that norm is below the tolerance, and otherwise stops after
/// `config.iterations()` reported iterations.
///
/// # Arguments
/// * `objective` - The function to minimize.
/// * `config` - The run parameters, the header must already be written.
/// * `rule` - The update rule, owning any per-run state such as velocity.
/// * `trace` - Receives every record as soon as it's computed.
///
/// # Errors
/// Fails with `NonFinite` if a value, norm or coordinate stops being finite and with
/// `Io` if the trace can't be written.
pub fn minimize<O, S>(
    objective: ObjectiveFunction,
    config: &RunConfig,
    rule: &mut O,
    trace: &mut TraceWriter<S>,
) -> Result<OptimizeResult>
where
    O: Optimizer + ?Sized,
    S: TraceSink,
{
    let mut x = config.initial_point().to_vec();
    let mut grad = vec![0.; x.len()];
    let budget = config.iterations();
    let tolerance = config.tolerance();

    let mut f = finite(1, "objective value", floor_round(objective.compute(&x)))?;
    trace.record(&IterationRecord {
        iteration: 1,
        value: f,
        point: &x,
        grad_norm: None,
    })?;

    let mut grad_norm = None;

    for k in 2..=budget {
        objective.gradient_into(&x, &mut grad);
        let norm = finite(k, "gradient norm", norm(&grad))?;

        rule.update_params(&grad, &mut x)?;
        if x.iter().any(|xi| !xi.is_finite()) {
            return Err(OptimizerErr::NonFinite {
                iteration: k,
                quantity: "coordinate",
            });
        }

        f = finite(k, "objective value", floor_round(objective.compute(&x)))?;
        grad_norm = Some(norm);

        trace.record(&IterationRecord {
            iteration: k,
            value: f,
            point: &x,
            grad_norm,
        })?;
        debug!("iteration {k}: f = {f}, |grad| = {norm}");

        if norm < tolerance {
            trace.converged(k)?;
            trace.completed()?;
            return Ok(OptimizeResult {
                x,
                f,
                iters: k,
                grad_norm,
                status: Status::Converged,
            });
        }
    }

    warn!("maximum of {budget} iterations reached without satisfying the tolerance");
    trace.budget_exhausted()?;
    trace.completed()?;

    Ok(OptimizeResult {
        x,
        f,
        iters: budget,
        grad_norm,
        status: Status::BudgetExhausted,
    })
}

fn finite(iteration: usize, quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OptimizerErr::NonFinite {
            iteration,
            quantity,
        })
    }
}
