mod descent;
mod gradient_descent;
mod gradient_descent_with_momentum;
mod optimizer;

use log::info;

use crate::{
    config::{Algorithm, RunConfig},
    error::Result,
    trace::{TraceSink, TraceWriter},
};

pub use descent::{minimize, OptimizeResult, Status};
pub use gradient_descent::GradientDescent;
pub use gradient_descent_with_momentum::GradientDescentWithMomentum;
pub use optimizer::Optimizer;

/// Builds the update rule a configuration asks for, with fresh per-run state.
pub fn build_optimizer(config: &RunConfig) -> Box<dyn Optimizer> {
    match config.algorithm() {
        Algorithm::Steepest => Box::new(GradientDescent::new(config.step_size())),
        Algorithm::Momentum { beta } => Box::new(GradientDescentWithMomentum::new(
            config.dimensionality(),
            config.step_size(),
            beta,
        )),
    }
}

/// Runs one optimization, writing its full trace into `sink`.
///
/// The run owns its point, gradient and velocity. Nothing is shared between calls, so
/// the same configuration always produces the same trace.
///
/// # Errors
/// Returns an `OptimizerErr` if the sink fails or the computation stops being finite.
pub fn optimize<S: TraceSink>(config: &RunConfig, sink: S) -> Result<OptimizeResult> {
    info!(
        "minimizing {} in {} dimension(s) with {}",
        config.function(),
        config.dimensionality(),
        config.algorithm()
    );

    let mut trace = TraceWriter::new(sink);
    trace.header(config)?;

    let mut rule = build_optimizer(config);
    let result = minimize(config.function(), config, rule.as_mut(), &mut trace)?;

    info!(
        "finished after {} iteration(s): {:?}, f = {}",
        result.iters, result.status, result.f
    );
    Ok(result)
}
