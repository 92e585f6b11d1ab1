use std::io;

use super::TraceSink;
use crate::{
    config::RunConfig,
    numeric::{format_value, format_values},
};

/// A single reported step of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord<'a> {
    /// 1-based; iteration 1 is the initial point.
    pub iteration: usize,
    pub value: f64,
    pub point: &'a [f64],
    /// Norm of the gradient that produced `point`. `None` for iteration 1.
    pub grad_norm: Option<f64>,
}

/// Renders a run into the lines of its trace.
pub struct TraceWriter<S> {
    sink: S,
}

impl<S: TraceSink> TraceWriter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Writes the run parameters followed by the start of the process section.
    pub fn header(&mut self, config: &RunConfig) -> io::Result<()> {
        let initial_point = config
            .initial_point()
            .iter()
            .map(|v| format!("{v:?}"))
            .collect::<Vec<_>>()
            .join(" ");

        self.line(&format!("Objective Function: {}", config.function().name()))?;
        self.line(&format!("Algorithm: {}", config.algorithm()))?;
        self.line(&format!("Dimensionality: {}", config.dimensionality()))?;
        self.line(&format!("Initial Point: {initial_point}"))?;
        self.line(&format!("Iterations: {}", config.iterations()))?;
        self.line(&format!("Tolerance: {}", format_value(config.tolerance())))?;
        self.line(&format!("Step Size: {}", format_value(config.step_size())))?;
        self.line("")?;
        self.line("Optimization process:")
    }

    pub fn record(&mut self, record: &IterationRecord<'_>) -> io::Result<()> {
        self.line(&format!("Iteration {}:", record.iteration))?;
        self.line(&format!(
            "Objective Function Value: {}",
            format_value(record.value)
        ))?;
        self.line(&format!("x-values: {}", format_values(record.point)))?;
        if let Some(norm) = record.grad_norm {
            self.line(&format!("Current Tolerance: {}", format_value(norm)))?;
        }
        self.line("")
    }

    pub fn converged(&mut self, iteration: usize) -> io::Result<()> {
        self.line(&format!("Convergence reached after {iteration} iterations."))?;
        self.line("")
    }

    pub fn budget_exhausted(&mut self) -> io::Result<()> {
        self.line("Maximum iterations reached without satisfying the tolerance.")?;
        self.line("")
    }

    pub fn completed(&mut self) -> io::Result<()> {
        self.line("Optimization process completed.")
    }

    fn line(&mut self, line: &str) -> io::Result<()> {
        self.sink.write_line(line)
    }
}
