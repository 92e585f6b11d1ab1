//! Gradient-based minimization of a small family of test functions.
//!
//! - `functions`: the objective functions and their analytic gradients
//! - `optimization`: steepest descent and momentum descent over one shared loop
//! - `config`: validated run parameters and their file formats
//! - `trace`: the line-oriented trace every run produces
//!
//! Every reported value is floored to five decimals by `numeric`, and the convergence
//! test compares that same floored gradient norm against the tolerance.

pub mod config;
pub mod error;
pub mod functions;
pub mod numeric;
pub mod optimization;
pub mod trace;
pub mod validation;

pub use config::{Algorithm, RunConfig, RunConfigDraft};
pub use error::{OptimizerErr, Result};
pub use functions::{Bounds, ObjectiveFunction};
pub use optimization::{optimize, OptimizeResult, Status};
pub use trace::{TraceSink, WriterSink};
