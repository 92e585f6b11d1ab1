use super::RunConfigDraft;
use crate::error::Result;

/// Parses a JSON config document.
///
/// ```json
/// {
///     "function": "rosenbrock",
///     "algorithm": "momentum",
///     "dimensionality": 2,
///     "iterations": 500,
///     "tolerance": 0.0001,
///     "step_size": 0.001,
///     "beta": 0.9,
///     "initial_point": [-1.2, 1.0]
/// }
/// ```
///
/// `beta` may be omitted.
pub fn parse_json(content: &str) -> Result<RunConfigDraft> {
    Ok(serde_json::from_str(content)?)
}
