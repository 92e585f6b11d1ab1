use crate::error::{OptimizerErr, Result};

/// The path a run took, recovered from its rendered trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub function_name: Option<String>,
    /// One point per reported iteration, in order.
    pub points: Vec<Vec<f64>>,
    /// Objective value at every point of `points`.
    pub values: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index and value of the lowest reported objective value.
    pub fn best(&self) -> Option<(usize, f64)> {
        self.values
            .iter()
            .copied()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
    }
}

/// Reads a trace produced by [`super::TraceWriter`] back into a [`Trajectory`].
///
/// Lines other than the function name, objective values and x-values are skipped.
pub fn parse_trace(content: &str) -> Result<Trajectory> {
    let mut trajectory = Trajectory::default();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();

        if let Some(name) = line.strip_prefix("Objective Function: ") {
            trajectory.function_name = Some(name.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Objective Function Value:") {
            trajectory.values.push(number(idx + 1, "objective value", value)?);
        } else if let Some(values) = line.strip_prefix("x-values:") {
            let point = values
                .split_whitespace()
                .map(|v| number(idx + 1, "x-values", v))
                .collect::<Result<Vec<_>>>()?;
            trajectory.points.push(point);
        }
    }

    if trajectory.points.len() != trajectory.values.len() {
        return Err(OptimizerErr::InvalidParameter {
            name: "trace",
            value: format!(
                "{} values, {} points",
                trajectory.values.len(),
                trajectory.points.len()
            ),
            reason: "every objective value needs its x-values",
        });
    }

    Ok(trajectory)
}

fn number(line: usize, field: &'static str, raw: &str) -> Result<f64> {
    let raw = raw.trim();
    raw.parse().map_err(|_| OptimizerErr::InvalidField {
        line,
        field,
        value: raw.to_string(),
    })
}
