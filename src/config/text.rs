use std::str::FromStr;

use super::RunConfigDraft;
use crate::error::{OptimizerErr, Result};

/// Parses the line-oriented config format.
///
/// The document holds eight fields, one per line and in this order: function name,
/// algorithm name, dimensionality, iterations, tolerance, step size, beta and the
/// space-separated initial point. The beta line is always consumed but only read
/// for the `momentum` algorithm.
pub fn parse_text(content: &str) -> Result<RunConfigDraft> {
    let mut lines = Lines::new(content);

    let function = lines.next("function")?.to_string();
    let algorithm = lines.next("algorithm")?.to_string();
    let dimensionality = lines.parse("dimensionality")?;
    let iterations = lines.parse("iterations")?;
    let tolerance = lines.parse("tolerance")?;
    let step_size = lines.parse("step size")?;

    let beta = if algorithm.eq_ignore_ascii_case("momentum") {
        Some(lines.parse("beta")?)
    } else {
        lines.next("beta")?;
        None
    };

    let (line, raw) = lines.next_numbered("initial point")?;
    let initial_point = raw
        .split_whitespace()
        .map(|v| field(line, "initial point", v))
        .collect::<Result<Vec<f64>>>()?;

    Ok(RunConfigDraft {
        function,
        algorithm,
        dimensionality,
        iterations,
        tolerance,
        step_size,
        beta,
        initial_point,
    })
}

struct Lines<'a> {
    inner: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            inner: content.lines(),
            line: 0,
        }
    }

    /// Returns the next trimmed line with its 1-based number.
    fn next_numbered(&mut self, field: &'static str) -> Result<(usize, &'a str)> {
        self.line += 1;
        match self.inner.next() {
            Some(raw) => Ok((self.line, raw.trim())),
            None => Err(OptimizerErr::MissingField {
                line: self.line,
                field,
            }),
        }
    }

    fn next(&mut self, field: &'static str) -> Result<&'a str> {
        self.next_numbered(field).map(|(_, raw)| raw)
    }

    fn parse<T: FromStr>(&mut self, name: &'static str) -> Result<T> {
        let (line, raw) = self.next_numbered(name)?;
        field(line, name, raw)
    }
}

fn field<T: FromStr>(line: usize, name: &'static str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| OptimizerErr::InvalidField {
        line,
        field: name,
        value: raw.to_string(),
    })
}
