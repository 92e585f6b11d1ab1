use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, OptimizerErr>;

/// Failures that abort an optimization run.
///
/// Every variant is terminal for the run that produced it, nothing is retried.
#[derive(Debug)]
pub enum OptimizerErr {
    Io(io::Error),
    Json(serde_json::Error),
    UnknownFunction(String),
    UnknownAlgorithm(String),
    DimensionalityMismatch {
        expected: usize,
        got: usize,
    },
    OutOfBounds {
        index: usize,
        value: f64,
        low: f64,
        high: f64,
    },
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    MissingField {
        line: usize,
        field: &'static str,
    },
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
    NonFinite {
        iteration: usize,
        quantity: &'static str,
    },
}

impl fmt::Display for OptimizerErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizerErr::Io(e) => write!(f, "io error: {e}"),
            OptimizerErr::Json(e) => write!(f, "invalid JSON config: {e}"),
            OptimizerErr::UnknownFunction(name) => {
                write!(f, "unknown objective function: {name}")
            }
            OptimizerErr::UnknownAlgorithm(name) => write!(f, "unknown algorithm: {name}"),
            OptimizerErr::DimensionalityMismatch { expected, got } => write!(
                f,
                "initial point dimensionality mismatch: expected {expected} values, got {got}"
            ),
            OptimizerErr::OutOfBounds {
                index,
                value,
                low,
                high,
            } => write!(
                f,
                "initial point coordinate {index} ({value}) is outside the bounds [{low:?}, {high:?}]"
            ),
            OptimizerErr::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "invalid {name} ({value}): {reason}"),
            OptimizerErr::MissingField { line, field } => {
                write!(f, "config line {line}: missing field {field}")
            }
            OptimizerErr::InvalidField { line, field, value } => {
                write!(f, "config line {line}: cannot parse {field} from '{value}'")
            }
            OptimizerErr::NonFinite {
                iteration,
                quantity,
            } => write!(f, "non-finite {quantity} at iteration {iteration}"),
        }
    }
}

impl Error for OptimizerErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            OptimizerErr::Io(e) => Some(e),
            OptimizerErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for OptimizerErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for OptimizerErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
