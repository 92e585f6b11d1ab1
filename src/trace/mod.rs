mod parse;
mod sink;
mod writer;

pub use parse::{parse_trace, Trajectory};
pub use sink::{TraceSink, WriterSink};
pub use writer::{IterationRecord, TraceWriter};
