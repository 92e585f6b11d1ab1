use std::{
    fs::File,
    io::{self, Stdout, Write},
    path::Path,
};

/// Destination of a run's trace, one line at a time.
pub trait TraceSink {
    /// Appends `line` to the trace. Lines never contain a trailing newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Sink writing every line to an `io::Write` and flushing it right away, so the trace
/// can be tailed while the run is in progress.
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl WriterSink<Stdout> {
    /// Sink over the process' standard output.
    pub fn console() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<File> {
    /// Creates (or truncates) the file at `path` and returns a sink over it.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        File::create(path).map(Self::new)
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.inner.flush()
    }
}

/// Collects the trace in memory.
impl TraceSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("Iteration 1:").unwrap();
        sink.write_line("").unwrap();

        assert_eq!(sink.into_inner(), b"Iteration 1:\n\n");
    }

    #[test]
    fn failing_writers_surface_io_errors() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = WriterSink::new(Closed).write_line("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
