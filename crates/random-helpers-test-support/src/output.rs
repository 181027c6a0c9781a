//! Test writers — `Write` implementations that simulate a broken stream.

use std::io::{self, Write};

/// A writer that fails every write and flush with `BrokenPipe`, like stdout
/// after the reading end of a pipe has closed.
#[derive(Debug)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}
