//! Buffering decorator for write targets.

use std::fmt;
use std::io::{self, BufWriter, Write};

/// Default number of bytes collected before they are pushed to the inner writer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;

/// Largest buffer a `BufferedSink` allocates; larger requests are clamped.
pub const MAX_BUFFER_CAPACITY: usize = 8 * 1024 * 1024;

/// Collects written bytes in memory and delivers them to the inner writer on
/// [`flush`](Write::flush), or earlier when the capacity would be exceeded.
///
/// Releasing the inner writer with [`into_inner`](BufferedSink::into_inner)
/// never flushes; bytes still pending at that point are discarded.
pub struct BufferedSink<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> BufferedSink<W> {
    /// Wrap `inner` with a buffer of [`DEFAULT_BUFFER_CAPACITY`] bytes.
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, inner)
    }

    /// Wrap `inner` with a buffer of `capacity` bytes, clamped to
    /// `1..=MAX_BUFFER_CAPACITY`.
    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        let capacity = capacity.clamp(1, MAX_BUFFER_CAPACITY);
        Self {
            inner: BufWriter::with_capacity(capacity, inner),
        }
    }

    /// Bytes written but not yet delivered.
    pub fn buffer(&self) -> &[u8] {
        self.inner.buffer()
    }

    /// Number of bytes the buffer holds before it is pushed on.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Borrow the inner writer.
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }

    /// Unwrap the inner writer, discarding undelivered bytes.
    pub fn into_inner(self) -> W {
        let (inner, _pending) = self.inner.into_parts();
        inner
    }
}

impl<W: Write> Write for BufferedSink<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.inner.write(data)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.inner.write_all(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write + fmt::Debug> fmt::Debug for BufferedSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedSink")
            .field("inner", self.get_ref())
            .field("buffered", &self.buffer().len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
