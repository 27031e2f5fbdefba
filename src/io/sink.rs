//! Write targets and the capability sets a printer can own.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};

use super::BufferedSink;

/// Close capability of a write target.
///
/// Closing consumes the resource, so it can be released at most once.
///
/// Closing a [`File`] never reports an error: std releases the descriptor on
/// drop and discards what `close(2)` returns. Failures to deliver output to a
/// file surface earlier, from the write or flush that hit them.
pub trait Closable: Write + Send {
    /// Release the resource, reporting any failure to do so cleanly.
    fn close(self: Box<Self>) -> io::Result<()>;
}

impl Closable for File {
    fn close(mut self: Box<Self>) -> io::Result<()> {
        // Descriptor is released on drop; close(2) errors are not observable.
        self.flush()
    }
}

/// A write target, tagged with whether it can also be closed.
pub enum Stream {
    /// Write-only target
    Plain(Box<dyn Write + Send>),
    /// Target that must be closed once output is done
    Closable(Box<dyn Closable>),
}

impl Stream {
    /// Stream that is only written to, never closed.
    pub fn plain(writer: impl Write + Send + 'static) -> Self {
        Stream::Plain(Box::new(writer))
    }

    /// Stream whose resource is closed when the printer releases it.
    pub fn closable(resource: impl Closable + 'static) -> Self {
        Stream::Closable(Box::new(resource))
    }

    /// Whether the stream carries the close capability.
    pub fn is_closable(&self) -> bool {
        matches!(self, Stream::Closable(_))
    }

    /// Release the stream, closing it if it carries the close capability.
    pub fn close(self) -> io::Result<()> {
        match self {
            Stream::Plain(_) => Ok(()),
            Stream::Closable(resource) => resource.close(),
        }
    }
}

impl Write for Stream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Stream::Plain(w) => w.write(buf),
            Stream::Closable(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Stream::Plain(w) => w.flush(),
            Stream::Closable(w) => w.flush(),
        }
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Plain(_) => f.write_str("Plain"),
            Stream::Closable(_) => f.write_str("Closable"),
        }
    }
}

/// The sink a printer writes into.
///
/// Each variant is one known combination of capabilities, so the printer
/// never has to inspect the concrete writer type at runtime.
#[derive(Debug)]
pub enum Sink {
    /// In-memory text accumulator
    Text(Vec<u8>),
    /// Writes go straight to the stream
    Direct(Stream),
    /// Writes are collected and delivered on flush
    Buffered(BufferedSink<Stream>),
}

impl Sink {
    /// Empty in-memory text accumulator.
    pub fn text() -> Self {
        Sink::Text(Vec::new())
    }

    /// Unbuffered sink over `stream`.
    pub fn direct(stream: Stream) -> Self {
        Sink::Direct(stream)
    }

    /// Sink buffering output for `stream` with the default capacity.
    pub fn buffered(stream: Stream) -> Self {
        Sink::Buffered(BufferedSink::new(stream))
    }

    /// Sink buffering output for `stream` with `capacity` bytes.
    pub fn buffered_with_capacity(capacity: usize, stream: Stream) -> Self {
        Sink::Buffered(BufferedSink::with_capacity(capacity, stream))
    }

    /// Whether writes go through the buffering decorator.
    pub fn is_buffered(&self) -> bool {
        matches!(self, Sink::Buffered(_))
    }

    /// Whether releasing the sink closes an underlying resource.
    pub fn is_closable(&self) -> bool {
        match self {
            Sink::Text(_) => false,
            Sink::Direct(s) => s.is_closable(),
            Sink::Buffered(b) => b.get_ref().is_closable(),
        }
    }

    /// Accumulated text, if this is the in-memory accumulator.
    pub fn text_contents(&self) -> Option<String> {
        match self {
            Sink::Text(buf) => Some(String::from_utf8_lossy(buf).into_owned()),
            _ => None,
        }
    }

    /// Forward all of `bytes` to the underlying target.
    pub fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Text(buf) => buf.extend_from_slice(bytes),
            Sink::Direct(s) => s.write_all(bytes)?,
            Sink::Buffered(b) => b.write_all(bytes)?,
        }
        Ok(bytes.len())
    }

    /// Push buffered bytes to the stream. No-op for unbuffered sinks.
    pub fn flush_buffer(&mut self) -> io::Result<()> {
        match self {
            Sink::Buffered(b) => b.flush(),
            _ => Ok(()),
        }
    }

    /// Give up the sink, returning the stream it wraps (if any).
    ///
    /// Bytes still pending in a buffer are discarded.
    pub fn into_stream(self) -> Option<Stream> {
        match self {
            Sink::Text(_) => None,
            Sink::Direct(s) => Some(s),
            Sink::Buffered(b) => Some(b.into_inner()),
        }
    }
}
