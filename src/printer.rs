//! The printer: formatted output over a sink with a latched error.

use std::fmt::{self, Display};
use std::io::{self, Write};
use std::path::Path;

use crate::config::FileSpec;
use crate::error::{PrintError, Stage};
use crate::io::{Closable, STDERR_ID, STDOUT_ID, Sink, Stream, open_file};
use crate::text::to_text;

const NEW_LINE: &[u8] = b"\n";

/// Target identifier of the in-memory text accumulator.
pub const TEXT_ID: &str = "<string>";

/// Target identifier of generic writers.
pub const STREAM_ID: &str = "<stream>";

/// Formatted output over a single sink.
///
/// All output goes through [`Printer::write`]. The first failure is latched:
/// it closes the printer, and every later operation is a no-op returning that
/// same error. Callers issue all their writes and inspect [`Printer::err`] (or
/// the result of [`Printer::close`]) once at the end.
///
/// Dropping a printer that was not closed closes it.
#[derive(Debug)]
pub struct Printer {
    target: String,
    sink: Option<Sink>,
    err: Option<PrintError>,
    // Text of an accumulator that has already been released.
    released_text: Option<Vec<u8>>,
}

impl Printer {
    /// Create a printer over an explicit capability set.
    pub fn from_sink(target: impl Into<String>, sink: Sink) -> Self {
        Self {
            target: target.into(),
            sink: Some(sink),
            err: None,
            released_text: None,
        }
    }

    /// Printer accumulating text in memory.
    pub fn string() -> Self {
        Self::from_sink(TEXT_ID, Sink::text())
    }

    /// Printer writing straight to `writer`.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self::from_sink(STREAM_ID, Sink::direct(Stream::plain(writer)))
    }

    /// Printer buffering output for `writer` until flush or close.
    pub fn buffered(writer: impl Write + Send + 'static) -> Self {
        Self::from_sink(STREAM_ID, Sink::buffered(Stream::plain(writer)))
    }

    /// Printer writing straight to `resource` and closing it on close.
    pub fn closing(resource: impl Closable + 'static) -> Self {
        Self::from_sink(STREAM_ID, Sink::direct(Stream::closable(resource)))
    }

    /// Printer buffering output for `resource` and closing it on close.
    pub fn buffered_closing(resource: impl Closable + 'static) -> Self {
        Self::from_sink(STREAM_ID, Sink::buffered(Stream::closable(resource)))
    }

    /// Buffered printer for stdout.
    pub fn stdout() -> Self {
        Self::from_sink(STDOUT_ID, Sink::buffered(Stream::plain(io::stdout())))
    }

    /// Buffered printer for stderr.
    pub fn stderr() -> Self {
        Self::from_sink(STDERR_ID, Sink::buffered(Stream::plain(io::stderr())))
    }

    /// Create (or truncate) the file at `path` and print into it, buffered.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, PrintError> {
        Self::open(&FileSpec::new(path.as_ref()))
    }

    /// Open the file described by `spec` and print into it, buffered.
    pub fn open(spec: &FileSpec) -> Result<Self, PrintError> {
        let id = spec.id();
        let file = open_file(&spec.path, spec.file_exists_policy)
            .map_err(|e| PrintError::new(Stage::Create, &id, e))?;
        let sink = Sink::buffered_with_capacity(spec.buffer_capacity, Stream::closable(file));
        Ok(Self::from_sink(id, sink))
    }

    /// Replace the identifier used in errors and diagnostics.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Identifier of the destination, as used in errors.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether close has run, explicitly or after a failure.
    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// The latched error, if any.
    pub fn err(&self) -> Option<&PrintError> {
        self.err.as_ref()
    }

    /// Write each value with no separators and no trailing newline.
    ///
    /// ```
    /// let mut p = latchprint::Printer::string();
    /// p.print(&[&"x = ", &'4', &2]);
    /// assert_eq!(p.to_string(), "x = 42");
    /// ```
    pub fn print(&mut self, values: &[&dyn Display]) -> &mut Self {
        for value in values {
            self.write_str(&to_text(*value));
        }
        self
    }

    /// Like [`Printer::print`], followed by a newline.
    pub fn println(&mut self, values: &[&dyn Display]) -> &mut Self {
        self.print(values).new_line()
    }

    /// Write formatted text verbatim.
    ///
    /// ```
    /// let mut p = latchprint::Printer::string();
    /// p.printf(format_args!("{:>4}|", 7));
    /// assert_eq!(p.to_string(), "   7|");
    /// ```
    pub fn printf(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        match args.as_str() {
            Some(s) => self.write_str(s),
            None => self.write_str(&fmt::format(args)),
        }
    }

    /// Like [`Printer::printf`], followed by a newline.
    pub fn printfln(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.printf(args).new_line()
    }

    /// Write a single `\n`.
    pub fn new_line(&mut self) -> &mut Self {
        let _ = self.write(NEW_LINE);
        self
    }

    /// Write one raw byte.
    pub fn write_byte(&mut self, b: u8) -> &mut Self {
        let _ = self.write(&[b]);
        self
    }

    /// Write one code point, UTF-8 encoded.
    pub fn write_char(&mut self, c: char) -> &mut Self {
        let mut buf = [0u8; 4];
        let _ = self.write(c.encode_utf8(&mut buf).as_bytes());
        self
    }

    /// Write the bytes of `s`.
    pub fn write_str(&mut self, s: &str) -> &mut Self {
        let _ = self.write(s.as_bytes());
        self
    }

    /// Base primitive behind every print and write operation.
    ///
    /// Returns the latched error without touching the sink if one exists,
    /// and `Ok(0)` if the printer was closed cleanly. A sink failure is
    /// latched and closes the printer.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, PrintError> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }
        let Some(sink) = self.sink.as_mut() else {
            return Ok(0);
        };

        match sink.write(bytes) {
            Ok(n) => Ok(n),
            Err(e) => {
                let err = self.latch(Stage::Write, e);
                let _ = self.close();
                Err(err)
            }
        }
    }

    /// Push buffered bytes to the underlying stream.
    ///
    /// No-op unless the printer is buffered. A failure is latched and closes
    /// the printer.
    pub fn flush(&mut self) -> Result<(), PrintError> {
        if let Some(sink) = self.sink.as_mut()
            && let Err(e) = sink.flush_buffer()
            && self.err.is_none()
        {
            self.latch(Stage::Flush, e);
            let _ = self.close();
        }
        self.result()
    }

    /// Flush pending output, release the sink and close the underlying
    /// resource. Safe to call any number of times; the resource is closed
    /// once.
    pub fn close(&mut self) -> Result<(), PrintError> {
        if let Some(mut sink) = self.sink.take() {
            if self.err.is_none()
                && let Err(e) = sink.flush_buffer()
            {
                self.latch(Stage::Flush, e);
            }

            match sink {
                Sink::Text(buf) => self.released_text = Some(buf),
                other => {
                    if let Some(stream) = other.into_stream()
                        && stream.is_closable()
                    {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(printer = %self.target, "closing printer resource");
                        if let Err(e) = stream.close() {
                            self.latch(Stage::Close, e);
                        }
                    }
                }
            }
        }
        self.result()
    }

    /// Consume the printer, returning the accumulated text.
    ///
    /// Empty for printers that do not write into memory.
    pub fn into_string(mut self) -> String {
        let bytes = match &mut self.sink {
            Some(Sink::Text(buf)) => std::mem::take(buf),
            _ => self.released_text.take().unwrap_or_default(),
        };
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn text(&self) -> Option<String> {
        match &self.sink {
            Some(sink) => sink.text_contents(),
            None => self
                .released_text
                .as_ref()
                .map(|buf| String::from_utf8_lossy(buf).into_owned()),
        }
    }

    fn describe(&self) -> &'static str {
        match &self.sink {
            None => "closed",
            Some(Sink::Text(_)) => "text",
            Some(Sink::Direct(s)) if s.is_closable() => "direct, closable",
            Some(Sink::Direct(_)) => "direct",
            Some(Sink::Buffered(b)) if b.get_ref().is_closable() => "buffered, closable",
            Some(Sink::Buffered(_)) => "buffered",
        }
    }

    /// Keep the first error; later failures are dropped.
    fn latch(&mut self, stage: Stage, e: io::Error) -> PrintError {
        match &self.err {
            Some(existing) => existing.clone(),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(printer = %self.target, %stage, error = %e, "printer error latched");
                let err = PrintError::new(stage, &self.target, e);
                self.err = Some(err.clone());
                err
            }
        }
    }

    fn result(&self) -> Result<(), PrintError> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Text printers render their accumulated text. Any other printer renders a
/// diagnostic placeholder whose format is not stable.
impl Display for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => f.write_str(&text),
            None => write!(f, "Printer({}, {})", self.target, self.describe()),
        }
    }
}

impl Write for Printer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Printer::write(self, buf).map_err(Into::into)
    }

    fn flush(&mut self) -> io::Result<()> {
        Printer::flush(self).map_err(Into::into)
    }
}

impl Closable for Printer {
    fn close(mut self: Box<Self>) -> io::Result<()> {
        Printer::close(&mut self).map_err(Into::into)
    }
}

impl Drop for Printer {
    fn drop(&mut self) {
        if self.sink.is_none() {
            return;
        }
        if let Err(_e) = self.close() {
            #[cfg(feature = "tracing")]
            tracing::warn!(printer = %self.target, error = %_e, "printer close on drop failed");
        }
    }
}
