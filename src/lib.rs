//! # latchprint
//!
//! Formatted printing over any byte sink, with a latched error.
//!
//! ## Overview
//!
//! latchprint provides:
//! - **One printer, many sinks**: in-memory text, files, stdout/stderr, or any `Write`
//! - **Latched errors**: the first failure closes the printer and is returned by
//!   every later call, so output code does not check after each line
//! - **Optional buffering**: bytes are delivered on flush or close
//! - **Close once**: the underlying resource is released exactly once, also on drop
//! - **Builders**: `build_string` and `build_file` for scoped output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use latchprint::{build_file, prtfln, prtln};
//!
//! fn main() -> Result<(), latchprint::PrintError> {
//!     build_file("report.txt", |p| {
//!         prtln!(p, "Tho", "mas ", 1976);
//!         prtfln!(p, "total: {}", 10);
//!     })
//! }
//! ```
//!
//! ## Error semantics
//!
//! - A failed write latches a `Write`-stage error and closes the printer.
//! - A failed flush latches a `Flush`-stage error unless an error is already
//!   latched; the printer is still closed.
//! - A failed close latches a `Close`-stage error unless an error is already
//!   latched.
//! - After close, writes return the latched error, or `Ok(0)` if none.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette
//! - `tracing` - Log latched errors and resource release with tracing

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod io;
mod macros;
pub mod printer;
pub mod text;

// Re-exports for convenience
pub use builder::{build_file, build_file_with, build_string};
pub use config::{FileExistsPolicy, FileSpec, PrinterConfig};
pub use error::{PrintError, Stage};
pub use io::{BufferedSink, Closable, MemorySink, Sink, Stream};
pub use printer::Printer;
pub use text::{Chars, to_text};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::PrintDiagnostic;
