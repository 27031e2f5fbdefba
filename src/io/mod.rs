//! Sink abstractions behind a printer.
//!
//! This module provides:
//! - `Closable`: Optional close capability of a write target
//! - `Stream` and `Sink`: Capability sets fixed when a printer is built
//! - `BufferedSink`: Buffering decorator with explicit flush
//! - `MemorySink`: Shared in-memory writer for inspecting output
//! - File and standard stream openers

mod buffered;
mod memory;
mod sink;
mod std_io;

pub use buffered::{BufferedSink, DEFAULT_BUFFER_CAPACITY, MAX_BUFFER_CAPACITY};
pub use memory::MemorySink;
pub use sink::{Closable, Sink, Stream};
pub use std_io::{STDERR_ID, STDOUT_ID, open_file};
