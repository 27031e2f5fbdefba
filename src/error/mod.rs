//! Error types for printer operations.
//!
//! This module provides:
//! - `Stage`: Indicates which printer operation produced the error
//! - `PrintError`: The error latched by a printer, with context

use std::fmt;
use std::io;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while creating or opening the destination
    Create,
    /// The sink rejected a write
    Write,
    /// The buffering layer could not deliver pending bytes
    Flush,
    /// The underlying resource could not be released cleanly
    Close,
    /// Invalid printer configuration
    Configure,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Create => write!(f, "Create"),
            Stage::Write => write!(f, "Write"),
            Stage::Flush => write!(f, "Flush"),
            Stage::Close => write!(f, "Close"),
            Stage::Configure => write!(f, "Configure"),
        }
    }
}

/// A failure captured by a printer.
///
/// Cloning is cheap and keeps the identity of the underlying `io::Error`, so
/// every call made after the error was latched hands back the same failure.
#[derive(Debug, Clone, Error)]
#[error("[{stage}] {target}: {source}")]
pub struct PrintError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target (file path, "-" for stdout, etc.)
    pub target: String,
    /// The underlying error
    #[source]
    pub source: Arc<io::Error>,
}

impl PrintError {
    /// Create a new error for the given stage and target.
    pub fn new(stage: Stage, target: impl Into<String>, source: io::Error) -> Self {
        Self {
            stage,
            target: target.into(),
            source: Arc::new(source),
        }
    }

    /// The kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// Check whether both values are clones of the same latched failure.
    pub fn same_as(&self, other: &PrintError) -> bool {
        self.stage == other.stage && Arc::ptr_eq(&self.source, &other.source)
    }
}

impl From<PrintError> for io::Error {
    fn from(e: PrintError) -> Self {
        io::Error::new(e.kind(), e)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
