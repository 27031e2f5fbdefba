//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{PrintError, Stage};

/// A diagnostic wrapper for printer errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct PrintDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Create => "Check that the parent directory exists and is writable",
        Stage::Write => "The destination rejected output; later writes were discarded",
        Stage::Flush => "Buffered output could not be delivered; the file may be truncated",
        Stage::Close => "The destination could not be released cleanly",
        Stage::Configure => "Valid file exists policies are: overwrite, append, error; buffer capacity is limited to 8 MiB",
    }
}

impl From<PrintError> for PrintDiagnostic {
    fn from(e: PrintError) -> Self {
        PrintDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage).into()),
            source: Some(Box::new(e)),
            severity: Severity::Error,
        }
    }
}

impl From<PrintError> for miette::Report {
    fn from(e: PrintError) -> Self {
        miette::Report::new(PrintDiagnostic::from(e))
    }
}
