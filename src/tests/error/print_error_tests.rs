//! Tests for PrintError formatting and identity.

use std::error::Error;
use std::io;

use crate::error::{PrintError, Stage};

#[test]
fn display_includes_stage_target_and_source() {
    let err = PrintError::new(Stage::Write, "out.txt", io::Error::other("boom"));

    assert_eq!(err.to_string(), "[Write] out.txt: boom");
    assert!(err.source().is_some());
}

#[test]
fn stage_display_names() {
    let names: Vec<String> = [
        Stage::Create,
        Stage::Write,
        Stage::Flush,
        Stage::Close,
        Stage::Configure,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(names, ["Create", "Write", "Flush", "Close", "Configure"]);
}

#[test]
fn clones_are_the_same_failure() {
    let err = PrintError::new(Stage::Flush, "-", io::Error::other("x"));
    let clone = err.clone();
    let other = PrintError::new(Stage::Flush, "-", io::Error::other("x"));

    assert!(clone.same_as(&err));
    assert!(!other.same_as(&err));
}

#[test]
fn converts_into_io_error_keeping_kind() {
    let err = PrintError::new(
        Stage::Create,
        "/root.txt",
        io::Error::from(io::ErrorKind::PermissionDenied),
    );

    let io_err: io::Error = err.into();

    assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    assert!(io_err.to_string().starts_with("[Create] /root.txt"));
}

#[cfg(feature = "miette")]
#[test]
fn diagnostic_carries_help_for_stage() {
    use crate::error::PrintDiagnostic;

    let err = PrintError::new(Stage::Configure, "cfg", io::Error::other("bad"));
    let diag = PrintDiagnostic::from(err);

    assert_eq!(diag.message, "[Configure] on 'cfg'");
    assert!(diag.help.unwrap().contains("overwrite"));
}
