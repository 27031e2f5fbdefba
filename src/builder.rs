//! Convenience entry points that run a sequence of print operations against
//! a fresh printer.

use std::path::Path;

use crate::config::FileSpec;
use crate::error::PrintError;
use crate::printer::Printer;

/// Run `f` against an in-memory printer and return the text it produced.
///
/// ```
/// let s = latchprint::build_string(|p| {
///     p.println(&[&10, &" + ", &10, &" = ", &20]);
/// });
/// assert_eq!(s, "10 + 10 = 20\n");
/// ```
pub fn build_string<F>(f: F) -> String
where
    F: FnOnce(&mut Printer),
{
    let mut printer = Printer::string();
    f(&mut printer);
    printer.into_string()
}

/// Create (or overwrite) the file at `path` and run `f` against a buffered
/// printer writing into it.
///
/// The printer is closed before returning, also when `f` panics. Returns the
/// error that creating the file failed with, or the printer's latched error.
pub fn build_file<P, F>(path: P, f: F) -> Result<(), PrintError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut Printer),
{
    build_file_with(&FileSpec::new(path.as_ref()), f)
}

/// Like [`build_file`], honoring the file exists policy and buffer capacity
/// of `spec`.
pub fn build_file_with<F>(spec: &FileSpec, f: F) -> Result<(), PrintError>
where
    F: FnOnce(&mut Printer),
{
    let mut printer = Printer::open(spec)?;
    f(&mut printer);
    printer.close()
}
