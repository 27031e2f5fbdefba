//! Openers for files and the standard streams.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::config::FileExistsPolicy;

/// Target identifier used for stdout.
pub const STDOUT_ID: &str = "-";

/// Target identifier used for stderr.
pub const STDERR_ID: &str = "stderr";

/// Open `path` for writing according to `policy`.
///
/// - `Overwrite` creates the file or truncates an existing one
/// - `Append` creates the file or appends to an existing one
/// - `Error` creates the file and fails with `AlreadyExists` if it exists
pub fn open_file(path: &Path, policy: FileExistsPolicy) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    match policy {
        FileExistsPolicy::Overwrite => options.create(true).truncate(true),
        FileExistsPolicy::Append => options.create(true).append(true),
        FileExistsPolicy::Error => options.create_new(true),
    };
    options.open(path)
}
