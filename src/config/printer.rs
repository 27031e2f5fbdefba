//! Deserializable configuration for file printers.

use std::io;

use serde::Deserialize;

use super::{FileExistsPolicy, FileSpec};
use crate::error::{PrintError, Stage};
use crate::io::MAX_BUFFER_CAPACITY;

/// Configuration for a file printer, as read from a config file.
#[derive(Debug, Clone, Deserialize)]
pub struct PrinterConfig {
    /// File path to write to
    pub path: String,
    /// File exists policy: "overwrite", "append", "error"
    #[serde(default)]
    pub file_exists_policy: Option<String>,
    /// Write buffer capacity in bytes
    #[serde(default)]
    pub buffer_capacity: Option<usize>,
}

impl PrinterConfig {
    /// Resolve the configuration into a `FileSpec`.
    pub fn into_spec(self) -> Result<FileSpec, PrintError> {
        let mut spec = FileSpec::new(&self.path);

        if let Some(raw) = &self.file_exists_policy {
            let policy = FileExistsPolicy::from_str(raw).ok_or_else(|| {
                PrintError::new(
                    Stage::Configure,
                    &self.path,
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("unknown file exists policy '{raw}'"),
                    ),
                )
            })?;
            spec = spec.with_file_exists_policy(policy);
        }

        if let Some(capacity) = self.buffer_capacity {
            if capacity > MAX_BUFFER_CAPACITY {
                return Err(PrintError::new(
                    Stage::Configure,
                    &self.path,
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!(
                            "buffer capacity {capacity} exceeds the maximum of {MAX_BUFFER_CAPACITY} bytes"
                        ),
                    ),
                ));
            }
            spec = spec.with_buffer_capacity(capacity);
        }

        Ok(spec)
    }
}
