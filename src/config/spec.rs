//! File output specifications.

use std::path::PathBuf;

use crate::io::DEFAULT_BUFFER_CAPACITY;

/// Policy for handling existing output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileExistsPolicy {
    #[default]
    /// Overwrite existing files
    Overwrite,
    /// Append to existing files
    Append,
    /// Return an error if file exists
    Error,
}

impl FileExistsPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Some(FileExistsPolicy::Overwrite),
            "append" => Some(FileExistsPolicy::Append),
            "error" => Some(FileExistsPolicy::Error),
            _ => None,
        }
    }
}

/// Specification for a file-backed printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    /// Path of the file to write
    pub path: PathBuf,
    /// Policy for handling an existing file
    pub file_exists_policy: FileExistsPolicy,
    /// Capacity of the write buffer in bytes
    pub buffer_capacity: usize,
}

impl FileSpec {
    /// Create a new file specification that overwrites existing files.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_exists_policy: FileExistsPolicy::default(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    /// Set the file exists policy.
    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }

    /// Set the buffer capacity.
    ///
    /// Values above `MAX_BUFFER_CAPACITY` are clamped when the file is opened.
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Identifier used in errors and diagnostics.
    pub fn id(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
