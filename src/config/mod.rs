//! Configuration types for file printers.
//!
//! This module provides:
//! - `FileExistsPolicy`: Policy for handling existing output files
//! - `FileSpec`: Specification for a single file-backed printer
//! - `PrinterConfig`: Deserializable form of a `FileSpec`

mod printer;
mod spec;

pub use printer::PrinterConfig;
pub use spec::{FileExistsPolicy, FileSpec};
