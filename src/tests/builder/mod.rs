//! Builder tests.

mod build_file_tests;
mod build_string_tests;
