//! Printer module tests.
