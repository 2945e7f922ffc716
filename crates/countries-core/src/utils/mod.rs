//! Utility functions for string matching and formatting.

pub mod format;

pub use format::{contains_ignore_case, format_age};
