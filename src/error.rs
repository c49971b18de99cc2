//! # Error Types
//!
//! This module defines error types used throughout the pgfbar library.

use thiserror::Error;

/// Main error type for pgfbar operations
#[derive(Debug, Error)]
pub enum ChartError {
    /// A value cell could not be parsed as a number
    #[error("Invalid numeric value: '{0}'")]
    Parse(String),

    /// Missing or invalid chart request field
    #[error("Invalid chart request: {0}")]
    Config(String),

    /// Spreadsheet error markers detected in generated output
    #[error("Output contains spreadsheet errors: {0}")]
    SheetErrors(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
