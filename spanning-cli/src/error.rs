//! This module defines all the errors that can occur while executing spanning-cli.

use thiserror::Error;

/// Error that occur during execution of the CLI app
#[derive(Error, Debug)]
pub enum CliError {
    /// Errors on opening or reading the input file
    #[error("failed to read \"{filename}\": {error}")]
    IoReading {
        /// Contains the wrapped error
        error: std::io::Error,
        /// Filename which caused the error
        filename: String,
    },
    /// A line of the input file does not describe a weighted edge
    #[error("malformed record in \"{filename}\" on line {line}: {reason}")]
    MalformedRecord {
        /// Name of the input file
        filename: String,
        /// Line number of the record (starting at 1)
        line: u64,
        /// Explanation of the problem
        reason: String,
    },
    /// Error raised by the csv parser
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Error resulting from io operations
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Error originating from the graph library
    #[error(transparent)]
    Spanning(#[from] spanning::error::Error),
}
