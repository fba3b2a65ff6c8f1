//! Error types for file operations.

use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

use crate::config::Operation;

/// Main error type for file operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not exist
    #[error("File does not exist")]
    MissingInput {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Operation needs an explicit output path and none was given
    #[error("Output file name required for {}", verb(*operation))]
    MissingOutput {
        /// Operation that was requested
        operation: Operation,
    },

    /// Failed to open input file
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed while reading an opened input file
    #[error("{}: {source}", path.display())]
    Read {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed while writing an opened output file
    #[error("{}: {source}", path.display())]
    Write {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Input is not valid UTF-8 text
    #[error("{}: invalid UTF-8: {source}", path.display())]
    Decode {
        /// Path to the input file
        path: PathBuf,
        /// Position and length of the offending sequence
        #[source]
        source: Utf8Error,
    },

    /// Input is not a valid gzip stream
    #[error("{}: not a valid gzip stream: {message}", path.display())]
    Format {
        /// Path to the input file
        path: PathBuf,
        /// Error message from the decoder
        message: String,
    },

    /// General I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for file operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error aborts the whole invocation instead of a single operation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::MissingInput { .. })
    }
}

fn verb(operation: Operation) -> &'static str {
    match operation {
        Operation::Compress => "compression",
        Operation::Decompress => "decompression",
        Operation::Reverse => "reversing",
        Operation::Capitalize => "capitalizing",
        Operation::CountLines | Operation::CountWords => "counting",
    }
}

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::MissingInput { .. } => io::Error::new(io::ErrorKind::NotFound, err),
            Error::MissingOutput { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
            Error::Decode { .. } | Error::Format { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            Error::OpenInput { source, .. }
            | Error::CreateOutput { source, .. }
            | Error::Read { source, .. }
            | Error::Write { source, .. }
            | Error::Io { source } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
        }
    }
}
