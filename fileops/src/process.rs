//! High-level dispatch of the requested operations and status reporting.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::{CliConfig, Operation};
use crate::error::{Error, Result};
use crate::io::resolve_output;
use crate::operations::{
    compress, count_lines, count_words, decompress, reverse_text, uppercase_text,
};

/// Result of one successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation wrote a file
    Written {
        /// Operation that ran
        operation: Operation,
        /// Path of the file it produced
        path: PathBuf,
    },
    /// The operation produced a count
    Counted {
        /// Operation that ran
        operation: Operation,
        /// Number of lines or words
        count: usize,
    },
}

/// Tally of a completed invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Operations that succeeded
    pub succeeded: usize,
    /// Operations that failed
    pub failed: usize,
}

/// Runs a single operation against `input`.
///
/// File-producing operations write to the configured output path, or to the
/// default name derived from `input` when none is configured.
///
/// # Errors
///
/// Returns [`Error::MissingOutput`] for decompression without an explicit
/// output path, or whatever the operation itself fails with.
pub fn run_operation(input: &Path, operation: Operation, config: &CliConfig) -> Result<Outcome> {
    if !operation.writes_output() {
        let count = match operation {
            Operation::CountLines => count_lines(input)?,
            _ => count_words(input)?,
        };
        return Ok(Outcome::Counted { operation, count });
    }

    let output = resolve_output(input, config.output.as_deref(), operation)?;
    info!("{operation}: {} -> {}", input.display(), output.display());

    match operation {
        Operation::Compress => {
            compress(input, &output)?;
        }
        Operation::Decompress => {
            decompress(input, &output)?;
        }
        Operation::Reverse => reverse_text(input, &output)?,
        _ => uppercase_text(input, &output)?,
    }

    Ok(Outcome::Written {
        operation,
        path: output,
    })
}

/// Renders the status line printed after a successful operation.
pub fn success_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Written { operation, path } => {
            let action = match operation {
                Operation::Compress => "File compressed",
                Operation::Decompress => "File decompressed",
                Operation::Reverse => "File content reversed",
                _ => "File content capitalized",
            };
            format!("{action} successfully and saved as {}", path.display())
        }
        Outcome::Counted { operation, count } => {
            let unit = match operation {
                Operation::CountLines => "lines",
                _ => "words",
            };
            format!("Number of {unit} in the file: {count}")
        }
    }
}

/// Renders the status line printed after a failed operation.
pub fn failure_message(operation: Operation, err: &Error) -> String {
    if let Error::MissingOutput { .. } = err {
        return format!("Error: {err}");
    }

    let action = match operation {
        Operation::Compress => "Compression",
        Operation::Decompress => "Decompression",
        Operation::Reverse => "Reversing content",
        Operation::Capitalize => "Capitalizing content",
        Operation::CountLines => "Counting lines",
        Operation::CountWords => "Counting words",
    };
    format!("{action} failed: {err}")
}

/// Runs every requested operation on `input` in dispatch order.
///
/// Success lines go to `out`, failure lines to `err`. A failing operation is
/// reported and the remaining ones still run.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] without running anything if `input` does
/// not exist, or [`Error::Io`] if a status line cannot be written.
pub fn run_cli(
    input: &Path,
    config: &CliConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Summary> {
    if !input.exists() {
        return Err(Error::MissingInput {
            path: input.to_path_buf(),
        });
    }

    let mut summary = Summary::default();
    let mut scheduled = config.scheduled().peekable();
    if scheduled.peek().is_none() {
        warn!("no operation requested for {}", input.display());
    }

    for operation in scheduled {
        match run_operation(input, operation, config) {
            Ok(outcome) => {
                writeln!(out, "{}", success_message(&outcome))?;
                summary.succeeded += 1;
            }
            Err(error) => {
                debug!("{operation} failed: {error:?}");
                writeln!(err, "{}", failure_message(operation, &error))?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
