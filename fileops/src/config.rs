//! Configuration types and constants for file operations.

use std::fmt;
use std::path::PathBuf;

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Suffix appended to the input path for compressed output
pub const GZIP_SUFFIX: &str = ".gz";

/// Suffix appended to the input path for reversed text output
pub const REVERSED_SUFFIX: &str = "_reversed.txt";

/// Suffix appended to the input path for capitalized text output
pub const CAPITALIZED_SUFFIX: &str = "_capitalized.txt";

/// A single operation that can be requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Gzip-compress the input file
    Compress,
    /// Decompress a gzip input file
    Decompress,
    /// Reverse the text content by code point
    Reverse,
    /// Convert the text content to uppercase
    Capitalize,
    /// Count lines in the text content
    CountLines,
    /// Count whitespace-separated words in the text content
    CountWords,
}

impl Operation {
    /// Every operation, in the order the dispatcher evaluates them.
    pub const ALL: [Operation; 6] = [
        Operation::Compress,
        Operation::Decompress,
        Operation::Reverse,
        Operation::Capitalize,
        Operation::CountLines,
        Operation::CountWords,
    ];

    /// Suffix used to derive the output path when none is given explicitly.
    ///
    /// Decompression has no default name and the counters produce no file.
    pub fn default_suffix(self) -> Option<&'static str> {
        match self {
            Operation::Compress => Some(GZIP_SUFFIX),
            Operation::Reverse => Some(REVERSED_SUFFIX),
            Operation::Capitalize => Some(CAPITALIZED_SUFFIX),
            Operation::Decompress | Operation::CountLines | Operation::CountWords => None,
        }
    }

    /// Whether the operation produces an output file.
    pub fn writes_output(self) -> bool {
        !matches!(self, Operation::CountLines | Operation::CountWords)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Compress => "compress",
            Operation::Decompress => "decompress",
            Operation::Reverse => "reverse",
            Operation::Capitalize => "capitalize",
            Operation::CountLines => "count-lines",
            Operation::CountWords => "count-words",
        };
        f.write_str(name)
    }
}

/// Configuration for a single CLI invocation
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Requested operations; evaluation order is always [`Operation::ALL`]
    pub operations: Vec<Operation>,
    /// Explicit output path shared by all file-producing operations
    pub output: Option<PathBuf>,
    /// Verbose output
    pub verbose: bool,
}

impl CliConfig {
    /// Returns `true` if `operation` was requested.
    pub fn requested(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }

    /// Requested operations in dispatch order, each at most once.
    pub fn scheduled(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL
            .into_iter()
            .filter(move |operation| self.requested(*operation))
    }
}
