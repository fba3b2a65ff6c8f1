//! Command line argument parsing for the fileops utility

use std::path::PathBuf;

use clap::Parser;

use fileops::{CliConfig, Operation};

/// Gzip and plain-text file utility
#[derive(Parser, Debug)]
#[command(
    name = "fileops",
    version,
    about = "File compression, decompression, and text manipulation utility"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct FileOpsOpts {
    /// Input file path
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Compress the file
    #[arg(short = 'c', long = "compress")]
    pub compress: bool,

    /// Decompress the file
    #[arg(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Reverse the content of the file
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Convert the content to uppercase
    #[arg(short = 'C', long = "capitalize")]
    pub capitalize: bool,

    /// Count the number of lines in the file
    #[arg(short = 'l', long = "count-lines")]
    pub count_lines: bool,

    /// Count the number of words in the file
    #[arg(short = 'w', long = "count-words")]
    pub count_words: bool,

    /// Output file name for compression or manipulation
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log what each operation does
    #[arg(short = 'v', long = "verbose", env = "FILEOPS_VERBOSE")]
    pub verbose: bool,
}

impl FileOpsOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Converts the parsed flags into a [`CliConfig`].
    pub fn config(&self) -> CliConfig {
        let flags = [
            (self.compress, Operation::Compress),
            (self.decompress, Operation::Decompress),
            (self.reverse, Operation::Reverse),
            (self.capitalize, Operation::Capitalize),
            (self.count_lines, Operation::CountLines),
            (self.count_words, Operation::CountWords),
        ];

        CliConfig {
            operations: flags
                .into_iter()
                .filter_map(|(set, operation)| set.then_some(operation))
                .collect(),
            output: self.output.clone(),
            verbose: self.verbose,
        }
    }
}
