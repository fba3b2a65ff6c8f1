//! Single-shot file utilities: gzip compression and decompression, text
//! reversal, uppercase conversion, and line and word counting.
//!
//! Every operation takes a file path, makes one whole-file pass, and either
//! writes a result file or returns a count. [`run_cli`] evaluates the
//! requested operations in a fixed order and reports each one independently.

pub mod config;
pub mod error;
pub mod io;
pub mod operations;
pub mod process;
pub mod text;


pub use config::{
    CliConfig, Operation, CAPITALIZED_SUFFIX, DEFAULT_BUFFER_SIZE, GZIP_SUFFIX, REVERSED_SUFFIX,
};
pub use error::{Error, Result};
pub use io::{default_output_path, resolve_output};
pub use operations::{
    compress, compress_stream, count_lines, count_words, decompress, decompress_stream,
    reverse_text, uppercase_text,
};
pub use process::{failure_message, run_cli, run_operation, success_message, Outcome, Summary};
