//! The six file operations: gzip codec, text transforms and counters.

use std::io;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;

use crate::error::{Error, Result};
use crate::io::{read_bytes, read_text, write_bytes, write_text};
use crate::text;

/// Gzip-compresses everything from `input` into `output`.
///
/// Returns the number of uncompressed bytes consumed.
pub fn compress_stream(mut input: impl io::Read, output: impl io::Write) -> io::Result<u64> {
    let mut encoder = GzEncoder::new(output, Compression::default());
    let bytes_read = io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;
    Ok(bytes_read)
}

/// Decompresses a gzip stream from `input` into `output`.
///
/// Concatenated gzip members are decoded one after another. Returns the
/// number of decompressed bytes produced.
pub fn decompress_stream(input: impl io::Read, mut output: impl io::Write) -> io::Result<u64> {
    let mut decoder = MultiGzDecoder::new(input);
    io::copy(&mut decoder, &mut output)
}

/// Compresses the file at `input` into a gzip file at `output`.
///
/// Returns the number of uncompressed bytes read.
///
/// # Errors
///
/// Returns an error if `input` cannot be read or `output` cannot be written.
pub fn compress(input: &Path, output: &Path) -> Result<u64> {
    let data = read_bytes(input)?;

    let mut compressed = Vec::new();
    let bytes_read = compress_stream(data.as_slice(), &mut compressed)?;
    write_bytes(output, &compressed)?;

    debug!(
        "compressed {bytes_read} bytes into {} bytes: {}",
        compressed.len(),
        output.display()
    );
    Ok(bytes_read)
}

/// Decompresses the gzip file at `input` into `output`.
///
/// Returns the number of decompressed bytes written.
///
/// # Errors
///
/// Returns [`Error::Format`] if `input` is not a valid gzip stream, or an
/// I/O error if a path cannot be read or written. Nothing is written when the
/// stream is invalid.
pub fn decompress(input: &Path, output: &Path) -> Result<u64> {
    let data = read_bytes(input)?;

    let mut decompressed = Vec::new();
    let bytes_written =
        decompress_stream(data.as_slice(), &mut decompressed).map_err(|err| Error::Format {
            path: input.to_path_buf(),
            message: err.to_string(),
        })?;
    write_bytes(output, &decompressed)?;

    debug!(
        "decompressed {} bytes into {bytes_written} bytes: {}",
        data.len(),
        output.display()
    );
    Ok(bytes_written)
}

/// Writes the code-point reversal of the text in `input` to `output`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `input` is not valid UTF-8, or an I/O error.
pub fn reverse_text(input: &Path, output: &Path) -> Result<()> {
    let content = read_text(input)?;
    let reversed = text::reverse(&content);
    write_text(output, &reversed)?;

    debug!(
        "reversed {} chars: {}",
        content.chars().count(),
        output.display()
    );
    Ok(())
}

/// Writes the uppercase form of the text in `input` to `output`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `input` is not valid UTF-8, or an I/O error.
pub fn uppercase_text(input: &Path, output: &Path) -> Result<()> {
    let content = read_text(input)?;
    let upper = text::uppercase(&content);
    write_text(output, &upper)?;

    debug!(
        "uppercased {} bytes into {} bytes: {}",
        content.len(),
        upper.len(),
        output.display()
    );
    Ok(())
}

/// Counts the lines in `input`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `input` is not valid UTF-8, or an I/O error.
pub fn count_lines(input: &Path) -> Result<usize> {
    let content = read_text(input)?;
    let lines = text::count_lines(&content);
    debug!("{lines} lines in {}", input.display());
    Ok(lines)
}

/// Counts the whitespace-separated words in `input`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `input` is not valid UTF-8, or an I/O error.
pub fn count_words(input: &Path) -> Result<usize> {
    let content = read_text(input)?;
    let words = text::count_words(&content);
    debug!("{words} words in {}", input.display());
    Ok(words)
}
