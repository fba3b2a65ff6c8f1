//! File I/O operations and output path derivation.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::{Operation, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};

/// Derives the default output path for `operation` by appending its suffix
/// to the whole input path.
///
/// Returns `None` for operations without a default name.
pub fn default_output_path(input: &Path, operation: Operation) -> Option<PathBuf> {
    let suffix = operation.default_suffix()?;
    let mut name = input.as_os_str().to_os_string();
    name.push(suffix);
    Some(PathBuf::from(name))
}

/// Picks the output path for `operation`: the explicit one if present,
/// otherwise the default.
///
/// # Errors
///
/// Returns [`Error::MissingOutput`] when no explicit path is given and the
/// operation has no default name (decompression).
pub fn resolve_output(
    input: &Path,
    explicit: Option<&Path>,
    operation: Operation,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    default_output_path(input, operation).ok_or(Error::MissingOutput { operation })
}

/// Opens a buffered reader over the input file.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Creates (or truncates) the output file and returns a buffered writer.
pub fn open_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Reads the whole input file into memory.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut reader = open_input(path)?;
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(data)
}

/// Reads the whole input file and validates it as UTF-8.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the content is not valid UTF-8, in addition
/// to the I/O errors of [`read_bytes`].
pub fn read_text(path: &Path) -> Result<String> {
    let data = read_bytes(path)?;
    String::from_utf8(data).map_err(|err| Error::Decode {
        path: path.to_path_buf(),
        source: err.utf8_error(),
    })
}

/// Writes `data` to the output file, flushing before returning so that late
/// write failures are reported.
pub fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    let mut writer = open_output(path)?;
    writer
        .write_all(data)
        .and_then(|()| writer.flush())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `text` to the output file as UTF-8.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    write_bytes(path, text.as_bytes())
}
