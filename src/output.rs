//! Output management module
//!
//! Handles naming and writing the generated snippet file.

use crate::error::ConvertError;
use crate::snippet::SNIPPET_EXTENSION;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffer size for the snippet writer (64KB)
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Output file writer with buffering
///
/// The file is created or truncated on open. Dropping the writer flushes
/// whatever is still buffered, so the handle is released on every path.
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn create(path: &Path) -> Result<Self, ConvertError> {
        Self::with_capacity(path, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_capacity(path: &Path, buffer_size: usize) -> Result<Self, ConvertError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| write_failure(path, source))?;

        Ok(Self {
            writer: BufWriter::with_capacity(buffer_size, file),
            path: path.to_path_buf(),
            bytes_written: 0,
        })
    }

    /// Write text as-is
    pub fn write(&mut self, data: &str) -> Result<(), ConvertError> {
        self.writer
            .write_all(data.as_bytes())
            .map_err(|source| write_failure(&self.path, source))?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<(), ConvertError> {
        self.writer
            .flush()
            .map_err(|source| write_failure(&self.path, source))
    }

    /// Flush and close, returning the number of bytes written
    pub fn finish(mut self) -> Result<u64, ConvertError> {
        self.flush()?;
        Ok(self.bytes_written)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

fn write_failure(path: &Path, source: io::Error) -> ConvertError {
    ConvertError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    }
}

/// Generate the output path from the input path
///
/// Uses the input's file name minus its last extension, placed in the
/// current directory: `/lists/words.txt` becomes `words.js`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));

    name.push(".");
    name.push(SNIPPET_EXTENSION);
    PathBuf::from(name)
}
