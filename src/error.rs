//! Error types for the conversion pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input word list is missing or cannot be read
    #[error("cannot read word list {path:?}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output snippet cannot be created, written or flushed
    #[error("cannot write output file {path:?}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Path of the file the failed operation was working on
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::InputNotFound { path, .. } | Self::OutputWriteFailure { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_source_chain_is_kept() {
        let err = ConvertError::InputNotFound {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        assert_eq!(err.to_string(), "cannot read word list \"missing.txt\"");
        assert_eq!(err.source().unwrap().to_string(), "no such file");
        assert_eq!(err.path(), &PathBuf::from("missing.txt"));
    }
}
