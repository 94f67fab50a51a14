//! Word list loading
//!
//! The whole file is read into memory, decoded as UTF-8 and split into lines.

use crate::error::ConvertError;
use std::fs;
use std::path::Path;

/// Raw lines of a word list, terminators removed
#[derive(Debug, Clone, Default)]
pub struct WordList {
    pub lines: Vec<String>,
    pub bytes_read: u64,
    pub had_decode_errors: bool,
}

impl WordList {
    /// Decode file content and split it into lines
    pub fn from_bytes(content: &[u8]) -> Self {
        // Strips a UTF-8 BOM and replaces malformed sequences
        let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(content);

        Self {
            lines: split_lines(&text).into_iter().map(str::to_string).collect(),
            bytes_read: content.len() as u64,
            had_decode_errors: had_errors,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Read a word list file in one go
pub fn read_word_list(path: &Path) -> Result<WordList, ConvertError> {
    let content = fs::read(path).map_err(|source| ConvertError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let list = WordList::from_bytes(&content);
    if list.had_decode_errors {
        log::warn!("{:?} is not valid UTF-8, invalid bytes were replaced", path);
    }
    log::debug!("read {} lines ({} bytes) from {:?}", list.len(), list.bytes_read, path);

    Ok(list)
}

/// Split text on `\n`, `\r\n` or a lone `\r`
///
/// A terminator at the very end does not open another line, so `"a\n"` is one
/// line and `""` is none.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    while let Some(offset) = memchr::memchr2(b'\n', b'\r', &bytes[start..]) {
        let end = start + offset;
        lines.push(&text[start..end]);

        start = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
            end + 2
        } else {
            end + 1
        };
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}
