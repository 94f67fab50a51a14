//! Word filtering module
//!
//! Decides which words of the list make it into the generated set. A word is
//! dropped when it contains an ASCII capital letter or one of the characters
//! that would break the dictionary (`'`, `` ` ``, `+`, `=`).

use hashbrown::HashSet;

/// Punctuation that disqualifies a word, next to ASCII uppercase letters
pub const DISQUALIFYING_PUNCTUATION: [char; 4] = ['\'', '`', '+', '='];

/// Check whether a word must be left out of the word set
///
/// Only the classic `A`..=`Z` range counts as uppercase; `É` or `Ж` pass.
#[inline]
pub fn is_disqualified(word: &str) -> bool {
    word.chars()
        .any(|c| c.is_ascii_uppercase() || DISQUALIFYING_PUNCTUATION.contains(&c))
}

/// What to do with lines that are empty once trimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    /// Leave them out of the word set
    #[default]
    Skip,
    /// Keep them as empty words, exactly like any other accepted line
    Keep,
}

/// Words that survived filtering, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredWordSet {
    words: Vec<String>,
    lines_seen: u64,
    rejected: u64,
    blank_skipped: u64,
}

impl FilteredWordSet {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn blank_skipped(&self) -> u64 {
        self.blank_skipped
    }

    /// Number of members the generated `Set` ends up with
    pub fn distinct_count(&self) -> usize {
        self.words
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Single-pass filter over the lines of a word list
#[derive(Debug, Clone, Copy, Default)]
pub struct WordFilter {
    blank_lines: BlankLines,
}

impl WordFilter {
    pub fn new(blank_lines: BlankLines) -> Self {
        Self { blank_lines }
    }

    pub fn blank_lines(&self) -> BlankLines {
        self.blank_lines
    }

    /// Check if a trimmed word goes into the set
    #[inline]
    pub fn accepts(&self, word: &str) -> bool {
        if word.is_empty() {
            return self.blank_lines == BlankLines::Keep;
        }
        !is_disqualified(word)
    }

    /// Trim and filter raw lines, preserving their order
    pub fn filter_lines<'a, I>(&self, lines: I) -> FilteredWordSet
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = FilteredWordSet::default();

        for line in lines {
            set.lines_seen += 1;
            let word = line.trim();

            if self.accepts(word) {
                set.words.push(word.to_string());
            } else if word.is_empty() {
                set.blank_skipped += 1;
            } else {
                log::trace!("rejected {:?}", word);
                set.rejected += 1;
            }
        }

        set
    }
}
