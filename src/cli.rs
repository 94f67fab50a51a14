//! Command-line interface definition for wordlist-js
//!
//! Provides argument parsing for the word list converter.

use crate::output::default_output_path;
use clap::Parser;
use std::path::PathBuf;

/// Convert a word list into a JavaScript dictionary
///
/// Reads a text file with one word per line and writes a JavaScript snippet
/// declaring `usEnglishWordList` as a Set of the words. Words with capital
/// letters, apostrophes, backticks, `+` or `=` are skipped.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-js",
    version,
    about = "Convert a word list (single column, in a text file) to a JavaScript dictionary",
    long_about = r#"
Convert a word list (single column, in a text file) to a JavaScript dictionary,
skipping capitalized words and words containing ', `, + or =.

The output declares:

    let usEnglishWordList = "word1|word2|word3";
    usEnglishWordList = new Set(usEnglishWordList.split('|'));

EXAMPLES:
    # Writes words.js in the current directory
    wordlist-js /usr/share/dict/words.txt

    # Explicit output path
    wordlist-js words.txt -o static/dictionary.js
"#
)]
pub struct Args {
    /// Path to text file with words in a single column
    #[arg(value_name = "F")]
    pub text_file: PathBuf,

    /// Path to the output file (default: <input name without extension>.js)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Quiet mode - only warnings and errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Get the output path, derived from the input name when not given
    pub fn get_output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.text_file))
    }

    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
