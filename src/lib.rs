//! # wordlist-js
//!
//! Turns a single-column word list into a JavaScript dictionary.
//!
//! Each line is trimmed; words containing an ASCII capital letter, `'`,
//! `` ` ``, `+` or `=` are dropped; the rest are joined with `|` and wrapped
//! in a snippet that builds a `Set`:
//!
//! ```text
//! let usEnglishWordList = "cat|zzz";
//! usEnglishWordList = new Set(usEnglishWordList.split('|'));
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Writes words.js in the current directory
//! wordlist-js /usr/share/dict/words.txt
//!
//! # Explicit output path
//! wordlist-js words.txt -o dictionary.js
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordlist_js::converter::{Converter, ConverterConfig};
//! use wordlist_js::filter::BlankLines;
//!
//! let config = ConverterConfig::quiet("words.txt", "words.js")
//!     .with_blank_lines(BlankLines::Skip);
//!
//! let stats = Converter::new(config).convert().unwrap();
//! println!("{} words accepted", stats.accepted);
//! ```

pub mod cli;
pub mod converter;
pub mod error;
pub mod filter;
pub mod input;
pub mod output;
pub mod progress;
pub mod snippet;

pub use cli::Args;
pub use converter::{convert_file, Converter, ConverterConfig};
pub use error::ConvertError;
pub use filter::{is_disqualified, BlankLines, WordFilter};
