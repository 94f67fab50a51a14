//! JavaScript snippet generation
//!
//! The artifact is two statements: a string literal holding the pipe-joined
//! words, then a reassignment turning it into a `Set`:
//!
//! ```text
//! let usEnglishWordList = "cat|zzz";
//! usEnglishWordList = new Set(usEnglishWordList.split('|'));
//! ```

/// Name of the generated binding
pub const BINDING_NAME: &str = "usEnglishWordList";

/// Separator between words inside the string literal
pub const DELIMITER: char = '|';

/// Extension of the generated file
pub const SNIPPET_EXTENSION: &str = "js";

/// Join words with the delimiter; no words gives an empty string
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut joined = String::with_capacity(words.iter().map(|w| w.as_ref().len() + 1).sum());

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            joined.push(DELIMITER);
        }
        joined.push_str(word.as_ref());
    }

    joined
}

/// Escape characters that would end or corrupt a double-quoted literal
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Render the complete snippet, without a trailing newline
pub fn render_snippet<S: AsRef<str>>(words: &[S]) -> String {
    for word in words.iter().map(|w| w.as_ref()) {
        if word.contains(DELIMITER) {
            log::warn!("{:?} contains '{}' and will be split into several set members", word, DELIMITER);
        }
    }

    let body = escape_literal(&join_words(words));

    format!(
        "let {name} = \"{body}\";\n{name} = new Set({name}.split('{delim}'));",
        name = BINDING_NAME,
        body = body,
        delim = DELIMITER,
    )
}
