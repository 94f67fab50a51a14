//! Conversion pipeline
//!
//! Reads the word list, filters it, renders the snippet and writes it out.
//! Everything happens in one synchronous pass over an in-memory copy of the
//! input.

use crate::cli::Args;
use crate::error::ConvertError;
use crate::filter::{BlankLines, FilteredWordSet, WordFilter};
use crate::input::read_word_list;
use crate::output::OutputWriter;
use crate::progress::{create_progress_bar, print_header, print_info, print_success, print_warning, ConversionStats};
use crate::snippet::render_snippet;

use colored::*;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Instant;

/// Converter configuration
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub blank_lines: BlankLines,
    pub quiet: bool,
    pub verbose: bool,
}

impl ConverterConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.text_file.clone(),
            output: args.get_output_path(),
            blank_lines: BlankLines::default(),
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }

    /// Configuration with terminal output turned off
    pub fn quiet(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            blank_lines: BlankLines::default(),
            quiet: true,
            verbose: false,
        }
    }

    pub fn with_blank_lines(mut self, blank_lines: BlankLines) -> Self {
        self.blank_lines = blank_lines;
        self
    }
}

/// Word list to JavaScript converter
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run the conversion, overwriting the output file
    pub fn convert(&self) -> Result<ConversionStats, ConvertError> {
        let start = Instant::now();

        if !self.config.quiet {
            print_header("Reading word list...");
            print_info(&format!("Input: {:?}", self.config.input));
        }

        let list = read_word_list(&self.config.input)?;
        let words = self.filter(list.iter(), list.len() as u64);

        log::debug!(
            "{} of {} lines accepted ({} rejected, {} blank, policy {:?})",
            words.len(),
            words.lines_seen(),
            words.rejected(),
            words.blank_skipped(),
            self.config.blank_lines
        );

        if words.is_empty() && !self.config.quiet {
            print_warning("No words passed the filter");
        }

        let snippet = render_snippet(words.words());

        let mut writer = OutputWriter::create(&self.config.output)?;
        writer.write(&snippet)?;
        let bytes_written = writer.finish()?;

        log::debug!("wrote {} bytes to {:?}", bytes_written, self.config.output);

        if !self.config.quiet {
            print_success(&format!("Output written to: {:?}", self.config.output));
        }

        Ok(ConversionStats {
            total_lines: words.lines_seen(),
            accepted: words.len() as u64,
            rejected: words.rejected(),
            blank_skipped: words.blank_skipped(),
            distinct: words.distinct_count() as u64,
            bytes_read: list.bytes_read,
            bytes_written,
            elapsed: start.elapsed(),
        })
    }

    fn filter<'a, I>(&self, lines: I, total: u64) -> FilteredWordSet
    where
        I: Iterator<Item = &'a str>,
    {
        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_progress_bar(total, "Filtering...")
        };

        let words = WordFilter::new(self.config.blank_lines).filter_lines(lines.inspect(|_| pb.inc(1)));

        pb.finish_with_message("Complete".green().to_string());
        words
    }
}

/// Convert `input` into `output` without any terminal output
pub fn convert_file(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Result<ConversionStats, ConvertError> {
    Converter::new(ConverterConfig::quiet(input, output)).convert()
}
