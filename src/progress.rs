//! Progress display module
//!
//! Styled status lines, the filtering progress bar and the final summary.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the application banner
pub fn print_banner() {
    let banner = format!(
        "╔══════════════════════════════════════════╗\n\
         ║  wordlist-js v{:<27}║\n\
         ║  word list → JavaScript Set dictionary   ║\n\
         ╚══════════════════════════════════════════╝",
        env!("CARGO_PKG_VERSION")
    );

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled progress bar counting lines
pub fn create_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters collected over one conversion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionStats {
    pub total_lines: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub blank_skipped: u64,
    pub distinct: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

impl ConversionStats {
    /// Share of lines that made it into the word set, in percent
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            self.accepted as f64 * 100.0 / self.total_lines as f64
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        println!();
        println!("{}", "═".repeat(48).green());
        println!("{}", "              CONVERSION COMPLETE".green().bold());
        println!("{}", "═".repeat(48).green());
        println!();

        println!("  {} {}", "Input read:     ".green(), ByteSize(self.bytes_read));
        println!("  {} {}", "Total lines:    ".green(), format_number(self.total_lines));
        println!(
            "  {} {} ({:.1}%)",
            "Accepted words: ".green().bold(),
            format_number(self.accepted).green().bold(),
            self.acceptance_rate()
        );
        println!("  {} {}", "Rejected:       ".yellow(), format_number(self.rejected));

        if self.blank_skipped > 0 {
            println!("  {} {}", "Blank skipped:  ".yellow(), format_number(self.blank_skipped));
        }

        println!("  {} {}", "Set members:    ".green(), format_number(self.distinct));
        println!("  {} {}", "Output written: ".green(), ByteSize(self.bytes_written));
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed));
        println!();
        println!("{}", "═".repeat(48).green());
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 1 {
        format!("{}ms", duration.as_millis())
    } else if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
