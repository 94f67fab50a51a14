//! wordlist-js - word list to JavaScript dictionary converter
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordlist_js::cli::Args;
use wordlist_js::converter::{Converter, ConverterConfig};
use wordlist_js::progress::{print_banner, print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments; usage errors exit here
    let args = Args::parse();

    // Set up logging, RUST_LOG wins over the flags
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level())).init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet {
        print_banner();
    }

    let config = ConverterConfig::from_args(&args);

    if args.verbose {
        print_config(&config);
    }

    let converter = Converter::new(config);
    let stats = converter.convert()?;

    if !args.quiet {
        stats.print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(config: &ConverterConfig) {
    print_header("Configuration");

    print_info(&format!("Input:        {:?}", config.input));
    print_info(&format!("Output:       {:?}", config.output));
    print_info(&format!("Blank lines:  {:?}", config.blank_lines));
}
