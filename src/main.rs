//! cscan CLI
//!
//! Command-line driver for the scanner.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use cscanner::error::CollectingSink;
use cscanner::{read_input, run, scan_bytes, DriverConfig, MessageRoute, OutputFormat, ScanResult};

/// Scan a C-subset source file into a token file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to scan
    input: PathBuf,

    /// Token file to write (defaults to the input path with `scn` appended)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Token file layout
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Release)]
    format: OutputFormat,

    /// Where diagnostics and counter reports go
    #[arg(long, value_enum, default_value_t = MessageRoute::Stderr)]
    messages: MessageRoute,

    /// Count comparisons, reads and general operations
    #[arg(long)]
    count: bool,

    /// Print the tokens to stdout with source-annotated diagnostics instead of writing a token file
    #[arg(short = 't', long)]
    tokens: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = if cli.tokens {
        show_file_tokens(&cli.input)
    } else {
        let config = DriverConfig {
            input: cli.input,
            output: cli.output,
            format: cli.format,
            route: cli.messages,
            count_ops: cli.count,
        };
        run(&config).map(|summary| {
            log::info!(
                "{} tokens, {} diagnostics written to {}",
                summary.tokens.len(),
                summary.diagnostics,
                summary.output.display()
            );
        })
    };

    if let Err(e) = result {
        eprintln!("{}", e.to_diagnostic());
        log::debug!("{}", e);
        process::exit(1);
    }
}

/// Show tokens from scanning a file
fn show_file_tokens(filename: &Path) -> ScanResult<()> {
    let bytes = read_input(filename)?;

    let mut sink = CollectingSink::new();
    let tokens = scan_bytes(&bytes, &mut sink)?;

    let source = String::from_utf8_lossy(&bytes);
    for diagnostic in sink.diagnostics() {
        eprint!("{}", diagnostic.render(Some(&*source)));
    }

    println!("Tokens for '{}':", filename.display());
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!(
            "{:4}: {:>4}:{:<4} {:14} | {}",
            i,
            token.line(),
            token.column(),
            token.category().display_name(),
            token.lexeme()
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());
    println!("Diagnostics: {}", sink.len());

    Ok(())
}
