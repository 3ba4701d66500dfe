//! # cscanner
//!
//! A lexical scanner for a small subset of C:
//! - Table-driven DFA with maximal munch
//! - Keyword reclassification after identifiers are complete
//! - Quoted literals and grouped unrecognized input
//!
//! ## Architecture
//!
//! The implementation is organized into several modules:
//! - `lexer`: Character cursor, classifier, transition table and scan engine
//! - `error`: Fatal errors, the diagnostic catalog and diagnostic sinks
//! - `counter`: Optional operation counting
//! - `output`: Token file formatting
//! - `config`: Driver settings

pub mod config;
pub mod counter;
pub mod error;
pub mod lexer;
pub mod output;

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use config::{DriverConfig, MessageRoute};
pub use counter::{NoopObserver, OpCounter, ScanObserver};
pub use error::{Diagnostic, DiagnosticKind, DiagnosticSink, ScanError, ScanResult, SourceLocation};
pub use lexer::{scan, Category, CharCursor, Scanner, Token, TokenSequence};
pub use output::OutputFormat;

/// Version of the scanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan an in-memory source string
pub fn scan_source(source: &str, sink: &mut dyn DiagnosticSink) -> ScanResult<TokenSequence> {
    scan_bytes(source.as_bytes(), sink)
}

/// Scan raw bytes; anything outside the ASCII alphabet is classed as other
pub fn scan_bytes(bytes: &[u8], sink: &mut dyn DiagnosticSink) -> ScanResult<TokenSequence> {
    let mut cursor = CharCursor::new(bytes);
    scan(&mut cursor, sink)
}

/// Open `path` and scan it to the end
///
/// The file is closed when this returns, on every path.
pub fn scan_file(path: impl AsRef<Path>, sink: &mut dyn DiagnosticSink) -> ScanResult<TokenSequence> {
    let mut cursor = CharCursor::open(path)?;
    scan(&mut cursor, sink)
}

/// Read a whole input file, reporting failure as [`ScanError::FileOpen`]
pub fn read_input(path: impl AsRef<Path>) -> ScanResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| ScanError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome of a successful driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub tokens: TokenSequence,
    pub diagnostics: usize,
    pub output: PathBuf,
    pub counter: Option<OpCounter>,
}

/// Scan the configured input and write its token file
///
/// Nothing is printed on failure; the caller decides how to report the
/// returned error. No output file is created unless the scan succeeds.
pub fn run(config: &DriverConfig) -> ScanResult<RunSummary> {
    log::info!(
        "scanning {} -> {}",
        config.input.display(),
        config.output_path().display()
    );
    let mut cursor = CharCursor::open(&config.input)?;
    run_with(config, &mut cursor)
}

fn run_with<R: Read>(config: &DriverConfig, cursor: &mut CharCursor<R>) -> ScanResult<RunSummary> {
    let out_path = config.output_path();

    match config.route {
        MessageRoute::Stderr => {
            let mut sink = error::WriterSink::new(io::stderr());
            let (tokens, counter) = scan_input(config, cursor, &mut sink)?;
            if let Some(counter) = counter {
                eprintln!("{}", counter.report("scan", cursor.line()));
            }
            output::write_token_file(&out_path, &tokens, config.format)?;
            Ok(RunSummary {
                tokens,
                diagnostics: sink.reported(),
                output: out_path,
                counter,
            })
        }
        MessageRoute::Output => {
            // Messages are held back until the scan is known to have succeeded.
            let mut sink = error::WriterSink::new(Vec::new());
            let (tokens, counter) = scan_input(config, cursor, &mut sink)?;
            let diagnostics = sink.reported();
            let messages = sink.into_inner();

            File::create(&out_path)
                .and_then(|file| {
                    let mut writer = BufWriter::new(file);
                    writer.write_all(&messages)?;
                    write_counter_and_tokens(&mut writer, &tokens, counter, cursor.line(), config.format)
                })
                .map_err(|source| ScanError::FileWrite {
                    path: out_path.clone(),
                    source,
                })?;

            Ok(RunSummary {
                tokens,
                diagnostics,
                output: out_path,
                counter,
            })
        }
    }
}

fn scan_input<R: Read>(
    config: &DriverConfig,
    cursor: &mut CharCursor<R>,
    sink: &mut dyn DiagnosticSink,
) -> ScanResult<(TokenSequence, Option<OpCounter>)> {
    let scanner = Scanner::default();
    if config.count_ops {
        let mut counter = OpCounter::new();
        let tokens = scanner.scan_with(cursor, sink, &mut counter)?;
        Ok((tokens, Some(counter)))
    } else {
        Ok((scanner.scan(cursor, sink)?, None))
    }
}

fn write_counter_and_tokens<W: Write>(
    writer: &mut W,
    tokens: &TokenSequence,
    counter: Option<OpCounter>,
    line: usize,
    format: OutputFormat,
) -> io::Result<()> {
    if let Some(counter) = counter {
        writeln!(writer, "{}", counter.report("scan", line))?;
    }
    output::write_tokens(writer, tokens, format)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_scan_source() {
        let mut diagnostics = Vec::new();
        let tokens = scan_source("int main() { return 0; }", &mut diagnostics).unwrap();
        assert_eq!(tokens.len(), 9);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_scan_bytes_accepts_non_utf8() {
        let mut diagnostics = Vec::new();
        let tokens = scan_bytes(b"int x;\n\xff\xfe y;\n", &mut diagnostics).unwrap();
        let categories: Vec<Category> = tokens.iter().map(Token::category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Keyword,
                Category::Identifier,
                Category::SpecialChar,
                Category::Unrecognized,
                Category::Identifier,
                Category::SpecialChar,
            ]
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Unrecognized);
        assert_eq!(diagnostics[0].line, 2);
    }

    #[test]
    fn test_read_input_missing() {
        let result = read_input("/nonexistent/dir/input.c");
        assert!(matches!(result, Err(ScanError::FileOpen { .. })));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_read_failure_leaves_no_output_file() {
        let out_path = std::env::temp_dir().join(format!("cscanner-readfail-{}.cscn", std::process::id()));
        let _ = fs::remove_file(&out_path);
        let config = DriverConfig::new("unused.c")
            .with_output(&out_path)
            .with_route(MessageRoute::Output);

        let mut cursor = CharCursor::new(FailingReader);
        let result = run_with(&config, &mut cursor);

        assert!(matches!(result, Err(ScanError::Read { .. })));
        assert!(!out_path.exists());
    }

    #[test]
    fn test_scan_file_missing() {
        let mut diagnostics = Vec::new();
        let result = scan_file("/nonexistent/dir/input.c", &mut diagnostics);
        assert!(matches!(result, Err(ScanError::FileOpen { .. })));
        assert!(diagnostics.is_empty());
    }
}
