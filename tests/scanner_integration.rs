//! End-to-end tests: files on disk through the scanner and the driver.

use std::fs;
use std::path::PathBuf;

use cscanner::error::CollectingSink;
use cscanner::{
    read_input, run, scan_file, Category, DiagnosticKind, DriverConfig, MessageRoute, OutputFormat,
    ScanError,
};
use pretty_assertions::assert_eq;

const SAMPLE: &str = "if(x > 3)\n printf(\"true\");\nelse\n printf(\"false\");\n";

/// Scratch directory removed again when dropped
struct TempDir(PathBuf);

impl TempDir {
    fn new(test: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("cscanner-{}-{}", test, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    /// Write `contents` to a file in this directory
    fn input(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.0.join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn test_scan_file_sample_program() {
    let dir = TempDir::new("sample");
    let path = dir.input("sample.c", SAMPLE);
    let mut sink = CollectingSink::new();
    let tokens = scan_file(&path, &mut sink).unwrap();

    assert_eq!(tokens.len(), 17);
    assert_eq!(tokens[0].category(), Category::Keyword);
    assert_eq!(tokens[8].category(), Category::Literal);
    assert_eq!(tokens[11].category(), Category::Keyword);
    assert!(sink.is_empty());
}

#[test]
fn test_run_writes_release_token_file() {
    let dir = TempDir::new("release");
    let path = dir.input("release.c", SAMPLE);
    let summary = run(&DriverConfig::new(&path)).unwrap();

    assert_eq!(summary.output, PathBuf::from(format!("{}scn", path.display())));
    assert_eq!(summary.tokens.len(), 17);
    assert_eq!(summary.diagnostics, 0);
    assert!(summary.counter.is_none());

    let written = fs::read_to_string(&summary.output).unwrap();
    assert_eq!(
        written,
        "<if, Keyword> <(, SpecialChar> <x, Identifier> <>, Operator> <3, Number> <), SpecialChar>\n\
         <printf, Identifier> <(, SpecialChar> <\"true\", Literal> <), SpecialChar> <;, SpecialChar>\n\
         <else, Keyword>\n\
         <printf, Identifier> <(, SpecialChar> <\"false\", Literal> <), SpecialChar> <;, SpecialChar>\n"
    );
}

#[test]
fn test_run_debug_format_with_messages_in_output() {
    let dir = TempDir::new("debug");
    let path = dir.input("debug.c", "x = @#$;\n\"open\n");
    let output = path.with_extension("tokens");
    let config = DriverConfig::new(&path)
        .with_output(&output)
        .with_format(OutputFormat::Debug)
        .with_route(MessageRoute::Output)
        .with_count_ops(true);

    let summary = run(&config).unwrap();
    assert_eq!(summary.diagnostics, 2);
    let counter = summary.counter.unwrap();
    assert_eq!(counter.io, 15);

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[ERROR 4][SCANNER] Line 1: Non-recognized character(s): @#$",
            "[ERROR 3][SCANNER] Line 2: Unterminated literal: \"open",
            "[COUNTER] Line 3 | Func: scan | COMP=42 IO=15 GEN=11",
            "1 <x, Identifier> <=, Operator> <@#$, Unrecognized> <;, SpecialChar>",
            "",
            "2 <\"open, Unrecognized>",
        ]
    );
}

#[test]
fn test_run_missing_input_fails() {
    let config = DriverConfig::new("/nonexistent/dir/input.c");
    let result = run(&config);
    assert!(matches!(result, Err(ScanError::FileOpen { .. })));
}

#[test]
fn test_unterminated_literal_is_never_a_literal() {
    let dir = TempDir::new("unterminated");
    let path = dir.input("unterminated.c", "char s = \"abc;\nint y;");
    let mut sink = CollectingSink::new();
    let tokens = scan_file(&path, &mut sink).unwrap();

    assert!(tokens.iter().all(|t| t.category() != Category::Literal));
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.diagnostics()[0].kind, DiagnosticKind::UnterminatedLiteral);
    assert_eq!(sink.diagnostics()[0].lexeme.as_deref(), Some("\"abc;"));
    assert_eq!(tokens.iter().filter(|t| t.line() == 2).count(), 3);
}

#[test]
fn test_scan_file_non_utf8_input() {
    let dir = TempDir::new("non-utf8");
    let path = dir.input("bad.c", b"int x;\n\xff\xfe y;\n");
    let mut sink = CollectingSink::new();
    let tokens = scan_file(&path, &mut sink).unwrap();

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[3].category(), Category::Unrecognized);
    assert_eq!(tokens[3].line(), 2);
    assert_eq!(sink.len(), 1);

    assert_eq!(read_input(&path).unwrap().len(), 13);
}

#[test]
fn test_temp_dir_is_removed() {
    let dir = TempDir::new("cleanup");
    let path = dir.input("gone.c", "x");
    let summary = run(&DriverConfig::new(&path)).unwrap();
    assert!(summary.output.exists());

    let root = dir.0.clone();
    drop(dir);
    assert!(!root.exists());
}
