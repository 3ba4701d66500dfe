//! Diagnostic catalog and formatting
//!
//! Every recoverable scanner error is reported as exactly one [`Diagnostic`].
//! The plain [`Display`](std::fmt::Display) form is a single line suitable
//! for logs and message files; [`Diagnostic::render`] adds colour and the
//! offending source line for terminal output.

use std::fmt;

use colored::Colorize;

/// Catalog of diagnostic kinds, with stable numeric ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    FileOpenFailure,
    FileWriteFailure,
    UnterminatedLiteral,
    Unrecognized,
    Internal,
}

impl DiagnosticKind {
    /// Stable catalog id
    pub fn id(self) -> u32 {
        match self {
            Self::FileOpenFailure => 1,
            Self::FileWriteFailure => 2,
            Self::UnterminatedLiteral => 3,
            Self::Unrecognized => 4,
            Self::Internal => 5,
        }
    }

    /// Human-readable message template
    pub fn message(self) -> &'static str {
        match self {
            Self::FileOpenFailure => "Cannot open input file",
            Self::FileWriteFailure => "Cannot create output file",
            Self::UnterminatedLiteral => "Unterminated literal",
            Self::Unrecognized => "Non-recognized character(s)",
            Self::Internal => "Internal error",
        }
    }
}

/// Phase that originated a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Scanner,
    Driver,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scanner => "SCANNER",
            Self::Driver => "DRIVER",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported error condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub phase: Phase,
    /// 1-based source line; 0 when the error is not tied to a line
    pub line: usize,
    /// 1-based source column; 0 when unknown
    pub column: usize,
    /// Offending text, if any
    pub lexeme: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic without a column or lexeme
    pub fn new(kind: DiagnosticKind, phase: Phase, line: usize) -> Self {
        Self {
            kind,
            phase,
            line,
            column: 0,
            lexeme: None,
        }
    }

    /// Create a scanner-phase diagnostic for the lexeme starting at `line:column`
    pub fn scanner(kind: DiagnosticKind, line: usize, column: usize, lexeme: &str) -> Self {
        Self {
            kind,
            phase: Phase::Scanner,
            line,
            column,
            lexeme: Some(lexeme.to_string()),
        }
    }

    pub fn with_lexeme(mut self, lexeme: impl Into<String>) -> Self {
        self.lexeme = Some(lexeme.into());
        self
    }

    /// Format the diagnostic with color and, when available, source context
    pub fn render(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        let header = format!("error[{}]", self.kind.id()).red().bold();
        output.push_str(&format!("{}: {}", header, self.kind.message()));
        if let Some(ref lexeme) = self.lexeme {
            output.push_str(&format!(" '{}'", lexeme));
        }
        output.push('\n');

        if self.line == 0 {
            return output;
        }

        output.push_str(&format!(
            "  {} {} line {}\n",
            "-->".blue().bold(),
            self.phase,
            self.line
        ));

        if let Some(source) = source {
            output.push_str(&self.format_source_context(source));
        }

        output
    }

    /// Format the offending source line with a caret under the token start
    fn format_source_context(&self, source: &str) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if self.line > lines.len() {
            return output;
        }

        let line_num_width = self.line.to_string().len();

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", self.line, width = line_num_width)
                .blue()
                .bold(),
            lines[self.line - 1]
        ));

        if self.column > 0 {
            let indicator_padding = " ".repeat(line_num_width + 2 + self.column);
            let width = self.lexeme.as_ref().map_or(1, |l| l.len().max(1));
            output.push_str(&format!(
                "{}{}\n",
                indicator_padding,
                "^".repeat(width).red().bold()
            ));
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ERROR {}][{}] Line {}: {}",
            self.kind.id(),
            self.phase,
            self.line,
            self.kind.message()
        )?;
        if let Some(ref lexeme) = self.lexeme {
            write!(f, ": {}", lexeme)?;
        }
        Ok(())
    }
}
