//! Error handling and diagnostics for the scanner
//!
//! Two kinds of failure exist. Lexical problems (an unterminated literal, a
//! run of characters outside the alphabet) are recovered locally and surface
//! as [`Diagnostic`] values pushed through a [`DiagnosticSink`]. Resource
//! problems (the input cannot be opened, the output cannot be written) are
//! fatal to the scan and are returned as a [`ScanError`].

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod diagnostic;
pub mod sink;

pub use diagnostic::{Diagnostic, DiagnosticKind, Phase};
pub use sink::{CollectingSink, DiagnosticSink, WriterSink};

/// Result type alias for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl SourceLocation {
    /// Create a source location
    pub fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Fatal errors that abort a scan or a driver run
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input source could not be opened
    #[error("cannot open input file '{}': {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The token file could not be created or written
    #[error("cannot create output file '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input stream failed after it was opened
    #[error("error reading input: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
    /// Internal error (should not happen in normal operation)
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ScanError {
    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The catalog entry this error is reported under
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::FileOpen { .. } => DiagnosticKind::FileOpenFailure,
            Self::FileWrite { .. } => DiagnosticKind::FileWriteFailure,
            Self::Read { .. } | Self::Internal { .. } => DiagnosticKind::Internal,
        }
    }

    /// Convert into a driver-phase diagnostic carrying the offending path or message
    pub fn to_diagnostic(&self) -> Diagnostic {
        let context = match self {
            Self::FileOpen { path, .. } | Self::FileWrite { path, .. } => {
                path.display().to_string()
            }
            Self::Read { source } => source.to_string(),
            Self::Internal { message } => message.clone(),
        };
        Diagnostic::new(self.kind(), Phase::Driver, 0).with_lexeme(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::at(10, 5);
        assert_eq!(loc.to_string(), "10:5");
    }

    #[test]
    fn test_error_kind_mapping() {
        let err = ScanError::FileOpen {
            path: PathBuf::from("missing.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.kind(), DiagnosticKind::FileOpenFailure);

        let err = ScanError::internal("table corrupted");
        assert_eq!(err.kind(), DiagnosticKind::Internal);
    }

    #[test]
    fn test_error_display() {
        let err = ScanError::FileOpen {
            path: PathBuf::from("missing.c"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "cannot open input file 'missing.c': not found"
        );
    }

    #[test]
    fn test_error_to_diagnostic() {
        let err = ScanError::FileWrite {
            path: PathBuf::from("out.cscn"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.kind, DiagnosticKind::FileWriteFailure);
        assert_eq!(diag.phase, Phase::Driver);
        assert_eq!(diag.lexeme.as_deref(), Some("out.cscn"));
    }
}
