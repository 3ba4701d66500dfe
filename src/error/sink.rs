//! Destinations for diagnostics
//!
//! The scanner never prints. It hands each [`Diagnostic`] to a
//! [`DiagnosticSink`] at the moment the error is detected, and the caller
//! decides where it ends up.

use std::io::Write;

use super::Diagnostic;

/// Receiver for diagnostics emitted during a scan
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Keeps every diagnostic in arrival order
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Writes one line per diagnostic to an output stream
pub struct WriterSink<W: Write> {
    writer: W,
    reported: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reported: 0,
        }
    }

    /// Number of diagnostics reported so far
    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        // A broken message stream must not abort the scan.
        if let Err(e) = writeln!(self.writer, "{}", diagnostic) {
            log::error!("failed to write diagnostic ({}): {}", e, diagnostic);
        }
    }
}
