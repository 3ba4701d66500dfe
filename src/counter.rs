//! Operation counting
//!
//! The scanner reports its work to a [`ScanObserver`]. The default observer
//! ignores everything; [`OpCounter`] keeps totals for profiling runs.

use std::fmt;

/// Receives operation counts from the scanner
pub trait ScanObserver {
    /// Comparisons performed (lookahead and classification)
    fn comparisons(&mut self, _n: u64) {}

    /// Characters read from the input
    fn io(&mut self, _n: u64) {}

    /// General operations (characters appended to a lexeme)
    fn general(&mut self, _n: u64) {}
}

/// Observer that discards every count
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Accumulates comparison, I/O and general operation counts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpCounter {
    pub comparisons: u64,
    pub io: u64,
    pub general: u64,
}

impl OpCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report line in the `[COUNTER]` format
    pub fn report(&self, func_name: &str, line: usize) -> String {
        format!("[COUNTER] Line {} | Func: {} | {}", line, func_name, self)
    }
}

impl ScanObserver for OpCounter {
    fn comparisons(&mut self, n: u64) {
        self.comparisons += n;
    }

    fn io(&mut self, n: u64) {
        self.io += n;
    }

    fn general(&mut self, n: u64) {
        self.general += n;
    }
}

impl fmt::Display for OpCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "COMP={} IO={} GEN={}",
            self.comparisons, self.io, self.general
        )
    }
}
