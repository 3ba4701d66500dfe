//! Scan engine for the C subset
//!
//! Drives the transition table over a [`CharCursor`]. Each call to
//! [`Scanner::next_token`] produces one token (or reports that the input is
//! exhausted) and owns its own scratch state, so nothing carries over between
//! tokens except the cursor position.

use std::io::Read;

use log::{debug, info, trace, warn};

use crate::counter::{NoopObserver, ScanObserver};
use crate::error::{Diagnostic, DiagnosticKind, DiagnosticSink, ScanError, ScanResult, SourceLocation};

use super::classifier::{classify, CharClass};
use super::cursor::CharCursor;
use super::dfa::{lookup, ScanState, TransitionTable, TRANSITIONS};
use super::language::LanguageTable;
use super::token::{Category, Token, TokenSequence};

/// Per-token working state
struct Scratch {
    lexeme: Vec<u8>,
    state: ScanState,
    /// Most recent accepting state and the lexeme length when it was entered
    last_accept: Option<(ScanState, usize)>,
    start: SourceLocation,
}

impl Scratch {
    fn new(start: SourceLocation) -> Self {
        Self {
            lexeme: Vec::new(),
            state: ScanState::Start,
            last_accept: None,
            start,
        }
    }

    /// Append to the lexeme; bytes beyond `max_len` are dropped
    fn push(&mut self, ch: u8, max_len: usize) {
        if self.lexeme.len() < max_len {
            self.lexeme.push(ch);
        }
    }

    fn text(&self, len: usize) -> String {
        String::from_utf8_lossy(&self.lexeme[..len]).into_owned()
    }
}

/// Table-driven scanner
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    lang: LanguageTable,
    table: &'static TransitionTable,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(LanguageTable::default())
    }
}

impl Scanner {
    /// Scanner for the given language table
    pub fn new(lang: LanguageTable) -> Self {
        Self {
            lang,
            table: &TRANSITIONS,
        }
    }

    /// Drive the scan with a different transition table
    pub fn with_table(mut self, table: &'static TransitionTable) -> Self {
        self.table = table;
        self
    }

    /// Scan the whole input
    pub fn scan<R: Read>(
        &self,
        cursor: &mut CharCursor<R>,
        sink: &mut dyn DiagnosticSink,
    ) -> ScanResult<TokenSequence> {
        self.scan_with(cursor, sink, &mut NoopObserver)
    }

    /// Scan the whole input, reporting operation counts to `observer`
    pub fn scan_with<R: Read>(
        &self,
        cursor: &mut CharCursor<R>,
        sink: &mut dyn DiagnosticSink,
        observer: &mut dyn ScanObserver,
    ) -> ScanResult<TokenSequence> {
        info!("scan started");
        let mut tokens = TokenSequence::new();

        while let Some(token) = self.next_token(cursor, sink, observer) {
            debug!("{} at {}", token, token.location());
            tokens.push(token);
        }

        if let Some(source) = cursor.take_error() {
            return Err(ScanError::Read { source });
        }

        info!(
            "scan finished: {} tokens, {} lines",
            tokens.len(),
            cursor.line()
        );
        Ok(tokens)
    }

    /// Produce the next token, or `None` once the input is exhausted
    pub fn next_token<R: Read>(
        &self,
        cursor: &mut CharCursor<R>,
        sink: &mut dyn DiagnosticSink,
        observer: &mut dyn ScanObserver,
    ) -> Option<Token> {
        let mut scratch = Scratch::new(cursor.location());

        loop {
            let unit = cursor.peek();
            let class = classify(&self.lang, unit);
            observer.comparisons(2);

            let next = lookup(self.table, scratch.state, class);
            trace!("{:?} --{:?}--> {:?}", scratch.state, class, next);

            match next {
                ScanState::Error => return Some(self.unterminated_literal(&scratch, sink)),
                ScanState::Stop => {
                    if let Some((state, len)) = scratch.last_accept {
                        return Some(self.accept(&scratch, state, len, sink));
                    }
                    if scratch.state == ScanState::Start && class == CharClass::EndOfInput {
                        return None;
                    }
                    return self.fallback(scratch, cursor, sink, observer);
                }
                ScanState::Start if scratch.state == ScanState::Start => {
                    // Whitespace between tokens never reaches the lexeme.
                    cursor.consume();
                    observer.io(1);
                }
                _ => {
                    if scratch.state == ScanState::Start {
                        scratch.start = cursor.location();
                    }
                    if let Some(ch) = cursor.consume() {
                        scratch.push(ch, self.lang.max_lexeme_len);
                        observer.general(1);
                    }
                    observer.io(1);

                    scratch.state = next;
                    if next.is_accepting() {
                        scratch.last_accept = Some((next, scratch.lexeme.len()));
                    }
                }
            }
        }
    }

    /// Emit the longest accepted prefix
    fn accept(
        &self,
        scratch: &Scratch,
        state: ScanState,
        len: usize,
        sink: &mut dyn DiagnosticSink,
    ) -> Token {
        let lexeme = scratch.text(len);
        let mut category = state.accept_category().unwrap_or(Category::Unrecognized);

        if category == Category::Identifier && self.lang.is_keyword(&lexeme) {
            category = Category::Keyword;
        }

        if category == Category::Unrecognized {
            sink.report(Diagnostic::scanner(
                DiagnosticKind::Unrecognized,
                scratch.start.line,
                scratch.start.column,
                &lexeme,
            ));
        }

        Token::new(lexeme, category, scratch.start)
    }

    /// Literal cut off by a newline or end of input
    ///
    /// The newline itself is left in the cursor.
    fn unterminated_literal(&self, scratch: &Scratch, sink: &mut dyn DiagnosticSink) -> Token {
        let lexeme = scratch.text(scratch.lexeme.len());
        sink.report(Diagnostic::scanner(
            DiagnosticKind::UnterminatedLiteral,
            scratch.start.line,
            scratch.start.column,
            &lexeme,
        ));
        Token::new(lexeme, Category::Unrecognized, scratch.start)
    }

    /// Stop with nothing accepted: a malformed table
    ///
    /// Consumes one character and reports it so the scan always advances.
    /// At end of input any buffered bytes are still reported.
    fn fallback<R: Read>(
        &self,
        mut scratch: Scratch,
        cursor: &mut CharCursor<R>,
        sink: &mut dyn DiagnosticSink,
        observer: &mut dyn ScanObserver,
    ) -> Option<Token> {
        warn!(
            "no accepting state from {:?} at {}",
            scratch.state,
            cursor.location()
        );
        if scratch.state == ScanState::Start {
            scratch.start = cursor.location();
        }
        match cursor.consume() {
            Some(ch) => {
                observer.io(1);
                scratch.push(ch, self.lang.max_lexeme_len);
            }
            None if scratch.lexeme.is_empty() => return None,
            None => {}
        }

        let lexeme = scratch.text(scratch.lexeme.len());
        sink.report(Diagnostic::scanner(
            DiagnosticKind::Unrecognized,
            scratch.start.line,
            scratch.start.column,
            &lexeme,
        ));
        Some(Token::new(lexeme, Category::Unrecognized, scratch.start))
    }
}

/// Scan `cursor` to the end with the default C-subset table
pub fn scan<R: Read>(
    cursor: &mut CharCursor<R>,
    sink: &mut dyn DiagnosticSink,
) -> ScanResult<TokenSequence> {
    Scanner::default().scan(cursor, sink)
}
