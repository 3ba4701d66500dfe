//! Character cursor over the raw input
//!
//! This is the only component that touches the underlying byte stream. It
//! offers one byte of lookahead and keeps the 1-based coordinates of the
//! next byte to be read.

use std::fs::File;
use std::io::{self, BufReader, Bytes, Read};
use std::path::Path;

use crate::error::{ScanError, ScanResult, SourceLocation};

/// Sequential reader with single-byte lookahead and line/column tracking
///
/// `None` is the end-of-input sentinel. Reading past the end keeps returning
/// `None`. A read error also ends the stream; it is kept and can be taken
/// with [`CharCursor::take_error`] once the scan is over.
pub struct CharCursor<R: Read> {
    bytes: Bytes<BufReader<R>>,
    line: usize,
    column: usize,
    has_peek: bool,
    peek_char: Option<u8>,
    exhausted: bool,
    error: Option<io::Error>,
}

impl CharCursor<File> {
    /// Open a file for scanning
    pub fn open(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScanError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened {}", path.display());
        Ok(Self::new(file))
    }
}

impl<'a> CharCursor<&'a [u8]> {
    /// Cursor over an in-memory string
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: Read> CharCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            line: 1,
            column: 1,
            has_peek: false,
            peek_char: None,
            exhausted: false,
            error: None,
        }
    }

    fn read_unit(&mut self) -> Option<u8> {
        if self.exhausted {
            return None;
        }
        match self.bytes.next() {
            Some(Ok(ch)) => Some(ch),
            Some(Err(e)) => {
                log::error!("read failed at {}:{}: {}", self.line, self.column, e);
                self.error = Some(e);
                self.exhausted = true;
                None
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    /// Next unconsumed byte, without advancing
    pub fn peek(&mut self) -> Option<u8> {
        if !self.has_peek {
            self.peek_char = self.read_unit();
            self.has_peek = true;
        }
        self.peek_char
    }

    /// Return the next byte and advance past it
    pub fn consume(&mut self) -> Option<u8> {
        let ch = if self.has_peek {
            self.has_peek = false;
            self.peek_char
        } else {
            self.read_unit()
        };

        match ch {
            Some(b'\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        ch
    }

    /// Line of the next byte to be read
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the next byte to be read
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn location(&self) -> SourceLocation {
        SourceLocation::at(self.line, self.column)
    }

    /// The I/O error that ended the stream early, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_is_idempotent() {
        let mut cursor = CharCursor::from_source("ab");
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.consume(), Some(b'a'));
        assert_eq!(cursor.peek(), Some(b'b'));
    }

    #[test]
    fn test_consume_without_peek() {
        let mut cursor = CharCursor::from_source("xy");
        assert_eq!(cursor.consume(), Some(b'x'));
        assert_eq!(cursor.consume(), Some(b'y'));
        assert_eq!(cursor.consume(), None);
    }

    #[test]
    fn test_line_and_column_tracking() {
        let mut cursor = CharCursor::from_source("a\nbc");
        assert_eq!(cursor.location(), SourceLocation::at(1, 1));
        cursor.consume();
        assert_eq!(cursor.location(), SourceLocation::at(1, 2));
        cursor.consume();
        assert_eq!(cursor.location(), SourceLocation::at(2, 1));
        cursor.consume();
        cursor.consume();
        assert_eq!(cursor.location(), SourceLocation::at(2, 3));
    }

    #[test]
    fn test_end_of_input_is_sticky() {
        let mut cursor = CharCursor::from_source("");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.consume(), None);
        assert_eq!(cursor.location(), SourceLocation::at(1, 1));
        assert!(cursor.take_error().is_none());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_read_error_ends_stream() {
        let mut cursor = CharCursor::new(FailingReader);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.consume(), None);
        let err = cursor.take_error().unwrap();
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn test_open_missing_file() {
        let result = CharCursor::open("/nonexistent/dir/input.c");
        assert!(matches!(result, Err(ScanError::FileOpen { .. })));
    }
}
