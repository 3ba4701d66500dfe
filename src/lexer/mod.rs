//! Lexical analysis module
//!
//! This module turns a character stream into classified tokens using a
//! table-driven automaton.

pub mod classifier;
pub mod cursor;
pub mod dfa;
pub mod language;
pub mod scanner;
pub mod token;

pub use classifier::{classify, CharClass};
pub use cursor::CharCursor;
pub use dfa::{ScanState, TransitionTable, TRANSITIONS};
pub use language::{LanguageTable, MAX_LEXEME_LEN};
pub use scanner::{scan, Scanner};
pub use token::{Category, Token, TokenSequence};
