//! Character classification
//!
//! Reduces a raw byte (or the end-of-input sentinel) to the coarse class the
//! transition table is indexed by.

use super::language::LanguageTable;

/// Coarse character class; the column index of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter = 0,
    Digit = 1,
    Quote = 2,
    Operator = 3,
    Special = 4,
    Space = 5,
    Newline = 6,
    EndOfInput = 7,
    Other = 8,
}

impl CharClass {
    pub const COUNT: usize = 9;

    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }
}

/// Classify one input unit; `None` is end of input
///
/// Precedence: end of input, letter, digit, quote, operator, special,
/// newline, other whitespace, anything else. Newline is checked before the
/// whitespace set because that set contains it.
pub fn classify(lang: &LanguageTable, unit: Option<u8>) -> CharClass {
    let Some(ch) = unit else {
        return CharClass::EndOfInput;
    };

    if lang.is_letter(ch) {
        CharClass::Letter
    } else if lang.is_digit(ch) {
        CharClass::Digit
    } else if lang.is_quote(ch) {
        CharClass::Quote
    } else if lang.is_operator(ch) {
        CharClass::Operator
    } else if lang.is_special(ch) {
        CharClass::Special
    } else if lang.is_newline(ch) {
        CharClass::Newline
    } else if lang.is_whitespace(ch) {
        CharClass::Space
    } else {
        CharClass::Other
    }
}
