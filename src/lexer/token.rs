//! Token definitions for the scanner
//!
//! A [`Token`] is an immutable classified lexeme with the position of its
//! first character. Tokens are collected, in arrival order, in a
//! [`TokenSequence`] owned by whoever started the scan.

use std::fmt;
use std::ops::Index;

use crate::error::SourceLocation;

use super::language::MAX_LEXEME_LEN;

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Number,
    Identifier,
    Keyword,
    Literal,
    Operator,
    SpecialChar,
    Unrecognized,
}

impl Category {
    /// Display name used when tokens are serialized
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Identifier => "Identifier",
            Self::Keyword => "Keyword",
            Self::Literal => "Literal",
            Self::Operator => "Operator",
            Self::SpecialChar => "SpecialChar",
            Self::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexeme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    lexeme: String,
    category: Category,
    location: SourceLocation,
}

impl Token {
    /// Create a new token, capping the lexeme at [`MAX_LEXEME_LEN`] bytes
    pub fn new(lexeme: impl Into<String>, category: Category, location: SourceLocation) -> Self {
        let mut lexeme = lexeme.into();
        if lexeme.len() > MAX_LEXEME_LEN {
            let mut end = MAX_LEXEME_LEN;
            while !lexeme.is_char_boundary(end) {
                end -= 1;
            }
            lexeme.truncate(end);
        }
        Self {
            lexeme,
            category,
            location,
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// 1-based line of the first character
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// 1-based column of the first character
    pub fn column(&self) -> usize {
        self.location.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.lexeme, self.category)
    }
}

/// Insertion-ordered token collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token; existing entries are never touched
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Consecutive runs of tokens that start on the same source line
    pub fn lines(&self) -> impl Iterator<Item = (usize, &[Token])> + '_ {
        self.tokens
            .chunk_by(|a, b| a.line() == b.line())
            .map(|group| (group[0].line(), group))
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
