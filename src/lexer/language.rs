//! Language table for the scanned C subset
//!
//! All language-dependent data lives here: the alphabet, the keyword set and
//! the lexeme bound. The classifier and the scanner only consult this table,
//! so swapping it yields a scanner for a structurally similar language.

/// Maximum stored lexeme length in bytes; longer lexemes are truncated
pub const MAX_LEXEME_LEN: usize = 1024;

/// Static description of a scannable language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageTable {
    pub keywords: &'static [&'static str],
    pub operators: &'static [u8],
    pub specials: &'static [u8],
    pub whitespace: &'static [u8],
    pub quote: u8,
    pub newline: u8,
    pub max_lexeme_len: usize,
}

impl LanguageTable {
    /// The supported subset of C
    pub const C_SUBSET: LanguageTable = LanguageTable {
        keywords: &["if", "else", "while", "return", "int", "char", "void"],
        operators: b"=>+*",
        specials: b"();{}[],",
        whitespace: b" \t\r\n",
        quote: b'"',
        newline: b'\n',
        max_lexeme_len: MAX_LEXEME_LEN,
    };

    pub fn is_letter(&self, ch: u8) -> bool {
        ch.is_ascii_alphabetic()
    }

    pub fn is_digit(&self, ch: u8) -> bool {
        ch.is_ascii_digit()
    }

    pub fn is_quote(&self, ch: u8) -> bool {
        ch == self.quote
    }

    pub fn is_operator(&self, ch: u8) -> bool {
        self.operators.contains(&ch)
    }

    pub fn is_special(&self, ch: u8) -> bool {
        self.specials.contains(&ch)
    }

    pub fn is_newline(&self, ch: u8) -> bool {
        ch == self.newline
    }

    /// Whitespace set; includes the newline character
    pub fn is_whitespace(&self, ch: u8) -> bool {
        self.whitespace.contains(&ch)
    }

    /// Exact, case-sensitive keyword lookup
    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.keywords.iter().any(|kw| *kw == lexeme)
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::C_SUBSET
    }
}
