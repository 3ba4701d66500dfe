//! Transition table of the scanning automaton
//!
//! Rows are [`ScanState`]s, columns are [`CharClass`]es. Every pair has an
//! entry, so the scanner never branches on raw characters. `Stop` means
//! "the lookahead does not belong to this token, emit without consuming";
//! `Error` is only produced by the literal row on newline or end of input.

use super::classifier::CharClass;
use super::token::Category;

/// Automaton states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanState {
    Start = 0,
    InNumber = 1,
    InIdentifier = 2,
    InLiteral = 3,
    AcceptedOperator = 4,
    AcceptedSpecial = 5,
    InUnrecognizedRun = 6,
    LiteralClosed = 7,
    Error = 8,
    Stop = 9,
}

impl ScanState {
    pub const COUNT: usize = 10;

    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    /// States a token may be emitted from
    pub fn is_accepting(self) -> bool {
        matches!(
            self,
            Self::InNumber
                | Self::InIdentifier
                | Self::InUnrecognizedRun
                | Self::AcceptedOperator
                | Self::AcceptedSpecial
                | Self::LiteralClosed
        )
    }

    /// Category of a token emitted from this state, if it is accepting
    ///
    /// `InIdentifier` yields `Identifier`; keyword reclassification happens
    /// after the lexeme is complete.
    pub fn accept_category(self) -> Option<Category> {
        match self {
            Self::InNumber => Some(Category::Number),
            Self::InIdentifier => Some(Category::Identifier),
            Self::AcceptedOperator => Some(Category::Operator),
            Self::AcceptedSpecial => Some(Category::SpecialChar),
            Self::LiteralClosed => Some(Category::Literal),
            Self::InUnrecognizedRun => Some(Category::Unrecognized),
            Self::Start | Self::InLiteral | Self::Error | Self::Stop => None,
        }
    }
}

/// One row of the table, indexed by [`CharClass::idx`]
pub type Row = [ScanState; CharClass::COUNT];

/// Full table, indexed by [`ScanState::idx`]
pub type TransitionTable = [Row; ScanState::COUNT];

const STOP_ROW: Row = [ScanState::Stop; CharClass::COUNT];

#[rustfmt::skip]
pub static TRANSITIONS: TransitionTable = {
    use ScanState::*;
    [
        //                 Letter        Digit         Quote          Operator          Special          Space      Newline    EndOfInput Other
        /* Start        */ [InIdentifier, InNumber,     InLiteral,     AcceptedOperator, AcceptedSpecial, Start,     Start,     Stop,      InUnrecognizedRun],
        /* InNumber     */ [Stop,         InNumber,     Stop,          Stop,             Stop,            Stop,      Stop,      Stop,      Stop],
        /* InIdentifier */ [InIdentifier, InIdentifier, Stop,          Stop,             Stop,            Stop,      Stop,      Stop,      Stop],
        /* InLiteral    */ [InLiteral,    InLiteral,    LiteralClosed, InLiteral,        InLiteral,       InLiteral, Error,     Error,     InLiteral],
        /* AcceptedOp   */ STOP_ROW,
        /* AcceptedSpec */ STOP_ROW,
        /* InUnrecRun   */ [Stop,         Stop,         Stop,          Stop,             Stop,            Stop,      Stop,      Stop,      InUnrecognizedRun],
        /* LitClosed    */ STOP_ROW,
        /* Error        */ STOP_ROW,
        /* Stop         */ STOP_ROW,
    ]
};

/// Next state for `(state, class)`
#[inline]
pub fn transition(state: ScanState, class: CharClass) -> ScanState {
    lookup(&TRANSITIONS, state, class)
}

/// Next state for `(state, class)` in an arbitrary table
#[inline]
pub fn lookup(table: &TransitionTable, state: ScanState, class: CharClass) -> ScanState {
    table[state.idx()][class.idx()]
}
