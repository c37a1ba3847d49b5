use thiserror::Error;

use chomsky_symbol::Symbol;

/// Reasons a grammar cannot drive the recognizer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CykError {
    /// A rule is neither `A -> a`, `A -> B C`, nor the start symbol's
    /// empty alternative.
    #[error("a rule of {lhs:?} is not in Chomsky Normal Form")]
    NotInCnf {
        /// Left-hand side of the offending rule.
        lhs: Symbol,
    },

    /// The grammar has no start symbol.
    #[error("the grammar has no start symbol")]
    MissingStartSymbol,
}
