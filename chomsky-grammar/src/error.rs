//! Errors raised while building a grammar.

use thiserror::Error;

use crate::cfg::SymbolKind;
use chomsky_symbol::Symbol;

/// Caller defects detected while a grammar is built or handed over
/// for normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A rule mentions a symbol that was never classified as terminal or
    /// nonterminal in this grammar.
    #[error("symbol {0:?} was never classified as terminal or non-terminal")]
    UnclassifiedSymbol(Symbol),

    /// A terminal was used where only nonterminals are allowed.
    #[error("terminal {0:?} cannot be used as a left-hand side or start symbol")]
    TerminalOnLeftHandSide(Symbol),

    /// A name was interned twice with different classifications.
    #[error("'{name}' is already classified as a {kind}")]
    ConflictingClassification {
        /// The offending name.
        name: String,
        /// The classification it already has.
        kind: SymbolKind,
    },

    /// The grammar has no start symbol.
    #[error("the grammar has no start symbol")]
    MissingStartSymbol,
}
