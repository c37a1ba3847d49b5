//! Context-free grammar model. Symbols are classified as terminal or
//! nonterminal when they enter the grammar, never guessed from their names.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]

pub mod cfg;
pub mod error;
mod occurence_map;
pub mod rule_builder;
pub mod symbol_bit_set;

pub use crate::cfg::{Cfg, CfgRule, SymbolKind};
pub use crate::error::GrammarError;
pub use crate::symbol_bit_set::SymbolBitSet;
pub use chomsky_symbol::{Symbol, SymbolName, SymbolSource};

pub(crate) mod local_prelude {
    pub use crate::cfg::{Cfg, CfgRule};
    pub use crate::symbol_bit_set::SymbolBitSet;
    pub use chomsky_symbol::{Symbol, SymbolSource};
}
