//! Removal of useless symbols.

use log::trace;

use chomsky_grammar::{Cfg, GrammarError, SymbolBitSet};
use chomsky_symbol::Symbol;
use chomsky_symbol_bit_matrix::CfgSymbolBitMatrixExt;

/// Removes every rule that cannot take part in a derivation of a terminal
/// string from the start symbol. The language does not change.
///
/// Generating symbols are computed first. Rules that mention a
/// non-generating symbol are dropped, then rules whose left-hand side is
/// unreachable from the start symbol. The reverse order could keep
/// reachable symbols that are not generating.
///
/// Nonterminals left without alternatives are forgotten. If the start
/// symbol is not generating, the grammar ends up empty.
pub fn eliminate_useless_symbols(grammar: &mut Cfg) -> Result<(), GrammarError> {
    let start = grammar.start().ok_or(GrammarError::MissingStartSymbol)?;

    let generating = grammar.generating_symbols();
    grammar.retain(|rule| generating[rule.lhs] && rule.rhs.iter().all(|&sym| generating[sym]));

    retain_reachable(grammar, start);
    grammar.prune_nonterminals();
    Ok(())
}

/// Drops rules whose left-hand side cannot be reached from `start`.
pub(crate) fn retain_reachable(grammar: &mut Cfg, start: Symbol) {
    let reachability = grammar.reachability_matrix();
    let reachable: SymbolBitSet = reachability.iter_row_syms(start).collect();
    let unreachable = grammar
        .rules()
        .filter(|rule| !reachable[rule.lhs])
        .count();
    if unreachable > 0 {
        trace!(
            "dropping {} rules unreachable from {}",
            unreachable,
            grammar.name_of(start)
        );
        grammar.retain(|rule| reachable[rule.lhs]);
    }
}
