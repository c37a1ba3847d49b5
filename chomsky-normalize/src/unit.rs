//! Elimination of unit rules `A -> B`.

use std::collections::HashSet;

use log::trace;

use chomsky_grammar::{Cfg, CfgRule, GrammarError};
use chomsky_symbol::Symbol;
use chomsky_symbol_bit_matrix::CfgSymbolBitMatrixExt;

use crate::useless::retain_reachable;

/// Replaces unit rules with copies of the alternatives they lead to.
///
/// For every nonterminal `A` and every `B` that `A` derives through zero
/// or more unit rules, the non-unit alternatives of `B` become
/// alternatives of `A`. `A`'s own alternatives come first, then those of
/// other symbols in ascending symbol order. An empty alternative is only
/// ever copied into the start symbol.
///
/// Nonterminals that were reachable only through unit rules are dropped
/// afterwards.
pub fn eliminate_unit_rules(grammar: &mut Cfg) -> Result<(), GrammarError> {
    let start = grammar.start().ok_or(GrammarError::MissingStartSymbol)?;
    let new_rules = unit_free_rules(grammar, start);
    grammar.set_rules(new_rules);
    retain_reachable(grammar, start);
    grammar.prune_nonterminals();
    Ok(())
}

fn unit_free_rules(grammar: &Cfg, start: Symbol) -> Vec<CfgRule> {
    let units = grammar.unit_derivation_matrix();
    let is_unit = |rhs: &[Symbol]| match rhs {
        [single] => grammar.is_nonterminal(*single),
        _ => false,
    };

    let mut new_rules = vec![];
    for lhs in grammar.lhs_symbols() {
        let mut seen: HashSet<&[Symbol]> = HashSet::new();
        let sources = Some(lhs)
            .into_iter()
            .chain(units.iter_row_syms(lhs).filter(|&sym| sym != lhs));
        for source in sources {
            for rhs in grammar.alternatives(source) {
                if is_unit(rhs) || (rhs.is_empty() && lhs != start) {
                    continue;
                }
                if seen.insert(rhs) {
                    if source != lhs {
                        trace!(
                            "copying {} into {}",
                            grammar.display_rule(&CfgRule::new(source, rhs)),
                            grammar.name_of(lhs)
                        );
                    }
                    new_rules.push(CfgRule::new(lhs, rhs));
                }
            }
        }
    }
    new_rules
}
