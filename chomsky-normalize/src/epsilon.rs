//! Elimination of empty alternatives.

use std::collections::HashSet;

use itertools::Itertools;
use log::trace;

use chomsky_grammar::{Cfg, CfgRule, GrammarError, SymbolBitSet};
use chomsky_symbol::Symbol;

/// Removes all empty alternatives except for the start symbol's.
///
/// Every non-empty alternative with `k` positions holding nullable symbols
/// is replaced by up to `2^k` alternatives, one for every subset of those
/// positions removed. This blowup is inherent to the transformation.
/// Alternatives that become empty are discarded, and duplicate
/// alternatives of one left-hand side are kept once.
///
/// Symbols that derive nothing but the empty string are removed from
/// every alternative.
///
/// The start symbol gets a single `start -> ε` alternative, appended last,
/// if and only if it is nullable.
pub fn eliminate_epsilon_rules(grammar: &mut Cfg) -> Result<(), GrammarError> {
    let start = grammar.start().ok_or(GrammarError::MissingStartSymbol)?;
    let nullable = grammar.nullable_symbols();
    let only_nulling = only_nulling_symbols(grammar, &nullable);

    let mut seen: HashSet<CfgRule> = HashSet::new();
    let mut new_rules = vec![];
    for rule in grammar.rules() {
        if rule.is_nulling() {
            continue;
        }
        let rhs: Vec<Symbol> = rule
            .rhs
            .iter()
            .copied()
            .filter(|&sym| !only_nulling[sym])
            .collect();
        let optional: Vec<usize> = rhs
            .iter()
            .enumerate()
            .filter(|&(_, &sym)| nullable[sym])
            .map(|(pos, _)| pos)
            .collect();
        for removed in subsets(optional.len()) {
            let new_rhs: Vec<Symbol> = rhs
                .iter()
                .enumerate()
                .filter(|(pos, _)| !removed.iter().any(|&i| optional[i] == *pos))
                .map(|(_, &sym)| sym)
                .collect();
            if new_rhs.is_empty() {
                continue;
            }
            let new_rule = CfgRule::new(rule.lhs, new_rhs);
            if seen.insert(new_rule.clone()) {
                new_rules.push(new_rule);
            }
        }
    }

    if nullable[start] {
        trace!("{} keeps an empty alternative", grammar.name_of(start));
        new_rules.push(CfgRule::new(start, []));
    }

    grammar.set_rules(new_rules);
    grammar.prune_nonterminals();
    Ok(())
}

/// Nullable symbols that derive no non-empty terminal string.
fn only_nulling_symbols(grammar: &Cfg, nullable: &SymbolBitSet) -> SymbolBitSet {
    let mut non_empty = grammar.terminal_symbols();
    let mut changed = true;
    while changed {
        changed = false;
        for rule in grammar.rules() {
            if non_empty[rule.lhs] {
                continue;
            }
            let all_usable = rule
                .rhs
                .iter()
                .all(|&sym| nullable[sym] || non_empty[sym]);
            let some_non_empty = rule.rhs.iter().any(|&sym| non_empty[sym]);
            if all_usable && some_non_empty {
                non_empty.set(rule.lhs, true);
                changed = true;
            }
        }
    }
    nullable.iter().filter(|&sym| !non_empty[sym]).collect()
}

/// Yields the subsets of `0..k`, smallest first, each in lexicographic
/// order.
fn subsets(k: usize) -> impl Iterator<Item = Vec<usize>> {
    (0..k).powerset()
}
