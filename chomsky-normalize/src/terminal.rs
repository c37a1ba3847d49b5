//! Isolation of terminals in long alternatives.

use std::collections::BTreeMap;

use log::trace;

use chomsky_grammar::{Cfg, CfgRule};
use chomsky_symbol::Symbol;

use crate::fresh::FreshNames;

/// Replaces every terminal that occurs in an alternative of two or more
/// symbols with a fresh nonterminal that derives only that terminal.
///
/// One fresh nonterminal is created per distinct terminal. Its rule is
/// appended after all existing rules. Alternatives of length one are left
/// untouched.
pub fn isolate_terminals(grammar: &mut Cfg, fresh: &mut FreshNames) {
    let mut isolated: BTreeMap<Symbol, Symbol> = BTreeMap::new();
    let mut terminal_rules = vec![];
    let rules: Vec<CfgRule> = grammar.rules().cloned().collect();

    let mut new_rules = Vec::with_capacity(rules.len());
    for rule in rules {
        let needs_rewrite =
            rule.rhs.len() >= 2 && rule.rhs.iter().any(|&sym| grammar.is_terminal(sym));
        if !needs_rewrite {
            new_rules.push(rule);
            continue;
        }
        let mut rhs = Vec::with_capacity(rule.rhs.len());
        for &sym in rule.rhs.iter() {
            if !grammar.is_terminal(sym) {
                rhs.push(sym);
                continue;
            }
            let nonterminal = match isolated.get(&sym) {
                Some(&nonterminal) => nonterminal,
                None => {
                    let nonterminal = fresh.next_nonterminal(grammar);
                    trace!(
                        "{} stands for terminal {}",
                        grammar.name_of(nonterminal),
                        grammar.name_of(sym)
                    );
                    isolated.insert(sym, nonterminal);
                    terminal_rules.push(CfgRule::new(nonterminal, [sym]));
                    nonterminal
                }
            };
            rhs.push(nonterminal);
        }
        new_rules.push(CfgRule::new(rule.lhs, rhs));
    }

    new_rules.extend(terminal_rules);
    grammar.set_rules(new_rules);
}
