//! Splitting of long alternatives into binary ones.

use log::trace;

use chomsky_grammar::{Cfg, CfgRule};

use crate::fresh::FreshNames;

/// Replaces every alternative `A -> r0 r1 ... r(k-1)` with `k > 2` by a
/// right-branching chain:
///
/// ```text
/// A -> r0 X1
/// X1 -> r1 X2
/// ...
/// X(k-2) -> r(k-2) r(k-1)
/// ```
///
/// Every fresh nonterminal belongs to exactly one chain. The chain takes
/// the place of the original alternative in rule order.
pub fn reduce_arity(grammar: &mut Cfg, fresh: &mut FreshNames) {
    let rules: Vec<CfgRule> = grammar.rules().cloned().collect();
    let mut new_rules = Vec::with_capacity(rules.len());

    for rule in rules {
        let len = rule.rhs.len();
        if len <= 2 {
            new_rules.push(rule);
            continue;
        }
        trace!("splitting {}", grammar.display_rule(&rule));
        let mut lhs = rule.lhs;
        for &sym in &rule.rhs[..len - 2] {
            let next = fresh.next_nonterminal(grammar);
            new_rules.push(CfgRule::new(lhs, [sym, next]));
            lhs = next;
        }
        new_rules.push(CfgRule::new(lhs, &rule.rhs[len - 2..]));
    }

    grammar.set_rules(new_rules);
}
