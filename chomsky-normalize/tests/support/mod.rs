#![allow(dead_code)]

use chomsky_grammar::{Cfg, CfgRule};

pub fn eq_rules<'a, 'b>(
    i: impl Iterator<Item = &'a CfgRule>,
    j: impl Iterator<Item = &'b CfgRule>,
) -> bool {
    let mut rules_i = i
        .map(|rule| (rule.lhs, rule.rhs.to_vec()))
        .collect::<Vec<_>>();
    let mut rules_j = j
        .map(|rule| (rule.lhs, rule.rhs.to_vec()))
        .collect::<Vec<_>>();

    rules_i.sort();
    rules_j.sort();

    if rules_i != rules_j {
        eprintln!("Left:");
        eprintln!("{:?}", rules_i);
        eprintln!("Right:");
        eprintln!("{:?}", rules_j);
    }

    rules_i == rules_j
}

pub fn assert_eq(left: &Cfg, right: &Cfg) {
    if !eq_rules(left.rules(), right.rules()) {
        eprintln!(
            "{}\n{}",
            left.stringify_to_bnf(),
            right.stringify_to_bnf()
        );
        panic!("Rules expected to be equal");
    }
    assert_eq!(left.start(), right.start(), "Start symbols expected to be equal");
}

/// Builds a grammar from `(lhs, rhs)` pairs. Every name that appears as a
/// left-hand side is a nonterminal, all other names are terminals. The
/// first left-hand side is the start symbol.
pub fn grammar(rules: &[(&str, &[&str])]) -> Cfg {
    let mut cfg = Cfg::new();
    for &(lhs, _) in rules {
        cfg.nonterminal(lhs).unwrap();
    }
    for &(_, rhs) in rules {
        for name in rhs {
            if cfg.symbol(name).is_none() {
                cfg.terminal(name).unwrap();
            }
        }
    }
    for &(lhs, rhs) in rules {
        let lhs = cfg.symbol(lhs).unwrap();
        let rhs: Vec<_> = rhs.iter().map(|name| cfg.symbol(name).unwrap()).collect();
        cfg.add_production(lhs, rhs).unwrap();
    }
    let start = cfg.symbol(rules[0].0).unwrap();
    cfg.set_start(start).unwrap();
    cfg
}
