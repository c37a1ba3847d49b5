#![allow(dead_code)]

use chomsky_cyk::ParseTree;
use chomsky_grammar::Cfg;

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

/// Builds a tree from a nested description: `node("S", [...])`.
pub fn node(cfg: &Cfg, name: &str, children: Vec<ParseTree>) -> ParseTree {
    ParseTree::node(cfg.symbol(name).unwrap(), children)
}

pub fn leaf(cfg: &Cfg, name: &str) -> ParseTree {
    ParseTree::leaf(cfg.symbol(name).unwrap())
}

/// Checks that every internal node matches an alternative of its symbol.
pub fn assert_tree_matches_rules(cfg: &Cfg, tree: &ParseTree) {
    if tree.is_leaf() {
        assert!(
            cfg.is_terminal(tree.symbol) || Some(tree.symbol) == cfg.start(),
            "leaf {} is not a terminal",
            cfg.name_of(tree.symbol)
        );
        return;
    }
    let rhs: Vec<_> = tree.children.iter().map(|child| child.symbol).collect();
    assert!(
        cfg.alternatives(tree.symbol).any(|alt| alt == &rhs[..]),
        "no alternative of {} matches {:?}",
        cfg.name_of(tree.symbol),
        rhs
    );
    for child in &tree.children {
        assert_tree_matches_rules(cfg, child);
    }
}
