#![allow(dead_code)]

use std::collections::{BTreeSet, HashSet};

use chomsky::{Cfg, CfgLoadExt, ParseTree, Symbol};

pub fn load(text: &str) -> Cfg {
    match Cfg::load(text) {
        Ok(cfg) => cfg,
        Err(error) => panic!("{}", error),
    }
}

/// Decides membership for any grammar, with empty and unit rules, by
/// computing the least set of `(symbol, from, to)` spans derivable from
/// the rules.
pub fn brute_force_accepts(cfg: &Cfg, tokens: &[Symbol]) -> bool {
    let start = match cfg.start() {
        Some(start) => start,
        None => return false,
    };
    let n = tokens.len();
    let mut derives: HashSet<(Symbol, usize, usize)> = HashSet::new();
    loop {
        let mut changed = false;
        for rule in cfg.rules() {
            for from in 0..=n {
                for to in from..=n {
                    if !derives.contains(&(rule.lhs, from, to))
                        && rhs_derives(cfg, &derives, &rule.rhs, tokens, from, to)
                    {
                        derives.insert((rule.lhs, from, to));
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    derives.contains(&(start, 0, n))
}

fn rhs_derives(
    cfg: &Cfg,
    derives: &HashSet<(Symbol, usize, usize)>,
    rhs: &[Symbol],
    tokens: &[Symbol],
    from: usize,
    to: usize,
) -> bool {
    let mut positions = BTreeSet::new();
    positions.insert(from);
    for &sym in rhs {
        let mut next = BTreeSet::new();
        for &pos in &positions {
            if cfg.is_terminal(sym) {
                if pos < to && tokens[pos] == sym {
                    next.insert(pos + 1);
                }
            } else {
                next.extend((pos..=to).filter(|&end| derives.contains(&(sym, pos, end))));
            }
        }
        positions = next;
    }
    positions.contains(&to)
}

/// Every sequence over `alphabet` of length at most `max_len`.
pub fn all_strings(alphabet: &[Symbol], max_len: usize) -> Vec<Vec<Symbol>> {
    let mut result = vec![vec![]];
    let mut layer: Vec<Vec<Symbol>> = vec![vec![]];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&sym| {
                    let mut string = prefix.clone();
                    string.push(sym);
                    string
                })
            })
            .collect();
        result.extend(layer.iter().cloned());
    }
    result
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
