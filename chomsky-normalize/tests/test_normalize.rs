use chomsky_grammar::{Cfg, GrammarError, Symbol};
use chomsky_normalize::{CfgNormalizeExt, CnfNormalizer, Stage};
use test_case::test_case;

mod support;

use support::grammar;

type Rules = &'static [(&'static str, &'static [&'static str])];

const TOY: Rules = &[("S", &["A", "B"]), ("S", &[]), ("A", &["a"]), ("B", &["b"])];

const AMBIGUOUS: Rules = &[("X", &["X", "X"]), ("X", &["x"])];

const ARITHMETIC: Rules = &[
    ("E", &["E", "+", "T"]),
    ("E", &["T"]),
    ("T", &["T", "*", "F"]),
    ("T", &["F"]),
    ("F", &["(", "E", ")"]),
    ("F", &["id"]),
];

const BALANCED: Rules = &[("S", &["a", "S", "b"]), ("S", &[])];

const TEXTBOOK: Rules = &[
    ("S", &["A", "S", "A"]),
    ("S", &["a", "B"]),
    ("A", &["B"]),
    ("A", &["S"]),
    ("B", &["b"]),
    ("B", &[]),
];

const ENGLISH: Rules = &[
    ("S", &["NP", "VP"]),
    ("VP", &["VP", "PP"]),
    ("VP", &["V", "NP"]),
    ("VP", &["cooks", "drinks", "eats", "cuts"]),
    ("PP", &["P", "NP"]),
    ("NP", &["Det", "N"]),
    ("NP", &["he"]),
    ("NP", &["she"]),
    ("V", &["cooks"]),
    ("V", &["drinks"]),
    ("P", &["in"]),
    ("P", &["with"]),
    ("N", &["cat"]),
    ("N", &["dog"]),
    ("Det", &["a"]),
    ("Det", &["the"]),
];

const EMPTY_LANGUAGE: Rules = &[("S", &["S", "a"]), ("S", &["A"]), ("A", &["A"])];

const NULLING_ONLY: Rules = &[("S", &["A", "A"]), ("A", &[])];

#[test_case(TOY ; "toy")]
#[test_case(AMBIGUOUS ; "ambiguous")]
#[test_case(ARITHMETIC ; "arithmetic")]
#[test_case(BALANCED ; "balanced")]
#[test_case(TEXTBOOK ; "textbook")]
#[test_case(ENGLISH ; "english")]
#[test_case(EMPTY_LANGUAGE ; "empty language")]
#[test_case(NULLING_ONLY ; "nulling only")]
fn test_output_is_cnf(rules: Rules) {
    let cfg = grammar(rules);
    let before = cfg.stringify_to_bnf();
    let num_syms = cfg.num_syms();

    let cnf = cfg.to_cnf().unwrap();

    assert!(cnf.is_cnf(), "not in CNF:\n{}", cnf.stringify_to_bnf());
    assert_eq!(cnf.start(), cfg.start());
    assert_eq!(cfg.stringify_to_bnf(), before);
    assert_eq!(cfg.num_syms(), num_syms);
}

#[test_case(TOY ; "toy")]
#[test_case(AMBIGUOUS ; "ambiguous")]
#[test_case(ARITHMETIC ; "arithmetic")]
#[test_case(ENGLISH ; "english")]
fn test_normalization_is_idempotent(rules: Rules) {
    let cnf = grammar(rules).to_cnf().unwrap();
    let mut normalizer = CnfNormalizer::new();
    let again = normalizer.normalize(&cnf).unwrap();

    support::assert_eq(&cnf, &again);
    assert!(normalizer.stats().iter().all(|stats| stats.fresh_symbols == 0));
}

#[test]
fn test_toy_grammar() {
    let cnf = grammar(TOY).to_cnf().unwrap();
    assert_eq!(cnf.stringify_to_bnf(), "S -> A B\nS -> ε\nA -> a\nB -> b\n");
}

#[test]
fn test_empty_string_kept_only_at_start() {
    let cnf = grammar(NULLING_ONLY).to_cnf().unwrap();
    assert_eq!(cnf.stringify_to_bnf(), "S -> ε\n");

    let cnf = grammar(TEXTBOOK).to_cnf().unwrap();
    let start = cnf.start().unwrap();
    for rule in cnf.rules().filter(|rule| rule.is_nulling()) {
        assert_eq!(rule.lhs, start);
    }
}

#[test]
fn test_empty_language() {
    let cnf = grammar(EMPTY_LANGUAGE).to_cnf().unwrap();
    assert_eq!(cnf.num_rules(), 0);
    assert!(cnf.is_cnf());
}

#[test]
fn test_stats() {
    let mut normalizer = CnfNormalizer::new();
    let cnf = normalizer.normalize(&grammar(&[("S", &["a", "b", "c"])])).unwrap();

    assert_eq!(
        cnf.stringify_to_bnf(),
        "S -> X1 X4\nX4 -> X2 X3\nX1 -> a\nX2 -> b\nX3 -> c\n"
    );
    let stats = normalizer.stats();
    let stages: Vec<Stage> = stats.iter().map(|stats| stats.stage).collect();
    assert_eq!(stages, Stage::ALL);
    let isolation = &stats[3];
    assert_eq!(isolation.fresh_symbols, 3);
    assert_eq!(isolation.rules_before, 1);
    assert_eq!(isolation.rules_after, 4);
    assert_eq!(isolation.nonterminals_before, 1);
    assert_eq!(isolation.nonterminals_after, 4);
    let arity = &stats[4];
    assert_eq!(arity.fresh_symbols, 1);
    assert_eq!(arity.rules_after, 5);
    assert_eq!(arity.nonterminals_after, 5);
}

#[test]
fn test_fresh_counter_resets_per_run() {
    let cfg = grammar(&[("S", &["a", "b", "c"])]);
    let mut normalizer = CnfNormalizer::new();
    let first = normalizer.normalize(&cfg).unwrap();
    let second = normalizer.normalize(&cfg).unwrap();

    assert_eq!(first.stringify_to_bnf(), second.stringify_to_bnf());
    assert_eq!(normalizer.stats().len(), 5);
}

#[test]
fn test_missing_start_symbol() {
    let mut cfg = Cfg::new();
    let [start] = cfg.sym();
    let x = cfg.terminal("x").unwrap();
    cfg.rule(start).rhs([x]);

    assert_eq!(cfg.to_cnf().unwrap_err(), GrammarError::MissingStartSymbol);
}

#[test]
fn test_unclassified_symbol() {
    let mut cfg = Cfg::new();
    let [start] = cfg.sym();
    let stray = Symbol::from(50usize);
    cfg.rule(start).rhs([start, stray]);
    cfg.set_start(start).unwrap();

    assert_eq!(
        cfg.to_cnf().unwrap_err(),
        GrammarError::UnclassifiedSymbol(stray)
    );
}

#[test]
fn test_is_cnf() {
    let mut cfg = Cfg::new();
    let [start, a] = cfg.sym();
    let x = cfg.terminal("x").unwrap();
    cfg.set_start(start).unwrap();
    cfg.rule(start).rhs([a, a]).rhs([]).rule(a).rhs([x]);
    assert!(cfg.is_cnf());

    let mut unit = cfg.clone();
    unit.rule(a).rhs([start]);
    assert!(!unit.is_cnf());

    let mut mixed = cfg.clone();
    mixed.rule(a).rhs([x, a]);
    assert!(!mixed.is_cnf());

    let mut nulling = cfg.clone();
    nulling.rule(a).rhs([]);
    assert!(!nulling.is_cnf());

    let mut twice = cfg.clone();
    twice.rule(start).rhs([]);
    assert!(!twice.is_cnf());
}
