use chomsky_grammar::Cfg;
use chomsky_symbol_bit_matrix::CfgSymbolBitMatrixExt;

#[test]
fn test_reachability_is_reflexive_and_transitive() {
    let mut cfg = Cfg::new();
    let [start, a, b, c] = cfg.sym();
    let x = cfg.terminal("x").unwrap();
    cfg.rule(start).rhs([a]).rule(a).rhs([b, x]).rule(c).rhs([x]);

    let reach = cfg.reachability_matrix();
    assert!(reach[(start, start)]);
    assert!(reach[(start, a)]);
    assert!(reach[(start, b)]);
    assert!(reach[(start, x)]);
    assert!(!reach[(start, c)]);
    assert!(reach[(c, c)]);
    assert!(!reach[(a, start)]);
}

#[test]
fn test_unit_derivation_ignores_terminals() {
    let mut cfg = Cfg::new();
    let [a, b, c] = cfg.sym();
    let x = cfg.terminal("x").unwrap();
    cfg.rule(a).rhs([b]).rule(b).rhs([c]).rule(c).rhs([x]);

    let units = cfg.unit_derivation_matrix();
    assert!(units[(a, a)]);
    assert!(units[(a, b)]);
    assert!(units[(a, c)]);
    assert!(!units[(a, x)]);
    assert!(!units[(c, x)]);
    assert!(!units[(b, a)]);
    assert_eq!(units.iter_row_syms(a).collect::<Vec<_>>(), vec![a, b, c]);
}

#[test]
fn test_unit_cycle() {
    let mut cfg = Cfg::new();
    let [a, b] = cfg.sym();
    cfg.rule(a).rhs([b]).rule(b).rhs([a]);

    let units = cfg.unit_derivation_matrix();
    assert!(units[(a, b)]);
    assert!(units[(b, a)]);
    assert_eq!(units.iter_row_syms(b).collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_symbols_outside_the_matrix_are_unrelated() {
    let mut cfg = Cfg::new();
    let [a] = cfg.sym();
    cfg.rule(a).rhs([]);
    let reach = cfg.reachability_matrix();

    let mut bigger = cfg.clone();
    let [late] = bigger.sym();
    assert!(!reach[(a, late)]);
    assert!(!reach[(late, late)]);
    assert_eq!(reach.iter_row_syms(late).count(), 0);
}
