use chomsky::{CfgNormalizeExt, CykEngine, Symbol};
use test_case::test_case;

mod support;

use support::{all_strings, assert_tree_matches_rules, brute_force_accepts, load};

const BALANCED: &str = "S -> a S b | ε";

const TEXTBOOK: &str = "
S -> A S A | a B
A -> B | S
B -> b | ε
";

const ARITHMETIC: &str = "
E -> E '+' T | T
T -> T '*' F | F
F -> '(' E ')' | id
";

const UNIT_CYCLE: &str = "
S -> A | a S
A -> B | b
B -> A | S c
";

const OPTIONAL_PARTS: &str = "
S -> A B C
A -> a | ε
B -> b | ε
C -> c | ε
";

const PALINDROMES: &str = "S -> a S a | b S b | a | b | ε";

const USELESS: &str = "
S -> a | B | a D
B -> B b
C -> c
D -> d
";

const EMPTY_LANGUAGE: &str = "S -> S a";

#[test_case(BALANCED, 8 ; "balanced")]
#[test_case(TEXTBOOK, 6 ; "textbook")]
#[test_case(ARITHMETIC, 5 ; "arithmetic")]
#[test_case(UNIT_CYCLE, 6 ; "unit cycle")]
#[test_case(OPTIONAL_PARTS, 4 ; "optional parts")]
#[test_case(PALINDROMES, 7 ; "palindromes")]
#[test_case(USELESS, 4 ; "useless")]
#[test_case(EMPTY_LANGUAGE, 4 ; "empty language")]
fn test_language_is_preserved(text: &str, max_len: usize) {
    let cfg = load(text);
    let cnf = cfg.to_cnf().unwrap();
    assert!(cnf.is_cnf(), "{}", cnf.stringify_to_bnf());
    let engine = CykEngine::new(&cnf).unwrap();

    let alphabet: Vec<Symbol> = cfg.terminals().collect();
    for string in all_strings(&alphabet, max_len) {
        let expected = brute_force_accepts(&cfg, &string);
        let parse = engine.parse_symbols(&string);
        assert_eq!(
            parse.accepted(),
            expected,
            "{:?}\n{}",
            string
                .iter()
                .map(|&sym| cfg.name_of(sym))
                .collect::<Vec<_>>(),
            cnf.stringify_to_bnf()
        );
        assert_eq!(parse.tree().is_some(), expected);
        if let Some(tree) = parse.tree() {
            assert_eq!(tree.leaves(), string);
            assert_tree_matches_rules(&cnf, tree);
        }
    }
}

#[test_case(BALANCED ; "balanced")]
#[test_case(TEXTBOOK ; "textbook")]
#[test_case(ARITHMETIC ; "arithmetic")]
#[test_case(UNIT_CYCLE ; "unit cycle")]
#[test_case(OPTIONAL_PARTS ; "optional parts")]
#[test_case(PALINDROMES ; "palindromes")]
#[test_case(USELESS ; "useless")]
fn test_normalization_is_deterministic(text: &str) {
    let first = load(text).to_cnf().unwrap();
    let second = load(text).to_cnf().unwrap();
    assert_eq!(first.stringify_to_bnf(), second.stringify_to_bnf());
}

#[test]
fn test_sentences_from_text() {
    let cfg = load(
        "
        # a small fragment of English
        S -> NP VP
        VP -> VP PP | V NP | eats
        PP -> P NP
        NP -> Det N | she
        V -> eats
        P -> with
        N -> fish | fork
        Det -> a
    ",
    );
    let cnf = cfg.to_cnf().unwrap();
    let engine = CykEngine::new(&cnf).unwrap();

    let sentence = ["she", "eats", "a", "fish", "with", "a", "fork"];
    let parse = engine.parse(&sentence);
    assert!(parse.accepted());
    let tree = parse.tree().unwrap();
    assert_eq!(tree.tokens(cnf.sym_source()), sentence);
    assert_tree_matches_rules(&cnf, tree);
    assert_eq!(cnf.name_of(tree.symbol), "S");

    assert!(engine.recognize(&["she", "eats"]));
    assert!(!engine.recognize(&["she", "fish"]));
    assert!(!engine.recognize::<&str>(&[]));
}

#[test]
fn test_capitalized_terminals_match_lower_cased_input() {
    let cnf = load("S -> NP VP\nNP -> She | He\nVP -> Eats | Sleeps")
        .to_cnf()
        .unwrap();
    let engine = CykEngine::new(&cnf).unwrap();
    let tokens: Vec<String> = "She EATS"
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    assert!(engine.recognize(&tokens));
    assert!(!engine.recognize(&["She", "eats"]));
}
