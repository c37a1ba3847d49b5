use std::borrow::Cow;

use chomsky_grammar::Cfg;
use chomsky_symbol::Symbol;

/// Source of fresh nonterminal names `X1`, `X2`, ...
///
/// Names already interned in the grammar are skipped, so a fresh
/// nonterminal never collides with a symbol of the input.
#[derive(Clone, Debug, Default)]
pub struct FreshNames {
    counter: u32,
    generated: usize,
}

impl FreshNames {
    /// Creates a counter that starts at `X1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fresh nonterminal to the grammar.
    pub fn next_nonterminal(&mut self, grammar: &mut Cfg) -> Symbol {
        loop {
            self.counter += 1;
            let name = format!("X{}", self.counter);
            if grammar.symbol(&name).is_none() {
                self.generated += 1;
                return grammar.next_sym(Some(Cow::Owned(name)));
            }
        }
    }

    /// Returns the number of nonterminals generated so far.
    pub fn generated(&self) -> usize {
        self.generated
    }
}
