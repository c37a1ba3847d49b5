use std::ops::{Deref, Index};

use bit_matrix::BitMatrix;
use log::trace;

use chomsky_grammar::{Cfg, CfgRule};
use chomsky_symbol::{Symbol, SymbolSource};

/// A square relation `R(A, B)` over the symbols of one grammar.
#[derive(Clone, Debug)]
pub struct SymbolBitMatrix {
    bits: BitMatrix,
}

/// `R(A, B)` holds when `B` can appear in a sentential form derived from
/// `A` in zero or more steps.
#[derive(Clone, Debug)]
pub struct ReachabilityMatrix(SymbolBitMatrix);

/// `R(A, B)` holds when `A` derives `B` through zero or more rules of the
/// form `X -> Y`, where `Y` is a nonterminal.
#[derive(Clone, Debug)]
pub struct UnitDerivationMatrix(SymbolBitMatrix);

impl SymbolBitMatrix {
    fn from_edges(num_syms: usize, edges: impl Iterator<Item = (Symbol, Symbol)>) -> Self {
        let mut bits = BitMatrix::new(num_syms, num_syms);
        for (from, to) in edges {
            bits.set(from.usize(), to.usize(), true);
        }
        SymbolBitMatrix { bits }
    }

    /// Makes the relation reflexive and transitive.
    fn close(mut self) -> Self {
        self.bits.transitive_closure();
        self.bits.reflexive_closure();
        self
    }

    /// Number of symbols on each axis.
    pub fn num_syms(&self) -> usize {
        self.bits.size().0
    }

    /// Checks whether `R(row, col)` holds. Symbols created after the
    /// matrix are unrelated to everything.
    pub fn contains(&self, row: Symbol, col: Symbol) -> bool {
        let n = self.num_syms();
        row.usize() < n && col.usize() < n && self.bits[(row.usize(), col.usize())]
    }

    /// Iterates over every `col` with `R(row, col)`, in ascending order.
    pub fn iter_row_syms(&self, row: Symbol) -> impl Iterator<Item = Symbol> + '_ {
        (row.usize() < self.num_syms())
            .then(|| self.bits.iter_row(row.usize()))
            .into_iter()
            .flatten()
            .zip(SymbolSource::generate_fresh())
            .filter_map(|(related, sym)| related.then_some(sym))
    }
}

impl Index<(Symbol, Symbol)> for SymbolBitMatrix {
    type Output = bool;

    fn index(&self, (row, col): (Symbol, Symbol)) -> &bool {
        if self.contains(row, col) {
            &true
        } else {
            &false
        }
    }
}

impl Deref for ReachabilityMatrix {
    type Target = SymbolBitMatrix;

    fn deref(&self) -> &SymbolBitMatrix {
        &self.0
    }
}

impl Deref for UnitDerivationMatrix {
    type Target = SymbolBitMatrix;

    fn deref(&self) -> &SymbolBitMatrix {
        &self.0
    }
}

/// Builds symbol relations from the rules of a grammar.
pub trait CfgSymbolBitMatrixExt {
    /// Computes the reachability matrix, reflexive and transitive.
    fn reachability_matrix(&self) -> ReachabilityMatrix;

    /// Computes the unit derivation matrix, reflexive and transitive.
    ///
    /// A single terminal on the right-hand side is not a unit derivation:
    /// `A -> a` relates nothing.
    fn unit_derivation_matrix(&self) -> UnitDerivationMatrix;
}

impl CfgSymbolBitMatrixExt for Cfg {
    fn reachability_matrix(&self) -> ReachabilityMatrix {
        let edges = self
            .rules()
            .flat_map(|rule| rule.rhs.iter().map(move |&sym| (rule.lhs, sym)));
        ReachabilityMatrix(SymbolBitMatrix::from_edges(self.num_syms(), edges).close())
    }

    fn unit_derivation_matrix(&self) -> UnitDerivationMatrix {
        let edges = self.rules().filter_map(|rule| {
            let single = unit_target(self, rule)?;
            trace!(
                "unit derivation {} -> {}",
                self.name_of(rule.lhs),
                self.name_of(single)
            );
            Some((rule.lhs, single))
        });
        UnitDerivationMatrix(SymbolBitMatrix::from_edges(self.num_syms(), edges).close())
    }
}

fn unit_target(grammar: &Cfg, rule: &CfgRule) -> Option<Symbol> {
    match rule.rhs[..] {
        [single] if grammar.is_nonterminal(single) => Some(single),
        _ => None,
    }
}
