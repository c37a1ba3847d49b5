//! Sets of symbols, and the closures computed with them.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::local_prelude::*;

/// A set of symbols in the form of a bit vector.
///
/// The set grows on demand. Symbols past its end are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Constructs a `SymbolBitSet` sized for the grammar's symbols.
    pub fn from_elem(grammar: &Cfg, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(grammar.num_syms(), elem),
        }
    }

    /// Includes or excludes a symbol.
    pub fn set(&mut self, index: Symbol, elem: bool) {
        let index = index.usize();
        if index >= self.bit_vec.len() {
            if !elem {
                return;
            }
            self.bit_vec.grow(index + 1 - self.bit_vec.len(), false);
        }
        self.bit_vec.set(index, elem);
    }

    /// Checks whether the symbol is in the set.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }

    /// Returns the number of symbols in the set.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Checks whether the set has no symbols.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }
}

impl Iterator for Iter<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        self.iter
            .by_ref()
            .find_map(|(id, present)| present.then(|| Symbol::from(id)))
    }
}

impl FromIterator<Symbol> for SymbolBitSet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        let mut set = SymbolBitSet::new();
        for sym in iter {
            set.set(sym, true);
        }
        set
    }
}

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, sym: Symbol) -> &bool {
        if self.contains(sym) {
            &true
        } else {
            &false
        }
    }
}

impl Cfg {
    /// Returns the set of terminal symbols.
    pub fn terminal_symbols(&self) -> SymbolBitSet {
        self.terminals().collect()
    }

    /// Returns the left-hand sides of rules of the form `A -> ε`.
    pub fn nulling_symbols(&self) -> SymbolBitSet {
        self.rules()
            .filter(|rule| rule.is_nulling())
            .map(|rule| rule.lhs)
            .collect()
    }

    /// Returns the set of nullable nonterminals, which can derive the empty
    /// string.
    ///
    /// A nonterminal is nullable when it has an empty alternative, or an
    /// alternative made of nullable nonterminals only.
    pub fn nullable_symbols(&self) -> SymbolBitSet {
        let mut nullable = self.nulling_symbols();
        self.rhs_closure_for_all(&mut nullable);
        nullable
    }

    /// Returns the set of generating symbols, which derive at least one
    /// string of terminals. Terminals are generating.
    ///
    /// A nonterminal is generating when it has an empty alternative, or an
    /// alternative made of generating symbols only.
    pub fn generating_symbols(&self) -> SymbolBitSet {
        let mut generating: SymbolBitSet =
            self.nulling_symbols().iter().chain(self.terminals()).collect();
        self.rhs_closure_for_all(&mut generating);
        generating
    }
}
