//! The triangular table filled by the recognizer.

use std::collections::BTreeMap;
use std::fmt;

use chomsky_grammar::{SymbolBitSet, SymbolSource};
use chomsky_symbol::Symbol;

/// The reason a nonterminal derives a span.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Witness {
    /// The span is a single token, and the nonterminal has it as an
    /// alternative.
    Terminal(Symbol),
    /// The nonterminal has the alternative `left right`. `left` derives
    /// the first `offset + 1` tokens of the span and `right` derives
    /// the rest.
    Split {
        /// Length of the left part, minus one.
        offset: usize,
        /// Nonterminal for the left part.
        left: Symbol,
        /// Nonterminal for the right part.
        right: Symbol,
    },
}

/// A table cell: the nonterminals deriving one span, with their witnesses.
#[derive(Clone, Debug, Default)]
pub(crate) struct Cell {
    pub(crate) syms: SymbolBitSet,
    pub(crate) witnesses: BTreeMap<Symbol, Vec<Witness>>,
}

/// Table indexed by `(start, span)`, where `span` is the length of the
/// covered token range minus one.
#[derive(Clone, Debug, Default)]
pub struct CykTable {
    len: usize,
    cells: Vec<Cell>,
}

static NO_WITNESSES: &[Witness] = &[];

impl Cell {
    pub(crate) fn add(&mut self, lhs: Symbol, witness: Witness) {
        self.syms.set(lhs, true);
        self.witnesses.entry(lhs).or_default().push(witness);
    }
}

impl CykTable {
    pub(crate) fn new(len: usize) -> Self {
        CykTable {
            len,
            cells: vec![Cell::default(); len * (len + 1) / 2],
        }
    }

    fn index(&self, start: usize, span: usize) -> Option<usize> {
        if span >= self.len || start + span >= self.len {
            return None;
        }
        // Rows of shorter spans come first. Row `t` has `len - t` cells.
        Some(span * self.len - span * span.saturating_sub(1) / 2 + start)
    }

    pub(crate) fn get(&self, start: usize, span: usize) -> Option<&Cell> {
        self.index(start, span).map(|index| &self.cells[index])
    }

    pub(crate) fn replace(&mut self, start: usize, span: usize, cell: Cell) {
        if let Some(index) = self.index(start, span) {
            self.cells[index] = cell;
        }
    }

    /// Returns the number of tokens covered by the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the table covers no tokens.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the nonterminals that derive the span, or `None` if the
    /// span lies outside the input.
    pub fn cell(&self, start: usize, span: usize) -> Option<&SymbolBitSet> {
        self.get(start, span).map(|cell| &cell.syms)
    }

    /// Checks whether `sym` derives the span.
    pub fn contains(&self, start: usize, span: usize, sym: Symbol) -> bool {
        self.get(start, span)
            .map_or(false, |cell| cell.syms.contains(sym))
    }

    /// Returns the witnesses for `sym` deriving the span, in the order
    /// they were found.
    pub fn witnesses(&self, start: usize, span: usize, sym: Symbol) -> &[Witness] {
        self.get(start, span)
            .and_then(|cell| cell.witnesses.get(&sym))
            .map_or(NO_WITNESSES, |witnesses| &witnesses[..])
    }

    /// Returns a value that formats the table, one line per span length.
    pub fn display<'a>(&'a self, sym_source: &'a SymbolSource) -> DisplayTable<'a> {
        DisplayTable {
            table: self,
            sym_source,
        }
    }
}

/// Formats a table with symbol names.
#[derive(Clone, Copy)]
pub struct DisplayTable<'a> {
    table: &'a CykTable,
    sym_source: &'a SymbolSource,
}

impl fmt::Display for DisplayTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.table.len;
        for span in 0..len {
            write!(f, "{:>3}:", span + 1)?;
            for start in 0..len - span {
                let cell = self.table.cell(start, span);
                let names: Vec<_> = cell
                    .into_iter()
                    .flat_map(|syms| syms.iter())
                    .map(|sym| self.sym_source.name_of(sym))
                    .collect();
                if names.is_empty() {
                    write!(f, " {{}}")?;
                } else {
                    write!(f, " {{{}}}", names.join(", "))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
