//! The recognizer.

use std::collections::BTreeMap;

use log::{debug, trace};

use chomsky_grammar::{Cfg, SymbolBitSet};
use chomsky_symbol::Symbol;

use crate::error::CykError;
use crate::table::{Cell, CykTable, Witness};
use crate::tree::ParseTree;

/// A CYK recognizer for one grammar in Chomsky Normal Form.
///
/// The engine only reads the grammar. Every call to [`fn parse`] builds its
/// own table, so one engine can serve parallel calls.
///
/// [`fn parse`]: CykEngine::parse
#[derive(Clone, Debug)]
pub struct CykEngine<'g> {
    grammar: &'g Cfg,
    start: Symbol,
    accepts_empty: bool,
    /// For every terminal, the left-hand sides of `A -> terminal`, in rule
    /// order.
    terminal_rules: BTreeMap<Symbol, Vec<Symbol>>,
    /// Rules `A -> B C` in rule order.
    binary_rules: Vec<BinaryRule>,
}

#[derive(Clone, Copy, Debug)]
struct BinaryRule {
    lhs: Symbol,
    left: Symbol,
    right: Symbol,
}

/// The outcome of one parse.
#[derive(Clone, Debug)]
pub struct CykParse {
    accepted: bool,
    tree: Option<ParseTree>,
    table: CykTable,
}

impl<'g> CykEngine<'g> {
    /// Prepares a recognizer for the grammar.
    ///
    /// Fails if the grammar has no start symbol, or if a rule is neither
    /// `A -> a`, `A -> B C`, nor `start -> ε`.
    pub fn new(grammar: &'g Cfg) -> Result<Self, CykError> {
        let start = grammar.start().ok_or(CykError::MissingStartSymbol)?;
        let mut accepts_empty = false;
        let mut terminal_rules: BTreeMap<Symbol, Vec<Symbol>> = BTreeMap::new();
        let mut binary_rules = vec![];

        for rule in grammar.rules() {
            match rule.rhs[..] {
                [] if rule.lhs == start => accepts_empty = true,
                [terminal] if grammar.is_terminal(terminal) => {
                    terminal_rules.entry(terminal).or_default().push(rule.lhs);
                }
                [left, right] if grammar.is_nonterminal(left) && grammar.is_nonterminal(right) => {
                    binary_rules.push(BinaryRule {
                        lhs: rule.lhs,
                        left,
                        right,
                    });
                }
                _ => return Err(CykError::NotInCnf { lhs: rule.lhs }),
            }
        }

        Ok(CykEngine {
            grammar,
            start,
            accepts_empty,
            terminal_rules,
            binary_rules,
        })
    }

    /// Returns the grammar.
    pub fn grammar(&self) -> &'g Cfg {
        self.grammar
    }

    /// Parses a sequence of token names. Tokens are looked up among the
    /// grammar's terminals by exact name. A token that is not a terminal
    /// of the grammar matches no rule.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> CykParse {
        let tokens: Vec<Option<Symbol>> = tokens
            .iter()
            .map(|token| {
                self.grammar
                    .symbol(token.as_ref())
                    .filter(|&sym| self.grammar.is_terminal(sym))
            })
            .collect();
        self.run(&tokens)
    }

    /// Parses a sequence of terminal symbols.
    pub fn parse_symbols(&self, tokens: &[Symbol]) -> CykParse {
        let tokens: Vec<Option<Symbol>> = tokens.iter().copied().map(Some).collect();
        self.run(&tokens)
    }

    /// Checks whether the grammar derives the token names.
    pub fn recognize<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        self.parse(tokens).accepted()
    }

    fn run(&self, tokens: &[Option<Symbol>]) -> CykParse {
        let n = tokens.len();
        if n == 0 {
            debug!("empty input, accepted: {}", self.accepts_empty);
            return CykParse {
                accepted: self.accepts_empty,
                tree: self.accepts_empty.then(|| ParseTree::leaf(self.start)),
                table: CykTable::new(0),
            };
        }

        let table = self.fill(tokens);
        let accepted = table.contains(0, n - 1, self.start);
        debug!("{} tokens, accepted: {}", n, accepted);
        let tree = if accepted {
            build_tree(&table, 0, n - 1, self.start)
        } else {
            None
        };
        CykParse {
            accepted,
            tree,
            table,
        }
    }

    fn fill(&self, tokens: &[Option<Symbol>]) -> CykTable {
        let n = tokens.len();
        let mut table = CykTable::new(n);

        for (i, token) in tokens.iter().enumerate() {
            let mut cell = self.empty_cell();
            if let Some(terminal) = *token {
                for &lhs in self.terminal_rules.get(&terminal).into_iter().flatten() {
                    cell.add(lhs, Witness::Terminal(terminal));
                }
            }
            table.replace(i, 0, cell);
        }

        for len in 2..=n {
            let span = len - 1;
            for start in 0..=n - len {
                let cell = self.combine(&table, start, span);
                trace!(
                    "cell ({}, {}) holds {} symbols",
                    start,
                    span,
                    cell.syms.count()
                );
                table.replace(start, span, cell);
            }
        }
        table
    }

    /// Computes the cell for `(start, span)` from the cells of shorter
    /// spans. Split offsets are tried in increasing order, and rules in
    /// grammar order for each offset.
    fn combine(&self, table: &CykTable, start: usize, span: usize) -> Cell {
        let mut cell = self.empty_cell();
        for offset in 0..span {
            let (Some(left_cell), Some(right_cell)) = (
                table.cell(start, offset),
                table.cell(start + offset + 1, span - offset - 1),
            ) else {
                continue;
            };
            if left_cell.is_empty() || right_cell.is_empty() {
                continue;
            }
            for rule in &self.binary_rules {
                if left_cell[rule.left] && right_cell[rule.right] {
                    cell.add(
                        rule.lhs,
                        Witness::Split {
                            offset,
                            left: rule.left,
                            right: rule.right,
                        },
                    );
                }
            }
        }
        cell
    }

    fn empty_cell(&self) -> Cell {
        Cell {
            syms: SymbolBitSet::from_elem(self.grammar, false),
            witnesses: BTreeMap::new(),
        }
    }
}

/// Follows the first witness of `sym` for every span. Spans shrink on
/// every step.
fn build_tree(table: &CykTable, start: usize, span: usize, sym: Symbol) -> Option<ParseTree> {
    let children = match *table.witnesses(start, span, sym).first()? {
        Witness::Terminal(terminal) => vec![ParseTree::leaf(terminal)],
        Witness::Split {
            offset,
            left,
            right,
        } => vec![
            build_tree(table, start, offset, left)?,
            build_tree(table, start + offset + 1, span - offset - 1, right)?,
        ],
    };
    Some(ParseTree::node(sym, children))
}

impl CykParse {
    /// Checks whether the input was accepted.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Returns the parse tree of an accepted input.
    pub fn tree(&self) -> Option<&ParseTree> {
        self.tree.as_ref()
    }

    /// Converts into the parse tree of an accepted input.
    pub fn into_tree(self) -> Option<ParseTree> {
        self.tree
    }

    /// Returns the filled table.
    pub fn table(&self) -> &CykTable {
        &self.table
    }
}
