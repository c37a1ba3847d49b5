//! Parse trees.

use std::fmt;

use chomsky_grammar::SymbolSource;
use chomsky_symbol::Symbol;

/// A node of a derivation tree.
///
/// Leaves hold terminals. A nonterminal has one child when it derives a
/// single terminal, two children for a binary step, and none when the
/// start symbol derives the empty input.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseTree {
    /// The symbol at this node.
    pub symbol: Symbol,
    /// Child nodes, left to right.
    pub children: Vec<ParseTree>,
}

impl ParseTree {
    /// Creates a node without children.
    pub fn leaf(symbol: Symbol) -> Self {
        ParseTree {
            symbol,
            children: vec![],
        }
    }

    /// Creates a node with the given children.
    pub fn node(symbol: Symbol, children: Vec<ParseTree>) -> Self {
        ParseTree { symbol, children }
    }

    /// Checks whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the symbols of the leaves, left to right. For a tree of
    /// an accepted input, these are the input tokens.
    ///
    /// The childless root of an empty derivation counts as no leaves.
    pub fn leaves(&self) -> Vec<Symbol> {
        let mut result = vec![];
        if !self.is_leaf() {
            self.collect_leaves(&mut result);
        }
        result
    }

    fn collect_leaves(&self, result: &mut Vec<Symbol>) {
        if self.is_leaf() {
            result.push(self.symbol);
        }
        for child in &self.children {
            child.collect_leaves(result);
        }
    }

    /// Returns the names of the leaves, left to right.
    pub fn tokens(&self, sym_source: &SymbolSource) -> Vec<String> {
        self.leaves()
            .into_iter()
            .map(|sym| sym_source.name_of(sym).into_owned())
            .collect()
    }

    /// Returns the number of nodes on the longest path from the root to
    /// a leaf.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(ParseTree::depth).max().unwrap_or(0)
    }

    /// Returns a value that formats the tree with symbol names:
    ///
    /// ```text
    /// S
    ///   ├─ A
    ///     └─ a
    ///   └─ B
    ///     └─ b
    /// ```
    pub fn display<'a>(&'a self, sym_source: &'a SymbolSource) -> DisplayTree<'a> {
        DisplayTree {
            tree: self,
            sym_source,
        }
    }
}

/// Formats a tree with symbol names.
#[derive(Clone, Copy)]
pub struct DisplayTree<'a> {
    tree: &'a ParseTree,
    sym_source: &'a SymbolSource,
}

impl DisplayTree<'_> {
    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &ParseTree,
        level: usize,
        prefix: &str,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{}{}",
            "",
            prefix,
            self.sym_source.name_of(node.symbol),
            indent = level * 2
        )?;
        for (i, child) in node.children.iter().enumerate() {
            let is_last = i + 1 == node.children.len();
            let child_prefix = if is_last { "└─ " } else { "├─ " };
            self.write_node(f, child, level + 1, child_prefix)?;
        }
        Ok(())
    }
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.tree, 0, "")
    }
}
