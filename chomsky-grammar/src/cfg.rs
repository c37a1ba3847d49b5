//! Definitions of the context-free grammar type and its rules.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::sync::Arc;

use log::trace;

use crate::error::GrammarError;
use crate::local_prelude::*;
use crate::occurence_map::OccurenceMap;
use crate::rule_builder::RuleBuilder;

/// Context-free grammar type.
///
/// Rules are kept in insertion order. Rules sharing a left-hand side are
/// that symbol's alternatives; their relative order decides which
/// derivation wins when a parser has to pick one.
#[derive(Clone, Debug)]
pub struct Cfg {
    /// The symbol source.
    sym_source: SymbolSource,
    /// Symbols classified as terminals.
    lexemes: SymbolBitSet,
    /// Symbols classified as nonterminals.
    nonterminals: SymbolBitSet,
    /// The array of rules.
    rules: Vec<CfgRule>,
    /// The start symbol.
    start: Option<Symbol>,
}

/// Standard grammar rule representation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CfgRule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols. Empty for `A -> ε`.
    pub rhs: Arc<[Symbol]>,
}

/// The classification of a symbol, supplied by whoever builds the grammar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SymbolKind {
    /// A symbol of the input alphabet.
    Terminal,
    /// A symbol that is rewritten by rules.
    Nonterminal,
}

impl Default for Cfg {
    fn default() -> Self {
        Self::with_sym_source(SymbolSource::new())
    }
}

impl Cfg {
    /// Creates an empty context-free grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context-free grammar with the given symbol source.
    ///
    /// Symbols already present in the source are left unclassified.
    pub fn with_sym_source(sym_source: SymbolSource) -> Self {
        Cfg {
            sym_source,
            lexemes: SymbolBitSet::new(),
            nonterminals: SymbolBitSet::new(),
            rules: vec![],
            start: None,
        }
    }

    /// Returns generated anonymous nonterminals.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let result = self.sym_source.sym();
        for &sym in &result {
            self.nonterminals.set(sym, true);
        }
        result
    }

    /// Generates a new unique nonterminal.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let result = self.sym_source.next_sym(name);
        self.nonterminals.set(result, true);
        result
    }

    /// Generates a new unique terminal.
    pub fn lexeme(&mut self, name: Option<Cow<str>>) -> Symbol {
        let result = self.sym_source.next_sym(name);
        self.lexemes.set(result, true);
        result
    }

    /// Interns a terminal by name.
    pub fn terminal(&mut self, name: &str) -> Result<Symbol, GrammarError> {
        self.intern(name, SymbolKind::Terminal)
    }

    /// Interns a nonterminal by name.
    pub fn nonterminal(&mut self, name: &str) -> Result<Symbol, GrammarError> {
        self.intern(name, SymbolKind::Nonterminal)
    }

    /// Interns a name with the given classification. Interning a known name
    /// again returns the same symbol, unless the classification differs.
    pub fn intern(&mut self, name: &str, kind: SymbolKind) -> Result<Symbol, GrammarError> {
        let (sym, _) = self.sym_source.intern(name);
        match self.kind(sym) {
            Some(existing) if existing != kind => {
                return Err(GrammarError::ConflictingClassification {
                    name: name.to_string(),
                    kind: existing,
                });
            }
            _ => {}
        }
        match kind {
            SymbolKind::Terminal => self.lexemes.set(sym, true),
            SymbolKind::Nonterminal => self.nonterminals.set(sym, true),
        }
        Ok(sym)
    }

    /// Returns the classification of the symbol, or `None` if the symbol
    /// is unknown to this grammar or unclassified.
    pub fn kind(&self, sym: Symbol) -> Option<SymbolKind> {
        if self.lexemes[sym] {
            Some(SymbolKind::Terminal)
        } else if self.nonterminals[sym] {
            Some(SymbolKind::Nonterminal)
        } else {
            None
        }
    }

    /// Checks whether the symbol is a terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.lexemes[sym]
    }

    /// Checks whether the symbol is a nonterminal.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.nonterminals[sym]
    }

    /// Iterates over terminal symbols.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.lexemes.iter()
    }

    /// Iterates over nonterminal symbols.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.nonterminals.iter()
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Assigns the start symbol. It must be a nonterminal of this grammar.
    pub fn set_start(&mut self, start: Symbol) -> Result<(), GrammarError> {
        match self.kind(start) {
            Some(SymbolKind::Nonterminal) => {
                self.start = Some(start);
                Ok(())
            }
            Some(SymbolKind::Terminal) => Err(GrammarError::TerminalOnLeftHandSide(start)),
            None => Err(GrammarError::UnclassifiedSymbol(start)),
        }
    }

    /// Returns the start symbol, if one was assigned.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Appends an alternative for `lhs`, after checking that every symbol
    /// is classified in this grammar and that `lhs` is a nonterminal.
    ///
    /// Duplicate alternatives are kept.
    pub fn add_production(
        &mut self,
        lhs: Symbol,
        rhs: impl AsRef<[Symbol]>,
    ) -> Result<(), GrammarError> {
        match self.kind(lhs) {
            Some(SymbolKind::Nonterminal) => {}
            Some(SymbolKind::Terminal) => return Err(GrammarError::TerminalOnLeftHandSide(lhs)),
            None => return Err(GrammarError::UnclassifiedSymbol(lhs)),
        }
        if let Some(&unknown) = rhs.as_ref().iter().find(|&&sym| self.kind(sym).is_none()) {
            return Err(GrammarError::UnclassifiedSymbol(unknown));
        }
        self.add_rule(CfgRule::new(lhs, rhs));
        Ok(())
    }

    /// Returns an iterator over the list of grammar rules.
    pub fn rules(&self) -> impl Iterator<Item = &CfgRule> {
        self.rules.iter()
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns an iterator over the alternatives of `lhs`, in insertion order.
    pub fn alternatives(&self, lhs: Symbol) -> impl Iterator<Item = &[Symbol]> {
        self.rules
            .iter()
            .filter(move |rule| rule.lhs == lhs)
            .map(|rule| &rule.rhs[..])
    }

    /// Returns the left-hand sides in order of their first rule.
    pub fn lhs_symbols(&self) -> Vec<Symbol> {
        let mut seen = SymbolBitSet::new();
        let mut result = vec![];
        for rule in &self.rules {
            if !seen[rule.lhs] {
                seen.set(rule.lhs, true);
                result.push(rule.lhs);
            }
        }
        result
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the symbol with the given name.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.sym_source.get(name)
    }

    /// Returns the name of the symbol, or a generated name for
    /// anonymous symbols.
    pub fn name_of(&self, sym: Symbol) -> Cow<'_, str> {
        self.sym_source.name_of(sym)
    }

    /// Adds a rule without validation. Meant for trusted callers, which
    /// only use symbols taken from this grammar.
    pub fn add_rule(&mut self, rule: CfgRule) {
        debug_assert!(
            !self.lexemes[rule.lhs],
            "terminal {:?} used as a left-hand side",
            rule.lhs
        );
        self.rules.push(rule);
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        RuleBuilder::new(self, lhs)
    }

    /// Retains only the rules specified by the predicate.
    ///
    /// In other words, removes all the rules for which `f(&rule)`
    /// returns false.
    pub fn retain(&mut self, f: impl FnMut(&CfgRule) -> bool) {
        self.rules.retain(f);
    }

    /// Replaces all rules with the given ones.
    pub fn set_rules(&mut self, rules: Vec<CfgRule>) {
        self.rules = rules;
    }

    /// Forgets the classification of every nonterminal that has no
    /// alternatives left, except for the start symbol.
    pub fn prune_nonterminals(&mut self) {
        let mut keep = SymbolBitSet::new();
        for rule in &self.rules {
            keep.set(rule.lhs, true);
        }
        if let Some(start) = self.start {
            keep.set(start, true);
        }
        let dropped: Vec<Symbol> = self.nonterminals.iter().filter(|&sym| !keep[sym]).collect();
        for sym in dropped {
            trace!("forgetting nonterminal {}", self.name_of(sym));
            self.nonterminals.set(sym, false);
        }
    }

    /// If **all** symbols on the RHS have the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    ///
    /// Rules with an empty RHS are never visited. Seed the set with
    /// [`fn nulling_symbols`] to account for them.
    ///
    /// [`fn nulling_symbols`]: Cfg::nulling_symbols
    pub fn rhs_closure_for_all(&self, property: &mut SymbolBitSet) {
        let mut tmp_stack: Vec<Symbol> = property.iter().collect();

        let occurence_map = OccurenceMap::from_rules(self.rules());

        while let Some(work_sym) = tmp_stack.pop() {
            for &rule_id in occurence_map.rhs(work_sym) {
                let rule = &self.rules[rule_id];
                let rhs_satisfies_property = rule.rhs.iter().all(|&sym| property[sym]);
                if !property[rule.lhs] && rhs_satisfies_property {
                    trace!("closure reached {}", self.name_of(rule.lhs));
                    property.set(rule.lhs, true);
                    tmp_stack.push(rule.lhs);
                }
            }
        }
    }

    /// Formats the grammar to a `String`, one rule per line, in rule order.
    /// The output looks like this:
    ///
    /// ```ignore
    /// S -> A B
    /// S -> ε
    /// A -> a
    /// ```
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        for rule in self.rules() {
            writeln!(&mut result, "{}", self.display_rule(rule)).expect("writing to String failed");
        }
        result
    }

    /// Returns a value that formats the rule with symbol names.
    pub fn display_rule<'a>(&'a self, rule: &'a CfgRule) -> DisplayRule<'a> {
        DisplayRule {
            sym_source: &self.sym_source,
            rule,
        }
    }
}

/// Formats a rule as `lhs -> rhs`.
#[derive(Clone, Copy)]
pub struct DisplayRule<'a> {
    sym_source: &'a SymbolSource,
    rule: &'a CfgRule,
}

impl fmt::Display for DisplayRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.sym_source.name_of(self.rule.lhs))?;
        if self.rule.rhs.is_empty() {
            return write!(f, " ε");
        }
        for &sym in self.rule.rhs.iter() {
            write!(f, " {}", self.sym_source.name_of(sym))?;
        }
        Ok(())
    }
}

impl CfgRule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: impl AsRef<[Symbol]>) -> Self {
        CfgRule {
            lhs,
            rhs: rhs.as_ref().into(),
        }
    }

    /// Checks whether the rule has the form `A -> ε`.
    pub fn is_nulling(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Terminal => write!(f, "terminal"),
            SymbolKind::Nonterminal => write!(f, "non-terminal"),
        }
    }
}
