//! The five-stage normalizer.

use std::fmt;

use log::debug;

use chomsky_grammar::{Cfg, GrammarError, SymbolKind};

use crate::arity::reduce_arity;
use crate::epsilon::eliminate_epsilon_rules;
use crate::fresh::FreshNames;
use crate::terminal::isolate_terminals;
use crate::unit::eliminate_unit_rules;
use crate::useless::eliminate_useless_symbols;

/// Transforms grammars into Chomsky Normal Form.
///
/// The normalizer owns the counter for fresh nonterminal names. The counter
/// is reset for every call to [`fn normalize`], so separate normalizers
/// never share naming state.
///
/// [`fn normalize`]: CnfNormalizer::normalize
#[derive(Clone, Debug, Default)]
pub struct CnfNormalizer {
    fresh: FreshNames,
    stats: Vec<StageStats>,
}

/// One stage of the transformation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stage {
    /// Removal of non-generating and unreachable symbols.
    UselessSymbols,
    /// Removal of empty alternatives.
    EpsilonRules,
    /// Removal of unit rules.
    UnitRules,
    /// Isolation of terminals in long alternatives.
    TerminalIsolation,
    /// Splitting of long alternatives.
    ArityReduction,
}

/// The size of the grammar before and after a stage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StageStats {
    /// The stage.
    pub stage: Stage,
    /// Number of nonterminals before the stage.
    pub nonterminals_before: usize,
    /// Number of nonterminals after the stage.
    pub nonterminals_after: usize,
    /// Number of rules before the stage.
    pub rules_before: usize,
    /// Number of rules after the stage.
    pub rules_after: usize,
    /// Number of nonterminals introduced by the stage.
    pub fresh_symbols: usize,
}

impl Stage {
    /// All stages, in the order they run.
    pub const ALL: [Stage; 5] = [
        Stage::UselessSymbols,
        Stage::EpsilonRules,
        Stage::UnitRules,
        Stage::TerminalIsolation,
        Stage::ArityReduction,
    ];
}

impl CnfNormalizer {
    /// Creates a normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an equivalent grammar in Chomsky Normal Form. The given
    /// grammar is not modified.
    ///
    /// Fails if the grammar has no start symbol, or if a rule uses a symbol
    /// that was never classified.
    pub fn normalize(&mut self, grammar: &Cfg) -> Result<Cfg, GrammarError> {
        validate(grammar)?;
        self.fresh = FreshNames::new();
        self.stats.clear();

        let mut cfg = grammar.clone();
        for stage in Stage::ALL {
            self.run_stage(stage, &mut cfg)?;
        }
        Ok(cfg)
    }

    /// Returns statistics for every stage of the last run.
    pub fn stats(&self) -> &[StageStats] {
        &self.stats[..]
    }

    fn run_stage(&mut self, stage: Stage, cfg: &mut Cfg) -> Result<(), GrammarError> {
        let nonterminals_before = cfg.nonterminals().count();
        let rules_before = cfg.num_rules();
        let generated_before = self.fresh.generated();

        match stage {
            Stage::UselessSymbols => eliminate_useless_symbols(cfg)?,
            Stage::EpsilonRules => eliminate_epsilon_rules(cfg)?,
            Stage::UnitRules => eliminate_unit_rules(cfg)?,
            Stage::TerminalIsolation => isolate_terminals(cfg, &mut self.fresh),
            Stage::ArityReduction => reduce_arity(cfg, &mut self.fresh),
        }

        let stats = StageStats {
            stage,
            nonterminals_before,
            nonterminals_after: cfg.nonterminals().count(),
            rules_before,
            rules_after: cfg.num_rules(),
            fresh_symbols: self.fresh.generated() - generated_before,
        };
        debug!("{}", stats);
        self.stats.push(stats);
        Ok(())
    }
}

fn validate(grammar: &Cfg) -> Result<(), GrammarError> {
    if grammar.start().is_none() {
        return Err(GrammarError::MissingStartSymbol);
    }
    for rule in grammar.rules() {
        match grammar.kind(rule.lhs) {
            Some(SymbolKind::Nonterminal) => {}
            Some(SymbolKind::Terminal) => {
                return Err(GrammarError::TerminalOnLeftHandSide(rule.lhs));
            }
            None => return Err(GrammarError::UnclassifiedSymbol(rule.lhs)),
        }
        if let Some(&sym) = rule.rhs.iter().find(|&&sym| grammar.kind(sym).is_none()) {
            return Err(GrammarError::UnclassifiedSymbol(sym));
        }
    }
    Ok(())
}

/// Normal form checks and conversion for [`Cfg`].
pub trait CfgNormalizeExt {
    /// Checks whether the grammar is in Chomsky Normal Form: every
    /// alternative is a single terminal or two nonterminals, except for at
    /// most one empty alternative of the start symbol.
    fn is_cnf(&self) -> bool;

    /// Returns an equivalent grammar in Chomsky Normal Form.
    fn to_cnf(&self) -> Result<Cfg, GrammarError>;
}

impl CfgNormalizeExt for Cfg {
    fn is_cnf(&self) -> bool {
        let mut empty_alternatives = 0;
        let all_rules_valid = self.rules().all(|rule| match rule.rhs[..] {
            [] => {
                empty_alternatives += 1;
                Some(rule.lhs) == self.start()
            }
            [terminal] => self.is_terminal(terminal),
            [left, right] => self.is_nonterminal(left) && self.is_nonterminal(right),
            _ => false,
        });
        all_rules_valid && empty_alternatives <= 1
    }

    fn to_cnf(&self) -> Result<Cfg, GrammarError> {
        CnfNormalizer::new().normalize(self)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::UselessSymbols => "useless symbols",
            Stage::EpsilonRules => "epsilon rules",
            Stage::UnitRules => "unit rules",
            Stage::TerminalIsolation => "terminal isolation",
            Stage::ArityReduction => "arity reduction",
        };
        f.write_str(name)
    }
}

impl fmt::Display for StageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: nonterminals {} -> {}, rules {} -> {}, {} fresh",
            self.stage,
            self.nonterminals_before,
            self.nonterminals_after,
            self.rules_before,
            self.rules_after,
            self.fresh_symbols
        )
    }
}
