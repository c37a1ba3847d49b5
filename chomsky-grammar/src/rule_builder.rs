//! Chained construction of alternatives.

use crate::local_prelude::*;

/// Appends alternatives for one left-hand side at a time.
///
/// ```ignore
/// cfg.rule(expr).rhs([expr, plus, term]).rhs([term])
///    .rule(term).rhs([num]);
/// ```
///
/// Symbols are not checked, see [`Cfg::add_rule`].
pub struct RuleBuilder<'a> {
    grammar: &'a mut Cfg,
    lhs: Symbol,
}

impl<'a> RuleBuilder<'a> {
    pub(crate) fn new(grammar: &'a mut Cfg, lhs: Symbol) -> Self {
        RuleBuilder { grammar, lhs }
    }

    /// Switches to another left-hand side.
    pub fn rule(self, lhs: Symbol) -> Self {
        RuleBuilder { lhs, ..self }
    }

    /// Appends `lhs -> syms` to the grammar.
    pub fn rhs(self, syms: impl AsRef<[Symbol]>) -> Self {
        self.grammar.add_rule(CfgRule::new(self.lhs, syms));
        self
    }
}
