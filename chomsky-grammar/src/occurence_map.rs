use std::collections::BTreeMap;

use crate::local_prelude::*;

/// For every symbol, the positions of the rules that have it on their
/// right-hand side, each position listed once.
pub(crate) struct OccurenceMap {
    rhs_occurences: BTreeMap<Symbol, Vec<usize>>,
}

impl OccurenceMap {
    pub(crate) fn from_rules<'a>(rules: impl Iterator<Item = &'a CfgRule>) -> Self {
        let mut rhs_occurences: BTreeMap<Symbol, Vec<usize>> = BTreeMap::new();
        for (pos, rule) in rules.enumerate() {
            for &sym in rule.rhs.iter() {
                let positions = rhs_occurences.entry(sym).or_default();
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }
        OccurenceMap { rhs_occurences }
    }

    /// Positions of rules that use `sym` on the right-hand side.
    pub(crate) fn rhs(&self, sym: Symbol) -> &[usize] {
        self.rhs_occurences.get(&sym).map(Vec::as_slice).unwrap_or(&[])
    }
}
