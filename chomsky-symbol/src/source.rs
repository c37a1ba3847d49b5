//! Source of symbols, with interned names.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::Symbol;

/// The name of a symbol. Cheap to clone.
pub type SymbolName = Arc<str>;

/// A source of numeric symbols.
///
/// Every generated symbol may carry a name. A name identifies at most one
/// symbol: [`fn intern`] returns the existing symbol for a known name.
///
/// [`fn intern`]: SymbolSource::intern
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    names: Vec<Option<SymbolName>>,
    by_name: HashMap<SymbolName, Symbol>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns generated anonymous symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let mut result = [Symbol::default(); N];
        for dest in &mut result {
            *dest = self.next_sym(None);
        }
        result
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source. A name that is already taken is moved to the new symbol.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let ret = Symbol::from(self.names.len());
        let name: Option<SymbolName> = name.map(|name| name.as_ref().into());
        if let Some(name) = &name {
            self.by_name.insert(name.clone(), ret);
        }
        self.names.push(name);
        ret
    }

    /// Returns the symbol with the given name, creating it if the name is
    /// not yet taken. The flag is `true` when the symbol is new.
    pub fn intern(&mut self, name: &str) -> (Symbol, bool) {
        match self.get(name) {
            Some(sym) => (sym, false),
            None => (self.next_sym(Some(Cow::Borrowed(name))), true),
        }
    }

    /// Looks up a symbol by name.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Checks whether the symbol was generated by this source.
    pub fn contains(&self, sym: Symbol) -> bool {
        sym.usize() < self.names.len()
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Returns the name of the symbol, if it has one.
    pub fn name(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.usize()).and_then(|name| name.as_deref())
    }

    /// Returns the name of the symbol, or a generated `g{id}` name
    /// for anonymous symbols.
    pub fn name_of(&self, sym: Symbol) -> Cow<'_, str> {
        match self.name(sym) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("g{}", sym.usize())),
        }
    }

    /// Returns an iterator over all symbols generated so far.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.names.len()).map(Symbol::from)
    }

    /// Returns an infinite iterator over symbols starting from ID zero,
    /// without any source.
    pub fn generate_fresh() -> impl Iterator<Item = Symbol> {
        (0u32..).map(Symbol::from)
    }
}
