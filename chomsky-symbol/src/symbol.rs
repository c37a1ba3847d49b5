use std::fmt;
use std::num::NonZeroU32;

/// A common grammar symbol type.
///
/// The ID is stored off by one, so that `Option<Symbol>` has
/// the same size as `Symbol`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
}

impl Default for Symbol {
    fn default() -> Self {
        Self::first()
    }
}

impl Symbol {
    /// The symbol with ID zero.
    pub fn first() -> Self {
        Symbol { n: NonZeroU32::MIN }
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }
}

impl From<u32> for Symbol {
    #[inline]
    fn from(id: u32) -> Self {
        debug_assert_ne!(id, u32::MAX, "ran out of Symbol space?");
        Symbol {
            n: NonZeroU32::MIN.saturating_add(id),
        }
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as u32)
    }
}

impl From<Symbol> for u32 {
    #[inline]
    fn from(sym: Symbol) -> u32 {
        sym.n.get() - 1
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> usize {
        sym.usize()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.usize())
    }
}
