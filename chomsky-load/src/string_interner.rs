//! Utility for string interning.

use elsa::FrozenIndexSet;

/// Collects strings, numbering them in order of first insertion.
pub(crate) struct StringInterner {
    set: FrozenIndexSet<String>,
}

impl StringInterner {
    /// Creates a new `StringInterner`.
    pub(crate) fn new() -> Self {
        StringInterner {
            set: FrozenIndexSet::new(),
        }
    }

    /// Retrieves an interned value, or inserts a new entry
    /// if it does not exist.
    pub(crate) fn get_or_intern<T>(&self, value: T) -> usize
    where
        T: AsRef<str>,
    {
        self.set.insert_full(value.as_ref().to_string()).0
    }

    pub(crate) fn resolve(&self, index: usize) -> Option<&str> {
        self.set.get_index(index)
    }

    /// Iterates over interned strings with their indices.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (0..).map_while(move |index| self.resolve(index).map(|name| (index, name)))
    }
}
