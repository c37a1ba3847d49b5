//! Recognition of token sequences with the Cocke-Younger-Kasami algorithm.
//!
//! The grammar must be in Chomsky Normal Form, see `chomsky-normalize`.
//! Every accepted sequence comes with one parse tree, reconstructed from
//! the first witness recorded for each table entry.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod error;
mod table;
mod tree;

pub use crate::engine::{CykEngine, CykParse};
pub use crate::error::CykError;
pub use crate::table::{CykTable, DisplayTable, Witness};
pub use crate::tree::{DisplayTree, ParseTree};
