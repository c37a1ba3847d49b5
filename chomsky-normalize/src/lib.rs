//! Transformation of context-free grammars into Chomsky Normal Form.
//!
//! The transformation runs five stages in order. Each stage is also
//! available as a function on `&mut Cfg`:
//!
//! 1. [`eliminate_useless_symbols`]
//! 2. [`eliminate_epsilon_rules`]
//! 3. [`eliminate_unit_rules`]
//! 4. [`isolate_terminals`]
//! 5. [`reduce_arity`]

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod arity;
mod epsilon;
mod fresh;
mod normalizer;
mod terminal;
mod unit;
mod useless;

pub use crate::arity::reduce_arity;
pub use crate::epsilon::eliminate_epsilon_rules;
pub use crate::fresh::FreshNames;
pub use crate::normalizer::{CfgNormalizeExt, CnfNormalizer, Stage, StageStats};
pub use crate::terminal::isolate_terminals;
pub use crate::unit::eliminate_unit_rules;
pub use crate::useless::eliminate_useless_symbols;
