//! Conversion of context-free grammars to Chomsky Normal Form, and
//! recognition with the CYK algorithm.
//!
//! ```
//! use chomsky::{Cfg, CfgNormalizeExt, CykEngine};
//!
//! let mut cfg = Cfg::new();
//! let [start, a] = [cfg.nonterminal("S").unwrap(), cfg.terminal("a").unwrap()];
//! cfg.rule(start).rhs([a, start, a]).rhs([a]);
//! cfg.set_start(start).unwrap();
//!
//! let cnf = cfg.to_cnf().unwrap();
//! assert!(cnf.is_cnf());
//! let engine = CykEngine::new(&cnf).unwrap();
//! assert!(engine.recognize(&["a", "a", "a"]));
//! assert!(!engine.recognize(&["a", "a"]));
//! ```

pub use chomsky_cyk as cyk;
pub use chomsky_cyk::{CykEngine, CykError, CykParse, ParseTree};
pub use chomsky_grammar::*;
#[cfg(feature = "chomsky-load")]
pub use chomsky_load as load;
#[cfg(feature = "chomsky-load")]
pub use chomsky_load::CfgLoadExt;
pub use chomsky_normalize as normalize;
pub use chomsky_normalize::{CfgNormalizeExt, CnfNormalizer};
#[cfg(feature = "chomsky-symbol-bit-matrix")]
pub use chomsky_symbol_bit_matrix as symbol_bit_matrix;
