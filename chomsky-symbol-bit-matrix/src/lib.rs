//! Relations between grammar symbols, stored as bit matrices.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod symbol_bit_matrix;

pub use crate::symbol_bit_matrix::{
    CfgSymbolBitMatrixExt, ReachabilityMatrix, SymbolBitMatrix, UnitDerivationMatrix,
};
