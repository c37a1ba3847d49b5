//! Allows us to load context-free grammars from text with one rule per
//! line:
//!
//! ```text
//! # comment
//! S -> NP VP | ε
//! NP -> Det N | 'she'
//! ```
//!
//! The first left-hand side is the start symbol. Every symbol that appears
//! on some left-hand side is a nonterminal, every other symbol is a
//! terminal. Quoted symbols are always terminals. `ε`, `e` and `EPSILON`
//! stand for the empty alternative.
//!
//! Terminal names are lower-cased, so `NP -> She` matches the token `she`.
//! Nonterminal names keep their case.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod basic;
mod string_interner;

use std::fmt;
use std::io;

use thiserror::Error;

pub use crate::basic::CfgLoadExt;

/// Represents an error when loading grammar text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened.
    ///
    /// One-indexed.
    pub line: u32,
}

/// Represents an error when loading a grammar file.
#[derive(Debug, Error)]
pub enum LoadFileError {
    /// The file could not be read.
    #[error("cannot read grammar file: {0}")]
    Io(#[from] io::Error),
    /// The file contents are not a valid grammar.
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl LoadError {
    pub(crate) fn new(reason: impl Into<String>, line: u32) -> Self {
        LoadError {
            reason: reason.into(),
            line,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Parse error at line {}: reason: {}", self.line, self.reason)
    }
}

impl std::error::Error for LoadError {}
