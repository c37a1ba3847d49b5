//! Loading of `LHS -> alt | alt` grammar text.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use chomsky_grammar::{Cfg, SymbolKind};
use chomsky_symbol::Symbol;

use crate::string_interner::StringInterner;
use crate::{LoadError, LoadFileError};

const EPSILON_MARKERS: [&str; 3] = ["ε", "e", "EPSILON"];

/// Extension trait for loading grammars.
pub trait CfgLoadExt {
    /// Loads a grammar from text.
    fn load(text: &str) -> Result<Cfg, LoadError>;

    /// Loads a grammar from a file.
    fn load_file<P: AsRef<Path>>(path: P) -> Result<Cfg, LoadFileError>;
}

impl CfgLoadExt for Cfg {
    fn load(text: &str) -> Result<Cfg, LoadError> {
        let mut loader = Loader::new();
        for (index, line) in text.lines().enumerate() {
            loader.read_line(line, index as u32 + 1)?;
        }
        loader.into_grammar()
    }

    fn load_file<P: AsRef<Path>>(path: P) -> Result<Cfg, LoadFileError> {
        let text = fs::read_to_string(path.as_ref())?;
        let cfg = Cfg::load(&text)?;
        debug!("loaded grammar from {}", path.as_ref().display());
        Ok(cfg)
    }
}

/// A symbol reference as written in the text.
#[derive(Clone, Copy)]
struct Name {
    index: usize,
    quoted: bool,
}

struct LoadedRule {
    line: u32,
    lhs: usize,
    rhs: Vec<Name>,
}

struct Loader {
    interner: StringInterner,
    rules: Vec<LoadedRule>,
    /// Names used as a left-hand side.
    lhs_names: BTreeMap<usize, u32>,
    /// Names that appear quoted, with the first line they appear on.
    quoted_names: BTreeMap<usize, u32>,
    /// The first line every name appears on.
    first_lines: BTreeMap<usize, u32>,
}

impl Loader {
    fn new() -> Self {
        Loader {
            interner: StringInterner::new(),
            rules: vec![],
            lhs_names: BTreeMap::new(),
            quoted_names: BTreeMap::new(),
            first_lines: BTreeMap::new(),
        }
    }

    fn read_line(&mut self, line: &str, number: u32) -> Result<(), LoadError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        let (lhs, alternatives) = match line.split_once("->") {
            Some((lhs, rest)) if !rest.contains("->") => (lhs.trim(), rest),
            _ => {
                return Err(LoadError::new(
                    format!("expected `LHS -> alternatives`, found `{}`", line),
                    number,
                ))
            }
        };
        if lhs.is_empty() || lhs.contains(char::is_whitespace) {
            return Err(LoadError::new(
                format!("the left-hand side must be a single symbol, found `{}`", lhs),
                number,
            ));
        }
        let lhs_name = self.name(lhs, number)?;
        if lhs_name.quoted || EPSILON_MARKERS.contains(&lhs) {
            return Err(LoadError::new(
                format!("`{}` cannot be a left-hand side", lhs),
                number,
            ));
        }
        self.lhs_names.entry(lhs_name.index).or_insert(number);

        for alternative in alternatives.split('|') {
            let alternative = alternative.trim();
            if alternative.is_empty() {
                return Err(LoadError::new(
                    "empty alternative, write `ε` for the empty string",
                    number,
                ));
            }
            let rhs = if EPSILON_MARKERS.contains(&alternative) {
                vec![]
            } else {
                alternative
                    .split_whitespace()
                    .map(|token| self.name(token, number))
                    .collect::<Result<Vec<_>, _>>()?
            };
            self.rules.push(LoadedRule {
                line: number,
                lhs: lhs_name.index,
                rhs,
            });
        }
        Ok(())
    }

    fn name(&mut self, token: &str, number: u32) -> Result<Name, LoadError> {
        let unquoted = ['\'', '"'].iter().find_map(|&quote| {
            token
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        });
        let name = match unquoted {
            Some("") => return Err(LoadError::new("empty quoted symbol", number)),
            Some(name) => {
                let index = self.interner.get_or_intern(name);
                self.quoted_names.entry(index).or_insert(number);
                Name {
                    index,
                    quoted: true,
                }
            }
            None => Name {
                index: self.interner.get_or_intern(token),
                quoted: false,
            },
        };
        self.first_lines.entry(name.index).or_insert(number);
        Ok(name)
    }

    fn into_grammar(self) -> Result<Cfg, LoadError> {
        let first = self
            .rules
            .first()
            .ok_or_else(|| LoadError::new("the grammar has no rules", 1))?;
        let start_index = first.lhs;

        let mut cfg = Cfg::new();
        let mut symbols: Vec<Symbol> = vec![];
        for (index, name) in self.interner.iter() {
            let (kind, name) = if let Some(&line) = self.lhs_names.get(&index) {
                if let Some(&quoted_line) = self.quoted_names.get(&index) {
                    return Err(LoadError::new(
                        format!(
                            "`{}` is quoted as a terminal but has rules on line {}",
                            name, line
                        ),
                        quoted_line,
                    ));
                }
                (SymbolKind::Nonterminal, name.to_string())
            } else {
                // Input is matched lower-cased.
                (SymbolKind::Terminal, name.to_lowercase())
            };
            let line = self.first_lines.get(&index).copied().unwrap_or(1);
            let sym = cfg
                .intern(&name, kind)
                .map_err(|error| LoadError::new(error.to_string(), line))?;
            symbols.push(sym);
        }

        for rule in &self.rules {
            let rhs: Vec<Symbol> = rule.rhs.iter().map(|name| symbols[name.index]).collect();
            cfg.add_production(symbols[rule.lhs], rhs)
                .map_err(|error| LoadError::new(error.to_string(), rule.line))?;
        }
        cfg.set_start(symbols[start_index])
            .map_err(|error| LoadError::new(error.to_string(), first.line))?;

        debug!(
            "start symbol {}, {} nonterminals, {} terminals, {} rules",
            cfg.name_of(symbols[start_index]),
            cfg.nonterminals().count(),
            cfg.terminals().count(),
            cfg.num_rules()
        );
        Ok(cfg)
    }
}
