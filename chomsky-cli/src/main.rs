use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::info;
use thiserror::Error;

use chomsky_cyk::{CykEngine, CykError};
use chomsky_grammar::{Cfg, GrammarError};
use chomsky_load::{CfgLoadExt, LoadFileError};
use chomsky_normalize::CnfNormalizer;

const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "salir"];

/// Converts a context-free grammar to Chomsky Normal Form and parses
/// sentences with the CYK algorithm.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grammar file with one `LHS -> alt | alt` rule per line.
    #[arg(value_name = "GRAMMAR")]
    grammar: PathBuf,

    /// Sentence to parse. Can be repeated. Without it, sentences are read
    /// from standard input.
    #[arg(short, long)]
    sentence: Vec<String>,

    /// Print the CYK table of every sentence.
    #[arg(long)]
    table: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Load(#[from] LoadFileError),
    #[error("normalization failed: {0}")]
    Grammar(#[from] GrammarError),
    #[error("{0}")]
    Cyk(#[from] CykError),
    #[error("cannot read input: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let grammar = Cfg::load_file(&args.grammar)?;
    println!("Grammar:");
    print!("{}", grammar.stringify_to_bnf());

    let mut normalizer = CnfNormalizer::new();
    let cnf = normalizer.normalize(&grammar)?;
    println!();
    for stats in normalizer.stats() {
        println!("  {}", stats);
    }
    println!();
    println!("Chomsky Normal Form:");
    print!("{}", cnf.stringify_to_bnf());

    let engine = CykEngine::new(&cnf)?;
    if args.sentence.is_empty() {
        interactive(&engine, args.table)
    } else {
        for sentence in &args.sentence {
            parse_sentence(&engine, sentence, args.table);
        }
        Ok(())
    }
}

fn interactive(engine: &CykEngine, table: bool) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nsentence> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if QUIT_COMMANDS.contains(&line.to_lowercase().as_str()) {
            break;
        }
        parse_sentence(engine, line, table);
    }
    info!("input finished");
    Ok(())
}

fn parse_sentence(engine: &CykEngine, sentence: &str, table: bool) {
    let tokens = tokenize(sentence);
    let started = Instant::now();
    let parse = engine.parse(&tokens);
    let elapsed = started.elapsed();

    let source = engine.grammar().sym_source();
    let verdict = if parse.accepted() { "accepted" } else { "rejected" };
    println!("{:?}: {} in {:.3?}", tokens, verdict, elapsed);
    if table {
        print!("{}", parse.table().display(source));
    }
    if let Some(tree) = parse.tree() {
        print!("{}", tree.display(source));
    }
}

/// Splits a sentence into lower-case tokens.
fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
