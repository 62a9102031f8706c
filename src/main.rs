//! Thin command-line front end: parses a target (and optional extra axioms), runs the search,
//! and prints the narrative transcript. All of the actual logic lives in the library crate.

mod panic;

use std::time::Duration;

use clap::Parser;

use propcalc::engine::saturation::{prove, SolverConfig};
use propcalc::parser::parse;
use propcalc::standard::{standard_axioms, standard_axioms_extended};

/// Searches for a Hilbert-style proof of a propositional target formula.
#[derive(Parser, Debug)]
#[command(name = "propcalc", version, about)]
struct Args {
    /// The formula to prove, e.g. "A>A".
    target: String,

    /// Extra axioms (beyond the standard three), in the same syntax as `target`.
    #[arg(short, long = "axiom")]
    axioms: Vec<String>,

    /// Supply the eight-axiom extension needed to trigger the bootstrap derivation.
    #[arg(long)]
    extended: bool,

    /// Time budget for the search, in milliseconds.
    #[arg(short, long, default_value_t = 10_000)]
    deadline_ms: u64,
}

fn main() {
    panic::install_panic_hook();
    env_logger::init();

    let args = Args::parse();

    let mut axioms = if args.extended { standard_axioms_extended() } else { standard_axioms() };
    for extra in &args.axioms {
        match parse(extra) {
            Ok(formula) => axioms.push(formula),
            Err(e) => {
                eprintln!("could not parse axiom {extra:?}: {e}");
                std::process::exit(1);
            }
        }
    }

    let target = match parse(&args.target) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("could not parse target {:?}: {e}", args.target);
            std::process::exit(1);
        }
    };

    match prove(axioms, target, Duration::from_millis(args.deadline_ms), SolverConfig::default()) {
        Ok(outcome) => {
            print!("{}", outcome.narrative);
            if !outcome.proved {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
