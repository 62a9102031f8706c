//! Proof reconstruction: turns a [DerivationLog] and a winning canonical string into the
//! narrative transcript described in the formula input/output contract.

use crate::core::formula::Formula;
use crate::core::unify::unify;
use crate::core::term::letter;
use crate::engine::log::{DerivationLog, Rule};

/// Renders the ancestor-first transcript for `winner`, then unifies the original `target`
/// against it one more time to report the final variable bindings — the same closing step
/// the search this crate is grounded on performs after finding a match.
pub(crate) fn reconstruct(log: &DerivationLog, winner: &str, winner_formula: &Formula, target: &Formula) -> String {
    let mut out = String::new();
    for key in log.ancestors_of(winner) {
        let entry = log.entry(&key).expect("ancestors_of only returns logged keys");
        match &entry.rule {
            Rule::Axiom => out.push_str(&format!("{key}  axiom\n")),
            Rule::Lemma => out.push_str(&format!("{key}  lemma\n")),
            Rule::Mp { left, right } => out.push_str(&format!("{key} mp {left} {right}\n")),
        }
    }
    if let Some(substitution) = unify(target, winner_formula) {
        if !substitution.is_empty() {
            out.push_str(&format!("change variables: {winner_formula}\n"));
            let mut vars: Vec<i32> = substitution.keys().copied().collect();
            vars.sort_unstable();
            for var in vars {
                out.push_str(&format!("{} -> {}\n", letter(var), substitution[&var]));
            }
            out.push_str(&format!("proved: {target}\n"));
        }
    }
    out
}
