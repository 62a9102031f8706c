//! The standard three-axiom Hilbert basis this prover is built around, plus the five-formula
//! extension solely used to trigger the saturation engine's bootstrap derivation.

use crate::core::formula::Formula;
use crate::parser::parse;

const BASE: [&str; 3] = ["A>(B>A)", "(A>(B>C))>((A>B)>(A>C))", "(!A>!B)>((!A>B)>A)"];
const EXTENDED: [&str; 5] = ["A>(!A>B)", "A*B>A", "A*B>B", "A>(B>(A*B))", "A>A"];

/// The three axioms that make this calculus complete for classical propositional logic.
pub fn standard_axioms() -> Vec<Formula> {
    BASE.iter().map(|s| parse(s).expect("standard axioms always parse")).collect()
}

/// [standard_axioms] plus five more formulas whose only role is to trigger the saturation
/// engine's bootstrap derivation when supplied — not additional logical axioms in their own
/// right (see `engine::saturation`'s bootstrap resolution notes).
pub fn standard_axioms_extended() -> Vec<Formula> {
    let mut axioms = standard_axioms();
    axioms.extend(EXTENDED.iter().map(|s| parse(s).expect("standard axioms always parse")));
    axioms
}
