//! Crate-boundary error type. Internal algorithms (unification, modus ponens) signal "not
//! applicable" with `Option`/the empty [crate::core::formula::Formula] rather than `Result` —
//! those are expected outcomes of a single attempt, not failures of the engine as a whole.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProverError {
    #[error("at least three axioms are required, got {0}")]
    Configuration(usize),

    #[error("could not parse formula: {0}")]
    Parse(String),
}
