//! propcalc searches for Hilbert-style proofs of propositional tautologies by modus ponens,
//! optionally preceded by deduction-theorem preprocessing.
//!
//! * propcalc is meant to be driven through its own binary (see `src/main.rs`); the library
//!   surface is [engine::saturation::prove] plus [parser::parse] to build
//!   [core::formula::Formula] values from source text.
//! * As a starting point in this documentation, see [core::formula::Formula] and
//!   [engine::saturation] for the central algorithms.

#![allow(rustdoc::private_intra_doc_links)]

pub(crate) mod core;
pub mod engine;
pub mod error;
pub mod parser;
pub mod standard;
mod tests;

pub use crate::core::formula::Formula;
