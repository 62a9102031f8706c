//! The saturation engine: breadth-limited forward-chaining search for a proof of a target
//! formula from a set of axioms, preceded by deduction-theorem preprocessing.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};
use rustc_hash::FxHashSet;

use crate::core::formula::Formula;
use crate::core::modus_ponens::modus_ponens;
use crate::core::term::{Op, Term};
use crate::engine::deduction;
use crate::engine::log::{DerivationLog, Rule};
use crate::engine::reconstruct::reconstruct;
use crate::error::ProverError;

/// Tunable knobs for one `prove` call. `Default` matches the constants the search this engine
/// is grounded on hard-codes.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// A candidate formula is discarded once its node count exceeds
    /// `length_multiplier * target.len()`.
    pub length_multiplier: usize,
    /// Whether to run the eight-step bootstrap derivation when at least 8 axioms are supplied.
    pub run_bootstrap: bool,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig { length_multiplier: 2, run_bootstrap: true }
    }
}

/// The result of one `prove` call.
#[derive(Debug, Clone)]
pub struct ProveOutcome {
    pub proved: bool,
    pub narrative: String,
}

/// Attempts to prove `target` from `axioms` within `deadline`. Fails only on malformed input
/// (fewer than three axioms); a proof not being found within the budget is reported in the
/// narrative, not as an `Err`.
pub fn prove(
    axioms: Vec<Formula>,
    mut target: Formula,
    deadline: Duration,
    config: SolverConfig,
) -> Result<ProveOutcome, ProverError> {
    if axioms.len() < 3 {
        return Err(ProverError::Configuration(axioms.len()));
    }
    target.standardize();
    target.make_permanent();
    let original_target = target.clone();
    let len_target = original_target.len();

    let mut narrative = String::new();
    let mut axioms_work = axioms.clone();

    let seeded = if config.run_bootstrap && axioms_work.len() >= 8 {
        let cap = len_target * config.length_multiplier;
        bootstrap(&axioms_work, cap)
    } else {
        Vec::new()
    };
    debug!("bootstrap seeded {} lemma(s)", seeded.len());
    axioms_work.truncate(3);

    let mut targets = vec![target];
    loop {
        let current = targets.last().unwrap().clone();
        match deduction::decompose(&current) {
            Some((antecedent, consequent)) => {
                narrative.push_str(&format!(
                    "deduction theorem: \u{393} \u{22a2} {current} <=> \u{393} \u{222a} {{{antecedent}}} \u{22a2} {consequent}\n"
                ));
                axioms_work.push(antecedent);
                targets.push(consequent);
            }
            None => break,
        }
    }
    let deadline_at = Instant::now() + deadline;

    let mut log = DerivationLog::new();
    let mut known: FxHashSet<String> = FxHashSet::default();
    let mut produced: VecDeque<Formula> = VecDeque::new();

    for axiom in &axioms_work {
        let mut axiom = axiom.clone();
        axiom.normalize();
        let key = axiom.to_string();
        if known.insert(key.clone()) {
            log.record(key, Rule::Axiom);
            produced.push_back(axiom);
        }
    }
    for (formula, left_key, right_key) in &seeded {
        let mut formula = formula.clone();
        formula.normalize();
        let key = formula.to_string();
        if known.insert(key.clone()) {
            log.record(key, Rule::Mp { left: left_key.clone(), right: right_key.clone() });
            produced.push_back(formula);
        }
    }
    let lemma = contraposition_lemma();
    let lemma_key = lemma.to_string();
    if known.insert(lemma_key.clone()) {
        log.record(lemma_key, Rule::Lemma);
        produced.push_back(lemma);
    }

    let max_len = len_target * config.length_multiplier;
    let mut active: Vec<Formula> = Vec::new();

    loop {
        if produced.is_empty() {
            warn!("search exhausted without finding a proof");
            narrative.push_str("no proof found within the given length bound\n");
            return Ok(ProveOutcome { proved: false, narrative });
        }
        let generation = produced.len();
        trace!("starting round with {generation} candidate(s)");
        for _ in 0..generation {
            if Instant::now() >= deadline_at {
                warn!("time budget exhausted during search");
                narrative.push_str("budget exhausted\n");
                return Ok(ProveOutcome { proved: false, narrative });
            }
            let candidate = produced.pop_front().expect("generation size matches queue length");
            let candidate_key = candidate.to_string();

            for target in &targets {
                if is_equal(&candidate, target) {
                    info!("proof found: {candidate_key}");
                    narrative.push_str(&reconstruct(&log, &candidate_key, &candidate, &original_target));
                    return Ok(ProveOutcome { proved: true, narrative });
                }
            }

            for other in &active {
                admit(modus_ponens(&candidate, other), &candidate_key, &other.to_string(), max_len, &mut known, &mut log, &mut produced);
                admit(modus_ponens(other, &candidate), &other.to_string(), &candidate_key, max_len, &mut known, &mut log, &mut produced);
            }
            // `j == last` self-pairing: mp(candidate, candidate) is attempted once, not twice,
            // since both directions are the same formula.
            admit(modus_ponens(&candidate, &candidate), &candidate_key, &candidate_key, max_len, &mut known, &mut log, &mut produced);
            active.push(candidate);
        }
    }
}

/// Normalizes, length-bounds, and (if new) logs and enqueues a modus-ponens result.
fn admit(
    mut result: Formula,
    left_key: &str,
    right_key: &str,
    max_len: usize,
    known: &mut FxHashSet<String>,
    log: &mut DerivationLog,
    produced: &mut VecDeque<Formula>,
) {
    if result.is_empty() || result.len() > max_len {
        return;
    }
    result.normalize();
    let key = result.to_string();
    if !known.insert(key.clone()) {
        return;
    }
    log.record(key, Rule::Mp { left: left_key.to_string(), right: right_key.to_string() });
    produced.push_back(result);
}

/// Whether `left` and `right` denote the same formula up to variable renaming: both are
/// normalized, then compared node by node including the (now-canonical) variable numbering —
/// comparing post-normalization identities directly is what makes this an alpha-equivalence
/// check rather than exact-identity one; ignoring them here would wrongly equate e.g. `A>A`
/// with `A>B` once both are normalized to the same shape.
fn is_equal(left: &Formula, right: &Formula) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut left = left.clone();
    let mut right = right.clone();
    left.normalize();
    right.normalize();
    left.equals(&right, false)
}

/// The eight hard-coded bootstrap derivations (see the bootstrap resolution notes), returned
/// as `(result, left_parent_key, right_parent_key)` triples for every step whose result is
/// non-empty and within `max_len`.
fn bootstrap(orig: &[Formula], max_len: usize) -> Vec<(Formula, String, String)> {
    let keys: Vec<String> = orig.iter().map(|f| f.to_string()).collect();
    let mut seeded = Vec::new();
    let mut boot: Vec<Option<(Formula, String)>> = Vec::with_capacity(6);

    let mut step = |a: &Formula, a_key: &str, b: &Formula, b_key: &str, boot: &mut Vec<Option<(Formula, String)>>| {
        let result = modus_ponens(a, b);
        if result.is_empty() || result.len() > max_len {
            boot.push(None);
            return;
        }
        let key = result.to_string();
        seeded.push((result.clone(), a_key.to_string(), b_key.to_string()));
        boot.push(Some((result, key)));
    };

    step(&orig[0], &keys[0], &orig[0], &keys[0], &mut boot); // Boot[0]
    step(&orig[1], &keys[1], &orig[0], &keys[0], &mut boot); // Boot[1]
    step(&orig[3], &keys[3], &orig[1], &keys[1], &mut boot); // Boot[2]
    step(&orig[4], &keys[4], &orig[1], &keys[1], &mut boot); // Boot[3]
    step(&orig[2], &keys[2], &orig[5], &keys[5], &mut boot); // Boot[4]
    step(&orig[6], &keys[6], &orig[6], &keys[6], &mut boot); // Boot[5]

    if let Some((b0, b0_key)) = boot[0].clone() {
        step(&orig[7], &keys[7], &b0, &b0_key, &mut boot); // Boot[6]
    }
    if let Some((b1, b1_key)) = boot[1].clone() {
        step(&orig[3], &keys[3], &b1, &b1_key, &mut boot); // Boot[7]
    }

    seeded
}

/// `(!A>!B)>(B>A)`, built directly rather than parsed — a fixed tuning lemma, not user input.
fn contraposition_lemma() -> Formula {
    let not_a = Formula::leaf(Term { op: Op::Not, ..Term::variable(1) });
    let not_b = Formula::leaf(Term { op: Op::Not, ..Term::variable(2) });
    let antecedent = Formula::construct(&not_a, Op::Impl, Some(&not_b));
    let b = Formula::leaf(Term::variable(2));
    let a = Formula::leaf(Term::variable(1));
    let consequent = Formula::construct(&b, Op::Impl, Some(&a));
    Formula::construct(&antecedent, Op::Impl, Some(&consequent))
}
