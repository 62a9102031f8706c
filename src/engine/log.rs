//! The append-only derivation log: records, for every admitted formula, how it was obtained,
//! so [crate::engine::reconstruct] can later walk back from a proved target to the axioms.

use rustc_hash::FxHashMap;

/// How a logged formula was obtained.
#[derive(Debug, Clone)]
pub(crate) enum Rule {
    /// Supplied directly by the caller, or introduced as an antecedent by the deduction-theorem
    /// preprocessor.
    Axiom,
    /// A hard-coded lemma seeded into the search (the contraposition schema).
    Lemma,
    /// Derived by modus ponens from the two named parents (their canonical strings).
    Mp { left: String, right: String },
}

#[derive(Debug, Clone)]
pub(crate) struct LogEntry {
    pub(crate) rule: Rule,
}

/// Canonical-string keyed, insertion-ordered derivation log.
///
/// Insertion order is already a valid topological order: a formula is only ever logged after
/// both of its modus-ponens parents (if any) have been logged, so scanning `order` from the
/// start and filtering to a reachable set yields an ancestor-first proof transcript without a
/// separate topological sort.
#[derive(Debug, Default)]
pub(crate) struct DerivationLog {
    order: Vec<String>,
    entries: FxHashMap<String, LogEntry>,
}

impl DerivationLog {
    pub(crate) fn new() -> DerivationLog {
        DerivationLog::default()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Records `key` under `rule`, unless it is already present (the log is append-only; the
    /// first derivation of a formula is the one proof reconstruction will report).
    pub(crate) fn record(&mut self, key: String, rule: Rule) {
        if self.entries.contains_key(&key) {
            return;
        }
        self.order.push(key.clone());
        self.entries.insert(key, LogEntry { rule });
    }

    pub(crate) fn entry(&self, key: &str) -> Option<&LogEntry> {
        self.entries.get(key)
    }

    /// All logged keys that `key` depends on (including `key` itself), in ancestor-first order.
    pub(crate) fn ancestors_of(&self, key: &str) -> Vec<String> {
        let mut reachable = std::collections::HashSet::new();
        let mut stack = vec![key.to_string()];
        while let Some(k) = stack.pop() {
            if !reachable.insert(k.clone()) {
                continue;
            }
            if let Some(entry) = self.entries.get(&k) {
                if let Rule::Mp { left, right } = &entry.rule {
                    stack.push(left.clone());
                    stack.push(right.clone());
                }
            }
        }
        self.order.iter().filter(|k| reachable.contains(*k)).cloned().collect()
    }
}
