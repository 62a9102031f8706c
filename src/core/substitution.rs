//! The binding environment produced by [crate::core::unify::unify] and consumed by
//! [crate::core::modus_ponens::modus_ponens].

use std::collections::HashMap;

use crate::core::formula::Formula;

/// Maps a variable identity to the formula it has been bound to.
pub(crate) type Substitution = HashMap<i32, Formula>;

/// Follows a chain of variable bindings to the formula it ultimately resolves to, toggling
/// polarity at each hop whose occurrence was negated — the dereference loop shared by
/// [crate::core::unify::unify] (both sides, and its post-pass over nested bindings) and
/// [crate::core::modus_ponens::modus_ponens] (resolving the antecedent's substitution).
pub(crate) fn resolve_through(sub: &Substitution, mut formula: Formula) -> Formula {
    loop {
        let root = formula.node(0);
        if root.term.kind != crate::core::term::Kind::Variable {
            return formula;
        }
        let Some(bound) = sub.get(&root.term.value) else {
            return formula;
        };
        let should_negate = root.term.is_negated();
        formula = bound.clone();
        if should_negate {
            formula.negation(0);
        }
    }
}
