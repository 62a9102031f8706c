//! Composes two formulas `a` and `b = (antecedent > consequent)` via modus ponens with
//! implicit unification: if `a` unifies with `b`'s antecedent, returns the consequent with
//! that unifier's bindings applied; otherwise returns the empty formula.

use crate::core::formula::Formula;
use crate::core::substitution::resolve_through;
use crate::core::term::{Kind, Op};
use crate::core::unify::unify;

/// Applies modus ponens: from `a` and `b` (read as `antecedent > consequent`), derives the
/// consequent under the substitution that unifies `a` with `b`'s antecedent. Returns an empty
/// formula ([Formula::is_empty]) if either input is empty, `b` is not shaped `_ > _`, or
/// unification fails.
pub(crate) fn modus_ponens(a: &Formula, b: &Formula) -> Formula {
    if a.is_empty() || b.is_empty() {
        return Formula::empty();
    }
    let root = b.node(0).term;
    let rel = b.subtree(0);
    if root.kind != Kind::Function || root.op != Op::Impl || !rel.has_left() || !rel.has_right() {
        return Formula::empty();
    }

    let antecedent = b.subtree_copy(rel.left);
    let Some(substitution) = unify(a, &antecedent) else {
        return Formula::empty();
    };

    let mut result = b.subtree_copy(0);
    result.change_variables(a.max_value() + 1);

    for var in result.variables() {
        let Some(bound) = substitution.get(&var).cloned() else { continue };
        let change = resolve_through(&substitution, bound);
        result.replace(var, &change);
    }

    let consequent_idx = result.subtree(0).right;
    let mut result = result.subtree_copy(consequent_idx);
    result.normalize();
    result
}
