//! The deduction-theorem preprocessor: repeatedly strips a leading implication off the target,
//! turning `Γ ⊢ α > β` into the (easier, or at least differently-shaped) problem
//! `Γ ∪ {α} ⊢ β`.

use crate::core::formula::Formula;
use crate::core::term::{Kind, Op};

/// If `target` is shaped `antecedent > consequent`, returns the two halves (as independent
/// copies); otherwise returns `None` and the caller should move on to saturation search with
/// `target` as the final goal.
pub(crate) fn decompose(target: &Formula) -> Option<(Formula, Formula)> {
    let root = target.node(0).term;
    let rel = target.subtree(0);
    if root.kind == Kind::Function && root.op == Op::Impl && rel.has_left() && rel.has_right() {
        Some((target.subtree_copy(rel.left), target.subtree_copy(rel.right)))
    } else {
        None
    }
}
