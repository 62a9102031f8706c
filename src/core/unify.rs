//! Negation-aware unification: finds a [Substitution] making two formulas syntactically
//! identical up to variable renaming and leaf polarity, or reports failure.

use std::collections::VecDeque;

use crate::core::formula::Formula;
use crate::core::node::Link;
use crate::core::substitution::{resolve_through, Substitution};
use crate::core::term::{Kind, Term};

/// Binds `term.value` to `replacement` in `sub`, failing the occurs check if `replacement` is
/// a compound formula that already mentions `term` itself.
fn add_constraint(term: Term, replacement: Formula, sub: &mut Substitution) -> bool {
    if replacement.node(0).term.kind == Kind::Function && replacement.contains_value(term.value) {
        return false;
    }
    sub.insert(term.value, replacement);
    true
}

/// Attempts to unify `left` and `right`. `right`'s variables are first shifted clear of
/// `left`'s range so identically-numbered variables on both sides are treated as distinct
/// until proven otherwise — the same renaming-then-walk strategy
/// [crate::core::modus_ponens::modus_ponens] relies on to keep two formulas' variable spaces
/// disjoint before combining them.
pub(crate) fn unify(left: &Formula, right: &Formula) -> Option<Substitution> {
    let mut right = right.subtree_copy(0);
    right.change_variables(left.max_value() + 1);
    let mut fresh = right.max_value() + 1;
    let mut sub: Substitution = Substitution::default();

    let mut queue: VecDeque<(Link, Link)> = VecDeque::new();
    queue.push_back((0, 0));
    while let Some((li, ri)) = queue.pop_front() {
        let lt = left.node(li).term;
        let rt = right.node(ri).term;
        if lt.kind == Kind::Function && rt.kind == Kind::Function {
            if lt.op != rt.op {
                return None;
            }
            let lrel = left.subtree(li);
            let rrel = right.subtree(ri);
            queue.push_back((lrel.left, rrel.left));
            queue.push_back((lrel.right, rrel.right));
            continue;
        }

        let mut lhs = resolve_through(&sub, left.subtree_copy(li));
        let mut rhs = resolve_through(&sub, right.subtree_copy(ri));
        let lhs0 = lhs.node(0).term;
        let rhs0 = rhs.node(0).term;

        match (lhs0.kind, rhs0.kind) {
            (Kind::Constant, Kind::Constant) => {
                if lhs0 != rhs0 {
                    return None;
                }
            }
            (Kind::Constant, Kind::Variable) => {
                if rhs0.is_negated() {
                    lhs.negation(0);
                }
                if !add_constraint(rhs0, lhs, &mut sub) {
                    return None;
                }
            }
            (Kind::Variable, Kind::Constant) => {
                if lhs0.is_negated() {
                    rhs.negation(0);
                }
                if !add_constraint(lhs0, rhs, &mut sub) {
                    return None;
                }
            }
            (Kind::Variable, Kind::Variable) => {
                if lhs0.value == rhs0.value {
                    if lhs0.op != rhs0.op {
                        return None;
                    }
                } else {
                    let negated = lhs0.is_negated() || rhs0.is_negated();
                    let expr = Formula::leaf(if negated {
                        Term { op: crate::core::term::Op::Not, ..Term::variable(fresh) }
                    } else {
                        Term::variable(fresh)
                    });
                    fresh += 1;
                    let mut neg_expr = expr.subtree_copy(0);
                    neg_expr.negation(0);
                    let ok_l = if lhs0.is_negated() {
                        add_constraint(lhs0, neg_expr.clone(), &mut sub)
                    } else {
                        add_constraint(lhs0, expr.clone(), &mut sub)
                    };
                    let ok_r = if rhs0.is_negated() {
                        add_constraint(rhs0, neg_expr, &mut sub)
                    } else {
                        add_constraint(rhs0, expr, &mut sub)
                    };
                    if !ok_l || !ok_r {
                        return None;
                    }
                }
            }
            (Kind::Function, Kind::Variable) => {
                if rhs0.is_negated() {
                    lhs.negation(0);
                }
                if !add_constraint(rhs0, lhs, &mut sub) {
                    return None;
                }
            }
            (Kind::Variable, Kind::Function) => {
                if lhs0.is_negated() {
                    rhs.negation(0);
                }
                if !add_constraint(lhs0, rhs, &mut sub) {
                    return None;
                }
            }
            _ => return None,
        }
    }

    let keys: Vec<i32> = sub.keys().copied().collect();
    for key in keys {
        if sub[&key].node(0).term.kind != Kind::Function {
            continue;
        }
        let vars = sub[&key].variables();
        for var in vars {
            let Some(bound) = sub.get(&var).cloned() else { continue };
            let replacement = resolve_through(&sub, bound);
            if replacement.contains_value(var) {
                return None;
            }
            sub.get_mut(&key).unwrap().replace(var, &replacement);
        }
    }

    Some(sub)
}
