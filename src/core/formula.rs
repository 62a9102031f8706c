//! The formula tree: an ordered [Vec] of [Node]s addressed by index, the representation every
//! other component in this crate (unification, modus-ponens composition, saturation search,
//! proof reconstruction) operates on.
//!
//! Nodes link to each other by index rather than by pointer or `Box`, the same style the
//! arena this design is grounded on uses for its expression graph — except here each
//! [Formula] owns its nodes outright instead of sharing them through a central arena, since a
//! proof-search formula is produced once (by parsing, [Formula::subtree_copy],
//! [Formula::construct], or a modus-ponens step) and never mutated by two owners at once.

use std::fmt;

use crate::core::node::{Link, Node, Relation, INVALID};
use crate::core::term::{Kind, Op, Term};

/// A propositional formula: a tree of [Node]s, root always at index 0.
///
/// Opaque outside this crate: a caller obtains formulas from [crate::parser::parse] and passes
/// them to [crate::engine::saturation::prove] without ever inspecting a [Node] directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    nodes: Vec<Node>,
}

impl Formula {
    /// The node at `idx` (nodes are [Copy], so this returns by value rather than by reference).
    pub(crate) fn node(&self, idx: Link) -> Node {
        self.nodes[idx as usize]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The empty formula — the modus-ponens composer's and unifier's way of signaling "not
    /// applicable" without a `Result`, mirroring the original prototype's `Expression()`.
    pub(crate) fn empty() -> Formula {
        Formula { nodes: Vec::new() }
    }

    /// Builds a single-node formula around `term`.
    pub(crate) fn leaf(term: Term) -> Formula {
        Formula {
            nodes: vec![Node { term, rel: Relation { self_idx: 0, left: INVALID, right: INVALID, parent: INVALID } }],
        }
    }

    /// Builds `lhs <op> rhs` (or, if `rhs` is `None`, the unary formula `<op> lhs`) as a new
    /// root over fresh copies of both operands' subtrees — mirrors the static constructor this
    /// design is grounded on, which always appends operand copies after a new root node.
    pub(crate) fn construct(lhs: &Formula, op: Op, rhs: Option<&Formula>) -> Formula {
        let mut nodes = Vec::with_capacity(1 + lhs.len() + rhs.map_or(0, Formula::len));
        nodes.push(Node {
            term: Term::function(op),
            rel: Relation { self_idx: 0, left: INVALID, right: INVALID, parent: INVALID },
        });
        let left_start = 1;
        append_offset(&mut nodes, lhs);
        nodes[0].rel.left = left_start as Link;
        if let Some(rhs) = rhs {
            let right_start = nodes.len();
            append_offset(&mut nodes, rhs);
            nodes[0].rel.right = right_start as Link;
        }
        Formula { nodes }
    }

    /// The [Relation] at `idx`, or an empty relation if `idx` is out of range.
    pub(crate) fn subtree(&self, idx: Link) -> Relation {
        if idx == INVALID || idx as usize >= self.nodes.len() {
            Relation::empty()
        } else {
            self.nodes[idx as usize].rel
        }
    }

    pub(crate) fn has_left(&self, idx: Link) -> bool {
        self.subtree(idx).has_left()
    }

    pub(crate) fn has_right(&self, idx: Link) -> bool {
        self.subtree(idx).has_right()
    }

    /// Pre-order copy of the subtree rooted at `idx`, with indices remapped to start at 0 and
    /// the copied root's parent set to [INVALID] — the operation every algorithm in this crate
    /// uses instead of mutating a formula that might be aliased elsewhere.
    pub(crate) fn subtree_copy(&self, idx: Link) -> Formula {
        if idx == INVALID || idx as usize >= self.nodes.len() {
            return Formula { nodes: Vec::new() };
        }
        let mut nodes = Vec::new();
        let mut mapping = vec![INVALID; self.nodes.len()];
        self.copy_preorder(idx, &mut nodes, &mut mapping);
        nodes[0].rel.parent = INVALID;
        Formula { nodes }
    }

    fn copy_preorder(&self, idx: Link, out: &mut Vec<Node>, mapping: &mut Vec<Link>) -> Link {
        let new_idx = out.len() as Link;
        mapping[idx as usize] = new_idx;
        let src = &self.nodes[idx as usize];
        out.push(Node { term: src.term, rel: Relation::empty() });
        let rel = src.rel;
        let new_left = if rel.has_left() { self.copy_preorder(rel.left, out, mapping) } else { INVALID };
        let new_right = if rel.has_right() { self.copy_preorder(rel.right, out, mapping) } else { INVALID };
        let parent = if rel.parent == INVALID { INVALID } else { mapping[rel.parent as usize] };
        out[new_idx as usize].rel = Relation { self_idx: new_idx, left: new_left, right: new_right, parent };
        if new_left != INVALID {
            out[new_left as usize].rel.parent = new_idx;
        }
        if new_right != INVALID {
            out[new_right as usize].rel.parent = new_idx;
        }
        new_idx
    }

    /// Whether any node carries exactly `term` (kind, polarity, and identity all equal).
    pub(crate) fn contains(&self, term: Term) -> bool {
        self.nodes.iter().any(|n| n.term == term)
    }

    /// Whether any [Kind::Variable] leaf carries identity `value`, regardless of polarity — the
    /// occurs-check primitive the unifier and its post-pass substitution resolution use. Unlike
    /// [Formula::contains], this ignores `op`, since a variable occurring as `X` or as `!X`
    /// inside a replacement is equally cyclic.
    pub(crate) fn contains_value(&self, value: i32) -> bool {
        self.nodes.iter().any(|n| n.term.kind == Kind::Variable && n.term.value == value)
    }

    /// Distinct [Kind::Variable] identities, in first-appearance (pre-order) order.
    pub(crate) fn variables(&self) -> Vec<i32> {
        let mut seen = Vec::new();
        for n in &self.nodes {
            if n.term.kind == Kind::Variable && !seen.contains(&n.term.value) {
                seen.push(n.term.value);
            }
        }
        seen
    }

    /// Largest identity among [Kind::Variable]/[Kind::Constant] leaves, or 0 if there are none.
    pub(crate) fn max_value(&self) -> i32 {
        self.nodes
            .iter()
            .filter(|n| n.term.kind != Kind::Function)
            .map(|n| n.term.value)
            .max()
            .unwrap_or(0)
    }

    /// Smallest identity among [Kind::Variable]/[Kind::Constant] leaves, or 0 if there are none.
    pub(crate) fn min_value(&self) -> i32 {
        self.nodes
            .iter()
            .filter(|n| n.term.kind != Kind::Function)
            .map(|n| n.term.value)
            .min()
            .unwrap_or(0)
    }

    /// Shifts every [Kind::Variable] identity so the formula's minimum becomes `bound`.
    /// [Kind::Constant] leaves are left untouched — once a variable has been made permanent
    /// (see [Formula::make_permanent]) it denotes a fixed letter of the original goal and must
    /// never be renamed away during search.
    pub(crate) fn change_variables(&mut self, bound: i32) {
        let shift = bound - self.min_value();
        if shift == 0 {
            return;
        }
        for n in &mut self.nodes {
            if n.term.kind == Kind::Variable {
                n.term.value += shift;
            }
        }
    }

    /// Renumbers [Kind::Variable] identities to `1..=n` in first-appearance order, producing a
    /// canonical form so that alpha-equivalent formulas compare (and [Formula::to_string]) equal.
    pub(crate) fn normalize(&mut self) {
        let order = self.variables();
        for n in &mut self.nodes {
            if n.term.kind == Kind::Variable {
                if let Some(pos) = order.iter().position(|v| *v == n.term.value) {
                    n.term.value = pos as i32 + 1;
                }
            }
        }
    }

    /// Freezes every [Kind::Variable] leaf into a [Kind::Constant] — used once a target formula
    /// has been fixed so its letters are never renamed by later [Formula::change_variables] calls.
    pub(crate) fn make_permanent(&mut self) {
        for n in &mut self.nodes {
            if n.term.kind == Kind::Variable {
                n.term.kind = Kind::Constant;
            }
        }
    }

    /// Rewrites every `A + B` into `!A > B` throughout the tree (disjunction has no direct
    /// representation the unifier/composer need to special-case; expressing it via implication
    /// keeps [crate::core::modus_ponens] and [crate::core::unify] working with a single shape).
    pub(crate) fn standardize(&mut self) {
        let mut queue = vec![0i32];
        while let Some(idx) = queue.pop() {
            if idx == INVALID {
                continue;
            }
            let rel = self.nodes[idx as usize].rel;
            if self.nodes[idx as usize].term.kind == Kind::Function && self.nodes[idx as usize].term.op == Op::Or {
                self.negate_subtree(rel.left);
                self.nodes[idx as usize].term.op = Op::Impl;
            }
            if rel.has_left() {
                queue.push(rel.left);
            }
            if rel.has_right() {
                queue.push(rel.right);
            }
        }
    }

    /// Negates the subtree rooted at `idx` in place, per the connective-duality table
    /// (De Morgan's laws generalized to implication/xor/equivalence).
    pub(crate) fn negation(&mut self, idx: Link) {
        self.negate_subtree(idx);
    }

    fn negate_subtree(&mut self, idx: Link) {
        if idx == INVALID {
            return;
        }
        let term = self.nodes[idx as usize].term;
        match term.kind {
            Kind::Variable | Kind::Constant => {
                self.nodes[idx as usize].term.op = term.op.dual();
            }
            Kind::Function => {
                let rel = self.nodes[idx as usize].rel;
                self.nodes[idx as usize].term.op = term.op.dual();
                match term.op {
                    Op::Impl => self.negate_subtree(rel.right),
                    Op::Or | Op::And => {
                        self.negate_subtree(rel.left);
                        self.negate_subtree(rel.right);
                    }
                    Op::Xor | Op::Equiv => {}
                    Op::Not | Op::Nop => unreachable!("connective node never carries Not/Nop"),
                }
            }
        }
    }

    /// Replaces every [Kind::Variable] leaf with identity `value` by a fresh copy of
    /// `expression`, negating the copy once more at each occurrence whose own polarity is
    /// negative. Used by [crate::core::modus_ponens::modus_ponens] and the unifier's post-pass
    /// to graft substitutions into a formula.
    pub(crate) fn replace(&mut self, value: i32, expression: &Formula) {
        let occurrences: Vec<Link> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.term.kind == Kind::Variable && n.term.value == value)
            .map(|(i, _)| i as Link)
            .collect();
        for idx in occurrences {
            let negated = self.nodes[idx as usize].term.is_negated();
            let parent = self.nodes[idx as usize].rel.parent;
            let mut graft = expression.clone();
            if negated {
                graft.negate_subtree(0);
            }
            self.graft_at(idx, parent, graft);
        }
    }

    /// Splices `graft` into this formula in place of the single node at `idx`, re-stitching
    /// `idx`'s parent to point at the grafted root.
    fn graft_at(&mut self, idx: Link, parent: Link, graft: Formula) {
        let base = self.nodes.len() as Link;
        for n in graft.nodes {
            let mut n = n;
            n.rel.self_idx += base;
            if n.rel.left != INVALID {
                n.rel.left += base;
            }
            if n.rel.right != INVALID {
                n.rel.right += base;
            }
            n.rel.parent = if n.rel.parent == INVALID { parent } else { n.rel.parent + base };
            self.nodes.push(n);
        }
        let new_root = base;
        if parent != INVALID {
            if self.nodes[parent as usize].rel.left == idx {
                self.nodes[parent as usize].rel.left = new_root;
            } else if self.nodes[parent as usize].rel.right == idx {
                self.nodes[parent as usize].rel.right = new_root;
            }
        }
        // idx itself is now dead (unreferenced); left in place rather than compacted, since
        // every traversal here starts from the root and only follows live links.
    }

    /// Structural equality: same shape, same connectives, same polarity, and (unless
    /// `ignore_variable_identity`) the same variable/constant identities at every leaf.
    pub(crate) fn equals(&self, other: &Formula, ignore_variable_identity: bool) -> bool {
        if self.nodes.len() != other.nodes.len() {
            return false;
        }
        self.equals_at(0, other, 0, ignore_variable_identity)
    }

    fn equals_at(&self, a: Link, other: &Formula, b: Link, ignore_variable_identity: bool) -> bool {
        if a == INVALID && b == INVALID {
            return true;
        }
        if a == INVALID || b == INVALID {
            return false;
        }
        let (na, nb) = (self.nodes[a as usize], other.nodes[b as usize]);
        if na.term.kind != nb.term.kind || na.term.op != nb.term.op {
            return false;
        }
        if na.term.kind != Kind::Function
            && !(ignore_variable_identity && na.term.kind == Kind::Variable)
            && na.term.value != nb.term.value
        {
            return false;
        }
        self.equals_at(na.rel.left, other, nb.rel.left, ignore_variable_identity)
            && self.equals_at(na.rel.right, other, nb.rel.right, ignore_variable_identity)
    }

    // `parent_priority` is the binding strength imposed by the enclosing operator;
    // `tie_needs_parens` additionally forces parens on an equal-priority child — needed for the
    // left operand of `>`, since `>` is right-associative and `(A>B)>C` would otherwise print
    // indistinguishably from `A>(B>C)`.
    fn fmt_at(
        &self,
        idx: Link,
        parent_priority: u8,
        tie_needs_parens: bool,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        if idx == INVALID {
            return Ok(());
        }
        let node = &self.nodes[idx as usize];
        match node.term.kind {
            Kind::Variable | Kind::Constant => write!(f, "{}", node.term),
            Kind::Function => {
                let priority = node.term.op.priority();
                let needs_parens =
                    priority < parent_priority || (tie_needs_parens && priority == parent_priority);
                if needs_parens {
                    write!(f, "(")?;
                }
                let left_ties = node.term.op == Op::Impl;
                if node.rel.has_left() && node.rel.has_right() {
                    self.fmt_at(node.rel.left, priority, left_ties, f)?;
                    write!(f, "{}", node.term.op.symbol())?;
                    self.fmt_at(node.rel.right, priority, false, f)?;
                } else {
                    write!(f, "{}", node.term.op.symbol())?;
                    let only = if node.rel.has_left() { node.rel.left } else { node.rel.right };
                    self.fmt_at(only, priority, false, f)?;
                }
                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        self.fmt_at(0, 0, false, f)
    }
}

fn append_offset(nodes: &mut Vec<Node>, src: &Formula) {
    let base = nodes.len() as Link;
    for n in &src.nodes {
        let mut n = *n;
        n.rel.self_idx += base;
        if n.rel.has_left() {
            n.rel.left += base;
        }
        if n.rel.has_right() {
            n.rel.right += base;
        }
        n.rel.parent = if n.rel.parent == INVALID { INVALID } else { n.rel.parent + base };
        nodes.push(n);
    }
    // root of the appended subtree has no parent yet; the caller (Formula::construct) wires
    // it up to the new formula's root right after calling this helper.
}
