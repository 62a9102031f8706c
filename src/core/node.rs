//! Index links between [crate::core::node::Node]s inside one [crate::core::formula::Formula].

use crate::core::term::Term;

/// An index into a [crate::core::formula::Formula]'s node vector, or [INVALID].
pub(crate) type Link = i32;

/// Sentinel for "no such node" — mirrors the `Invalid = -1` convention the tree this design
/// is grounded on uses throughout its index relations.
pub(crate) const INVALID: Link = -1;

/// The four index relations a [Node] carries: its own position, its children (if any), and
/// its parent (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Relation {
    pub(crate) self_idx: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
    pub(crate) parent: Link,
}

impl Relation {
    pub(crate) fn empty() -> Relation {
        Relation { self_idx: INVALID, left: INVALID, right: INVALID, parent: INVALID }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.self_idx != INVALID
    }

    pub(crate) fn has_left(&self) -> bool {
        self.left != INVALID
    }

    pub(crate) fn has_right(&self) -> bool {
        self.right != INVALID
    }
}

/// One node of a [crate::core::formula::Formula]: a [Term] plus its tree position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) term: Term,
    pub(crate) rel: Relation,
}
