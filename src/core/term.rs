//! Terms: the operator/operand payload carried by every [crate::core::node::Node].

use std::fmt;

/// What kind of thing a [Term] denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    /// An internal connective node (has one or two children).
    Function,

    /// A leaf that still ranges over truth values (identified by [Term::value]).
    Variable,

    /// A leaf that has been fixed to a concrete propositional letter (proof-local constant).
    Constant,
}

/// The operator/polarity tag carried by a [Term].
///
/// [Function]-kind terms use this to select a connective; [Variable]/[Constant]-kind terms
/// use only [Op::Nop]/[Op::Not] to encode polarity without a separate negation node.
///
/// [Function]: Kind::Function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    /// No connective / positive polarity.
    Nop,
    /// Negated polarity (on a leaf) or logical negation (on a [Kind::Function] node, never
    /// actually stored there — negation of a connective dualizes it instead, see [Op::dual]).
    Not,
    Impl,
    Or,
    And,
    Xor,
    Equiv,
}

impl Op {
    /// The connective obtained by pushing a negation through this one (De Morgan's laws,
    /// generalized to implication/xor/equivalence). Mirrors `opposite()` in the formula this
    /// crate's search strategy is grounded on.
    pub(crate) fn dual(self) -> Op {
        match self {
            Op::Nop => Op::Not,
            Op::Not => Op::Nop,
            Op::Or => Op::And,
            Op::And => Op::Or,
            Op::Impl => Op::And,
            Op::Xor => Op::Equiv,
            Op::Equiv => Op::Xor,
        }
    }

    /// Binding precedence, highest first; used by [crate::core::formula::Formula::to_string] to
    /// decide whether a child needs parentheses.
    pub(crate) fn priority(self) -> u8 {
        match self {
            Op::Not | Op::Nop => 4,
            Op::And => 3,
            Op::Or => 2,
            Op::Xor | Op::Equiv => 1,
            Op::Impl => 0,
        }
    }

    /// Whether swapping this connective's two children yields an equivalent formula.
    pub(crate) fn is_commutative(self) -> bool {
        matches!(self, Op::And | Op::Or | Op::Xor | Op::Equiv)
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Op::Nop => "",
            Op::Not => "!",
            Op::Impl => ">",
            Op::Or => "|",
            Op::And => "*",
            Op::Xor => "+",
            Op::Equiv => "=",
        }
    }
}

/// The payload of a [crate::core::node::Node]: what it is and, for leaves, its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Term {
    pub(crate) kind: Kind,
    pub(crate) op: Op,
    /// Variable/constant identity (1-based); meaningless for [Kind::Function] terms.
    pub(crate) value: i32,
}

impl Term {
    pub(crate) fn function(op: Op) -> Term {
        Term { kind: Kind::Function, op, value: 0 }
    }

    pub(crate) fn variable(value: i32) -> Term {
        Term { kind: Kind::Variable, op: Op::Nop, value }
    }

    pub(crate) fn constant(value: i32) -> Term {
        Term { kind: Kind::Constant, op: Op::Nop, value }
    }

    pub(crate) fn is_negated(&self) -> bool {
        self.op == Op::Not
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let negated = if self.is_negated() { "!" } else { "" };
        match self.kind {
            Kind::Variable => write!(f, "{negated}{}", letter(self.value)),
            Kind::Constant => write!(f, "{negated}{}", letter(self.value).to_ascii_lowercase()),
            Kind::Function => write!(f, "{}", self.op.symbol()),
        }
    }
}

/// Maps a 1-based identity to a display letter, per the external formula syntax
/// (`value - 1 + 'A'`). Deliberately does not guard against more than 26 distinct
/// identities in one formula — matches the original prototype's encoding rule exactly,
/// and no end-to-end scenario needs more than a handful of variables.
pub(crate) fn letter(value: i32) -> char {
    (b'A' + ((value - 1).max(0) as u8)) as char
}
