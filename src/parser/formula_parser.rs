//! Parses the external formula syntax into a [Formula] — the textual front end is an external
//! collaborator to the proving core, never reached into by [crate::core]; this module only
//! produces [Formula] values through its public constructors ([Formula::leaf],
//! [Formula::construct]).

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::core::formula::Formula;
use crate::core::term::{Op, Term};
use crate::error::ProverError;

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
struct FormulaParser;

/// Parses `input` (the `!`/`*`/`+`/`^`/`=`/`>` infix syntax with lowercase constants and
/// uppercase variables) into a [Formula].
pub fn parse(input: &str) -> Result<Formula, ProverError> {
    let mut pairs = FormulaParser::parse(Rule::formula, input).map_err(|e| ProverError::Parse(e.to_string()))?;
    let formula_pair = pairs.next().expect("formula rule always produces one pair");
    let expr_pair = formula_pair.into_inner().next().expect("formula wraps exactly one expr");
    Ok(build_expr(expr_pair))
}

fn build_expr(pair: Pair<Rule>) -> Formula {
    match pair.as_rule() {
        Rule::expr => build_expr(pair.into_inner().next().unwrap()),
        Rule::impl_expr => {
            let mut inner = pair.into_inner();
            let left = build_expr(inner.next().unwrap());
            match inner.next() {
                Some(rest) => {
                    let right = build_expr(rest);
                    Formula::construct(&left, Op::Impl, Some(&right))
                }
                None => left,
            }
        }
        Rule::or_xor_equiv_expr => {
            let mut inner = pair.into_inner();
            let mut acc = build_expr(inner.next().unwrap());
            loop {
                let Some(op_pair) = inner.next() else { break };
                let op = match op_pair.as_rule() {
                    Rule::op_or => Op::Or,
                    Rule::op_xor => Op::Xor,
                    Rule::op_equiv => Op::Equiv,
                    _ => unreachable!("or_xor_equiv_expr only interleaves op_or/op_xor/op_equiv"),
                };
                let rhs = build_expr(inner.next().expect("operator is always followed by an operand"));
                acc = Formula::construct(&acc, op, Some(&rhs));
            }
            acc
        }
        Rule::and_expr => {
            let mut inner = pair.into_inner();
            let mut acc = build_expr(inner.next().unwrap());
            for rhs_pair in inner {
                if rhs_pair.as_rule() == Rule::op_and {
                    continue;
                }
                let rhs = build_expr(rhs_pair);
                acc = Formula::construct(&acc, Op::And, Some(&rhs));
            }
            acc
        }
        Rule::unary_expr => {
            let text = pair.as_str();
            let negations = text.chars().take_while(|c| *c == '!').count();
            let atom = pair.into_inner().next().expect("unary_expr always wraps one atom");
            let mut formula = build_expr(atom);
            if negations % 2 == 1 {
                formula.negation(0);
            }
            formula
        }
        Rule::atom => build_expr(pair.into_inner().next().expect("atom always wraps one child")),
        Rule::variable => {
            let c = pair.as_str().chars().next().unwrap();
            Formula::leaf(Term::variable(c as i32 - 'A' as i32 + 1))
        }
        Rule::constant => {
            let c = pair.as_str().chars().next().unwrap();
            Formula::leaf(Term::constant(c as i32 - 'a' as i32 + 1))
        }
        rule => unreachable!("unexpected rule in formula grammar: {rule:?}"),
    }
}
