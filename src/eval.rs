// Licensed under MIT. See LICENSE for details.

use itertools::Itertools;
use log::debug;

use crate::bindings::Bindings;
use crate::error::EvalError;
use crate::types::Node;

/// Evaluates `node` with every variable taken from `bindings`.
///
/// Operands are evaluated left to right and chains are folded from the left,
/// so operators are never assumed to commute or associate. The first unbound
/// variable aborts the evaluation.
///
/// # Panics
///
/// Panics if the tree contains `Node::Empty`, which a parser never hands out.
pub fn evaluate(node: &Node, bindings: &Bindings) -> Result<f64, EvalError> {
    evaluate_node(node, bindings).map_err(|err| {
        debug!("evaluating {} failed: {}", node, err);
        err
    })
}

fn evaluate_node(node: &Node, bindings: &Bindings) -> Result<f64, EvalError> {
    match *node {
        Node::Empty => panic!("empty node reached the evaluator"),
        Node::Literal(n) => Ok(n),
        Node::Identifier(ref id) => bindings
            .get(id)
            .ok_or_else(|| EvalError::UnknownVariable(id.clone())),
        Node::UnaryOp(op, ref rhs) => Ok(op.apply(evaluate_node(rhs, bindings)?)),
        Node::BinaryOp(op, ref lhs, ref rhs) => {
            let lhs = evaluate_node(lhs, bindings)?;
            let rhs = evaluate_node(rhs, bindings)?;
            Ok(op.apply(lhs, rhs))
        }
        Node::TernaryOp(op, ref cond, ref t, ref f) => {
            let cond = evaluate_node(cond, bindings)?;
            let t = evaluate_node(t, bindings)?;
            let f = evaluate_node(f, bindings)?;
            Ok(op.apply(cond, t, f))
        }
        Node::Chain(ref head, ref steps) => {
            let init = evaluate_node(head, bindings)?;
            steps
                .iter()
                .map(|&(op, ref rhs)| evaluate_node(rhs, bindings).map(|v| (op, v)))
                .fold_results(init, |state, (op, v)| op.apply(state, v))
        }
    }
}
