// Licensed under MIT. See LICENSE for details.

//! Constant folding.
//!
//! Evaluates every subtree whose leaves are all literals, e.g. `2 + 3 * x`
//! stays as is while `2 + 3 * 4` becomes `14`. The input tree is left
//! untouched.

use log::trace;

use crate::ops::BinaryFn;
use crate::types::Node;

pub fn fold(node: &Node) -> Node {
    let folded = fold_node(node);
    trace!("folded {} into {}", node, folded);
    folded
}

fn fold_node(node: &Node) -> Node {
    match *node {
        Node::Empty => Node::Literal(0.0),
        Node::Literal(n) => Node::Literal(n),
        Node::Identifier(ref id) => Node::Identifier(id.clone()),
        Node::UnaryOp(op, ref rhs) => match fold_node(rhs) {
            Node::Literal(v) => Node::Literal(op.apply(v)),
            rhs => Node::UnaryOp(op, Box::new(rhs)),
        },
        Node::BinaryOp(op, ref lhs, ref rhs) => fold_binary(op, fold_node(lhs), fold_node(rhs)),
        // Both branches are folded, whatever the condition.
        Node::TernaryOp(op, ref cond, ref t, ref f) => {
            match (fold_node(cond), fold_node(t), fold_node(f)) {
                (Node::Literal(c), Node::Literal(t), Node::Literal(f)) => {
                    Node::Literal(op.apply(c, t, f))
                }
                (c, t, f) => Node::TernaryOp(op, Box::new(c), Box::new(t), Box::new(f)),
            }
        }
        // The running state is the left operand of the next step.
        Node::Chain(ref head, ref steps) => steps
            .iter()
            .fold(fold_node(head), |state, &(op, ref rhs)| {
                fold_binary(op, state, fold_node(rhs))
            }),
    }
}

fn fold_binary(op: BinaryFn, lhs: Node, rhs: Node) -> Node {
    match (lhs, rhs) {
        (Node::Literal(l), Node::Literal(r)) => Node::Literal(op.apply(l, r)),
        (lhs, rhs) => Node::BinaryOp(op, Box::new(lhs), Box::new(rhs)),
    }
}
