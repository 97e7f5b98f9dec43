// Licensed under MIT. See LICENSE for details.

use std::collections::BTreeSet;

use crate::types::{Ident, Node};

/// Collects the distinct variable names referenced anywhere in `node`.
///
/// # Panics
///
/// Panics if the tree contains `Node::Empty`.
pub fn variables(node: &Node) -> BTreeSet<Ident> {
    let mut vars = BTreeSet::new();
    collect(node, &mut vars);
    vars
}

fn collect(node: &Node, vars: &mut BTreeSet<Ident>) {
    match *node {
        Node::Empty => panic!("empty node reached the variable finder"),
        Node::Literal(_) => {}
        Node::Identifier(ref id) => {
            vars.insert(id.clone());
        }
        Node::UnaryOp(_, ref rhs) => collect(rhs, vars),
        Node::BinaryOp(_, ref lhs, ref rhs) => {
            collect(lhs, vars);
            collect(rhs, vars);
        }
        Node::TernaryOp(_, ref cond, ref t, ref f) => {
            collect(cond, vars);
            collect(t, vars);
            collect(f, vars);
        }
        Node::Chain(ref head, ref steps) => {
            collect(head, vars);
            for &(_, ref rhs) in steps {
                collect(rhs, vars);
            }
        }
    }
}
