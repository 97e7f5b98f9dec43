// Licensed under MIT. See LICENSE for details.

use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::bindings::Bindings;
use crate::error::EvalError;
use crate::ops::{BinaryFn, TernaryFn, UnaryFn};
use crate::{eval, fold, vars};

pub type Ident = String;

// AST node types.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    // [no children]
    Empty,
    // 3.14
    // [no children]
    Literal(f64),
    // x
    // [no children]
    Identifier(Ident),
    // -x, sqrt(x)
    // [one child]
    UnaryOp(UnaryFn, Box<Node>),
    // x ** y, max(x, y)
    // [two children]
    BinaryOp(BinaryFn, Box<Node>, Box<Node>),
    // c ? t : f
    // [three children]
    TernaryOp(TernaryFn, Box<Node>, Box<Node>, Box<Node>),
    // a + b - c
    // [head, then one child per step]
    Chain(Box<Node>, Vec<(BinaryFn, Node)>),
}

impl Node {
    pub fn is_literal(&self) -> bool {
        match *self {
            Node::Literal(_) => true,
            _ => false,
        }
    }

    /// Returns a copy of this tree with every constant subtree evaluated.
    pub fn fold(&self) -> Node {
        fold::fold(self)
    }

    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64, EvalError> {
        eval::evaluate(self, bindings)
    }

    /// Names of all variables referenced anywhere in this tree.
    pub fn variables(&self) -> BTreeSet<Ident> {
        vars::variables(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Node::Empty => write!(f, "nil"),
            // inf and NaN are written as the divisions that produce them,
            // so the output still parses as a constant.
            Node::Literal(n) if n.is_nan() => write!(f, "(0 / 0)"),
            Node::Literal(n) if n.is_infinite() => {
                write!(f, "({} / 0)", if n > 0.0 { "1" } else { "-1" })
            }
            Node::Literal(n) => write!(f, "{}", n),
            Node::Identifier(ref id) => write!(f, "{}", id),
            Node::UnaryOp(op, ref rhs) => {
                if op.is_prefix() {
                    write!(f, "{}{}", op, rhs)
                } else {
                    write!(f, "{}({})", op, rhs)
                }
            }
            Node::BinaryOp(op, ref lhs, ref rhs) => {
                if op.is_function() {
                    write!(f, "{}({}, {})", op, lhs, rhs)
                } else {
                    write!(f, "({} {} {})", lhs, op, rhs)
                }
            }
            Node::TernaryOp(_, ref cond, ref t, ref e) => write!(f, "({} ? {} : {})", cond, t, e),
            Node::Chain(ref head, ref steps) => {
                let rest = steps
                    .iter()
                    .map(|&(op, ref rhs)| format!("{} {}", op, rhs))
                    .join(" ");
                write!(f, "({} {})", head, rest)
            }
        }
    }
}
