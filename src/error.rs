// Licensed under MIT. See LICENSE for details.

use thiserror::Error;

use crate::types::Ident;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("unknown variable {0}")]
    UnknownVariable(Ident),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("not a valid expression")]
    Invalid,
    #[error("unexpected input at offset {offset}: {rest:?}")]
    Trailing { offset: usize, rest: String },
    #[error("expression is nested more than {limit} levels deep")]
    TooDeep { limit: usize },
}
