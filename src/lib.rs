// Licensed under MIT. See LICENSE for details.

//! Arithmetic expression trees: constant folding, evaluation against a table
//! of variable bindings, and free-variable discovery.
//!
//! ```
//! use rmatheval::bindings::Bindings;
//! use rmatheval::parser::parse;
//!
//! let expr = parse("x * (1 + 2)").unwrap();
//! let bindings = Bindings::new().extend("x".to_string(), 2.0);
//! assert_eq!(expr.fold().to_string(), "(x * 3)");
//! assert_eq!(expr.evaluate(&bindings), Ok(6.0));
//! ```

#[macro_use]
extern crate nom;

pub mod bindings;
pub mod error;
pub mod eval;
pub mod fold;
pub mod ops;
pub mod parser;
pub mod types;
pub mod vars;

pub use crate::bindings::Bindings;
pub use crate::error::{EvalError, ParseError};
pub use crate::types::{Ident, Node};
