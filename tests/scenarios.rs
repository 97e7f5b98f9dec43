// Licensed under MIT. See LICENSE for details.

use std::collections::BTreeSet;

use rmatheval::ops::{BinaryFn, TernaryFn};
use rmatheval::parser::parse;
use rmatheval::{Bindings, EvalError, Node};

fn expr(input: &str) -> Node {
    parse(input).expect("expression must parse")
}

fn bindings(vars: &[(&str, f64)]) -> Bindings {
    vars.iter().map(|&(id, v)| (id.to_string(), v)).collect()
}

fn names(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn test_constant_expression_folds_to_literal() {
    let tree = expr("2 + 3 * 4");
    assert_eq!(tree.fold(), Node::Literal(14.0));
    assert_eq!(tree.evaluate(&Bindings::new()), Ok(14.0));
}

#[test]
fn test_evaluate_with_bindings() {
    let tree = expr("x + y");
    assert_eq!(tree.evaluate(&bindings(&[("x", 1.0), ("y", 2.0)])), Ok(3.0));
}

#[test]
fn test_unknown_variable() {
    let tree = expr("x + 1");
    assert_eq!(
        tree.evaluate(&Bindings::new()),
        Err(EvalError::UnknownVariable("x".to_string()))
    );
    assert_eq!(
        tree.evaluate(&Bindings::new()).unwrap_err().to_string(),
        "unknown variable x"
    );
}

#[test]
fn test_free_variables() {
    assert_eq!(expr("x").variables(), names(&["x"]));
    assert_eq!(expr("x + y * z").variables(), names(&["x", "y", "z"]));
    assert_eq!(expr("t * t + 2 * t + 1").variables(), names(&["t"]));
    assert_eq!(expr("t * e * rafik + 1").variables(), names(&["rafik", "t"]));
    assert_eq!(expr("2 * pi").variables(), names(&[]));
}

#[test]
fn test_ternary_folds_both_branches() {
    assert_eq!(expr("1 < 2 ? 3 : 4").fold(), Node::Literal(3.0));
    assert_eq!(expr("1 > 2 ? 3 : 4").fold(), Node::Literal(4.0));

    // With an unknown condition both branches are still reduced.
    let folded = expr("c ? 1 + 2 : 2 * 2").fold();
    let expected = Node::TernaryOp(
        TernaryFn::Select,
        Box::new(Node::Identifier("c".to_string())),
        Box::new(Node::Literal(3.0)),
        Box::new(Node::Literal(4.0)),
    );
    assert_eq!(folded, expected);
}

#[test]
fn test_chain_is_a_left_fold() {
    let b = bindings(&[("a", 2.0), ("b", 3.0), ("c", 4.0)]);
    assert_eq!(expr("a - b - c").evaluate(&b), Ok(-5.0));
    assert_eq!(expr("c / a / a").evaluate(&b), Ok(1.0));
    assert_eq!(expr("a ** b ** a").evaluate(&b), Ok(512.0));
    assert_eq!(expr("10 - 4 - 3").fold(), Node::Literal(3.0));
}

#[test]
fn test_partial_folding() {
    let folded = expr("x * (1 + 2) - 4 / 2").fold();
    assert_eq!(folded.to_string(), "((x * 3) - 2)");

    let expected = Node::BinaryOp(
        BinaryFn::Sub,
        Box::new(Node::BinaryOp(
            BinaryFn::Mul,
            Box::new(Node::Identifier("x".to_string())),
            Box::new(Node::Literal(3.0)),
        )),
        Box::new(Node::Literal(2.0)),
    );
    assert_eq!(folded, expected);
    assert_eq!(folded.fold(), folded);
}

#[test]
fn test_functions_and_logic() {
    let b = bindings(&[("x", -9.0)]);
    assert_eq!(expr("sqrt(abs(x))").evaluate(&b), Ok(3.0));
    assert_eq!(expr("max(x, 0) + min(x, 0)").evaluate(&b), Ok(-9.0));
    assert_eq!(expr("x < 0 && !(x == 0)").evaluate(&b), Ok(1.0));
    assert_eq!(expr("x > 0 || 0").evaluate(&b), Ok(0.0));
    assert_eq!(expr("7 % 4").fold(), Node::Literal(3.0));
    assert_eq!(expr("sgn(x) * round(2.5)").evaluate(&b), Ok(-3.0));
}

#[test]
fn test_shared_tree_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let tree = Arc::new(expr("x * x + 1"));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || tree.evaluate(&bindings(&[("x", f64::from(i))])))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("evaluation thread panicked"))
        .collect();
    assert_eq!(results, vec![Ok(1.0), Ok(2.0), Ok(5.0), Ok(10.0)]);
}
