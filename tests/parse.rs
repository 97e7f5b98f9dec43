// Licensed under MIT. See LICENSE for details.

use std::thread;

use rmatheval::parser::{parse, MAX_NESTING};
use rmatheval::{Node, ParseError};

fn render(input: &str) -> String {
    match parse(input) {
        Ok(node) => node.to_string(),
        Err(e) => panic!("parsing {:?} failed: {}", input, e),
    }
}

#[test]
fn test_parse_precedence() {
    assert_eq!(render("2 + 3 * 4"), "(2 + (3 * 4))");
    assert_eq!(render("(2 + 3) * 4"), "((2 + 3) * 4)");
    assert_eq!(render("a - b - c"), "(a - b - c)");
    assert_eq!(render("a * b + c * d"), "((a * b) + (c * d))");
    assert_eq!(render("2 ** 3 ** 2"), "(2 ** (3 ** 2))");
    assert_eq!(render("-x ** 2"), "(-x ** 2)");
    assert_eq!(render("a + b < c && d"), "(((a + b) < c) && d)");
    assert_eq!(render("a || b == c"), "(a || (b == c))");
    assert_eq!(render("x > 0 ? x : -x"), "((x > 0) ? x : -x)");
}

#[test]
fn test_parse_functions() {
    assert_eq!(render("sin(x) + cos(y)"), "(sin(x) + cos(y))");
    assert_eq!(render("atan2(y, x)"), "atan2(y, x)");
    assert_eq!(render("pow(2, 10)"), "(2 ** 10)");
    assert_eq!(render("min(max(a, 0), 1)"), "min(max(a, 0), 1)");
    assert_eq!(render("sqrt(abs(x - 1))"), "sqrt(abs((x - 1)))");
    assert_eq!(render("tgamma(erfc(x) + erf(y))"), "tgamma((erfc(x) + erf(y)))");
}

#[test]
fn test_parse_constants() {
    assert_eq!(render("2 * pi"), format!("(2 * {})", std::f64::consts::PI));
    assert_eq!(render("pie"), "pie");
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse(""), Err(ParseError::Invalid));
    assert_eq!(parse("sin()"), Err(ParseError::Trailing { offset: 3, rest: "()".to_string() }));
    assert_eq!(parse("1 ? 2"), Err(ParseError::Trailing { offset: 2, rest: "? 2".to_string() }));
    assert_eq!(parse("max(1)"), Err(ParseError::Trailing { offset: 3, rest: "(1)".to_string() }));
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

// Runs `f` on a thread with the default 2 MiB test stack.
fn on_small_stack<F, T>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(f)
        .expect("spawn parser thread")
        .join()
        .expect("parser thread panicked")
}

#[test]
fn test_parse_nesting_limit() {
    let ok = on_small_stack(|| parse(&nested(MAX_NESTING)));
    assert_eq!(ok, Ok(Node::Literal(1.0)));

    let too_deep = Err(ParseError::TooDeep { limit: MAX_NESTING });
    assert_eq!(on_small_stack(|| parse(&nested(MAX_NESTING + 1))), too_deep);
    assert_eq!(on_small_stack(|| parse(&nested(10_000))), too_deep);
    assert_eq!(on_small_stack(|| parse(&format!("{}x", "!".repeat(500)))), too_deep);
    assert_eq!(on_small_stack(|| parse(&format!("{}2", "2 ** ".repeat(100)))), too_deep);

    // Long flat expressions are not nested.
    let flat = on_small_stack(|| parse(&format!("{}1", "x ** 2 - -1 + ".repeat(200))));
    assert!(flat.is_ok());
}

#[test]
fn test_parse_reads_back_folded_infinities() {
    for input in &["1 / 0", "-1 / 0", "0 / 0", "x + 1 / 0"] {
        let folded = parse(input).expect("parse").fold();
        let reread = parse(&folded.to_string()).expect("reparse").fold();
        assert_eq!(reread.to_string(), folded.to_string());
        assert!(reread.variables().iter().all(|id| id == "x"));
    }
}
