// Licensed under MIT. See LICENSE for details.

use std::f64::consts::{E, PI};
use std::str::from_utf8;

use log::debug;
use nom::{IResult, digit, multispace};

use crate::error::ParseError;
use crate::ops::{BinaryFn, TernaryFn, UnaryFn};
use crate::types::Node;

const PHI: f64 = 1.618_033_988_749_894_8;

fn constant(id: &str) -> Option<f64> {
    match id {
        "e" => Some(E),
        "epsilon" => Some(::std::f64::EPSILON),
        "phi" => Some(PHI),
        "pi" => Some(PI),
        _ => None,
    }
}

// A run of same-precedence operators, or just the operand without any.
fn chain(head: Node, steps: Vec<(BinaryFn, Node)>) -> Node {
    if steps.is_empty() {
        head
    } else {
        Node::Chain(Box::new(head), steps)
    }
}

fn ternary(cond: Node, branches: Option<(Node, Node)>) -> Node {
    match branches {
        Some((t, f)) => Node::TernaryOp(TernaryFn::Select, Box::new(cond), Box::new(t), Box::new(f)),
        None => cond,
    }
}

fn power(base: Node, exponent: Option<Node>) -> Node {
    match exponent {
        Some(exp) => Node::BinaryOp(BinaryFn::Pow, Box::new(base), Box::new(exp)),
        None => base,
    }
}

fn word(id: &str) -> Node {
    match constant(id) {
        Some(val) => Node::Literal(val),
        None => Node::Identifier(id.to_string()),
    }
}

// Spaces, tabs, and newlines.
named!(blanks, complete!(multispace));

named!(
    number<Node>,
    complete!(map!(
        map_res!(
            map_res!(
                recognize!(tuple!(
                    digit,
                    opt!(complete!(preceded!(tag!("."), opt!(complete!(digit))))),
                    opt!(complete!(tuple!(
                        one_of!("eE"),
                        opt!(complete!(one_of!("+-"))),
                        digit
                    )))
                )),
                from_utf8
            ),
            |x: &str| x.parse::<f64>()
        ),
        |n| Node::Literal(n)
    ))
);

fn name<'a>(input: &'a [u8]) -> IResult<&'a [u8], &'a str> {
    complete!(
        input,
        map_res!(
            recognize!(pair!(
                one_of!("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_"),
                many0!(complete!(one_of!(
                    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890_"
                )))
            )),
            from_utf8
        )
    )
}

named!(identifier<Node>, complete!(map!(name, word)));

named!(
    parens<Node>,
    complete!(do_parse!(
        tag!("(") >> opt!(blanks) >> e: expression >> opt!(blanks) >> tag!(")") >> (e)
    ))
);

// sin(x)
named!(
    unary_call<Node>,
    complete!(do_parse!(
        op: map_opt!(name, UnaryFn::from_name) >>
        opt!(blanks) >>
        tag!("(") >>
        opt!(blanks) >>
        arg: expression >>
        opt!(blanks) >>
        tag!(")") >>
        (Node::UnaryOp(op, Box::new(arg)))
    ))
);

// max(x, y)
named!(
    binary_call<Node>,
    complete!(do_parse!(
        op: map_opt!(name, BinaryFn::from_name) >>
        opt!(blanks) >>
        tag!("(") >>
        opt!(blanks) >>
        lhs: expression >>
        opt!(blanks) >>
        tag!(",") >>
        opt!(blanks) >>
        rhs: expression >>
        opt!(blanks) >>
        tag!(")") >>
        (Node::BinaryOp(op, Box::new(lhs), Box::new(rhs)))
    ))
);

// -x, +x, !x
named!(
    prefix<Node>,
    complete!(do_parse!(
        op: alt!(
            value!(UnaryFn::Neg, tag!("-")) |
            value!(UnaryFn::Plus, tag!("+")) |
            value!(UnaryFn::Not, tag!("!"))
        ) >>
        opt!(blanks) >>
        rhs: primary >>
        (Node::UnaryOp(op, Box::new(rhs)))
    ))
);

named!(
    primary<Node>,
    alt!(number | parens | binary_call | unary_call | prefix | identifier)
);

// x ** y ** z is x ** (y ** z).
named!(
    factor<Node>,
    do_parse!(
        base: primary >>
        exp: opt!(complete!(do_parse!(
            opt!(blanks) >> tag!("**") >> opt!(blanks) >> e: factor >> (e)
        ))) >>
        (power(base, exp))
    )
);

named!(
    multiplicative<Node>,
    do_parse!(
        head: factor >>
        rest: many0!(complete!(do_parse!(
            opt!(blanks) >>
            op: alt!(
                value!(BinaryFn::Mul, complete!(tag!("*"))) |
                value!(BinaryFn::Div, complete!(tag!("/"))) |
                value!(BinaryFn::Mod, complete!(tag!("%")))
            ) >>
            opt!(blanks) >>
            rhs: factor >>
            (op, rhs)
        ))) >>
        (chain(head, rest))
    )
);

named!(
    additive<Node>,
    do_parse!(
        head: multiplicative >>
        rest: many0!(complete!(do_parse!(
            opt!(blanks) >>
            op: alt!(
                value!(BinaryFn::Add, complete!(tag!("+"))) |
                value!(BinaryFn::Sub, complete!(tag!("-")))
            ) >>
            opt!(blanks) >>
            rhs: multiplicative >>
            (op, rhs)
        ))) >>
        (chain(head, rest))
    )
);

named!(
    relational<Node>,
    do_parse!(
        head: additive >>
        rest: many0!(complete!(do_parse!(
            opt!(blanks) >>
            op: alt!(
                value!(BinaryFn::Le, complete!(tag!("<="))) |
                value!(BinaryFn::Ge, complete!(tag!(">="))) |
                value!(BinaryFn::Lt, complete!(tag!("<"))) |
                value!(BinaryFn::Gt, complete!(tag!(">")))
            ) >>
            opt!(blanks) >>
            rhs: additive >>
            (op, rhs)
        ))) >>
        (chain(head, rest))
    )
);

named!(
    equality<Node>,
    do_parse!(
        head: relational >>
        rest: many0!(complete!(do_parse!(
            opt!(blanks) >>
            op: alt!(
                value!(BinaryFn::Eq, complete!(tag!("=="))) |
                value!(BinaryFn::Ne, complete!(tag!("!=")))
            ) >>
            opt!(blanks) >>
            rhs: relational >>
            (op, rhs)
        ))) >>
        (chain(head, rest))
    )
);

named!(
    logical<Node>,
    do_parse!(
        head: equality >>
        rest: many0!(complete!(do_parse!(
            opt!(blanks) >>
            op: alt!(
                value!(BinaryFn::And, complete!(tag!("&&"))) |
                value!(BinaryFn::Or, complete!(tag!("||")))
            ) >>
            opt!(blanks) >>
            rhs: equality >>
            (op, rhs)
        ))) >>
        (chain(head, rest))
    )
);

named!(
    pub expression<Node>,
    do_parse!(
        cond: logical >>
        branches: opt!(complete!(do_parse!(
            opt!(blanks) >>
            tag!("?") >>
            opt!(blanks) >>
            t: expression >>
            opt!(blanks) >>
            tag!(":") >>
            opt!(blanks) >>
            f: expression >>
            (t, f)
        ))) >>
        (ternary(cond, branches))
    )
);

named!(
    statement<Node>,
    delimited!(opt!(blanks), expression, opt!(blanks))
);

/// Deepest nesting `parse` accepts, counting parentheses, prefix operators,
/// `?` and `**`.
pub const MAX_NESTING: usize = 32;

// An upper bound on how deep the grammar recurses for `input`. Parentheses
// and prefix operators nest until their operand ends, `**` until the next
// other operator, and `?` until the enclosing group closes.
fn nesting(input: &[u8]) -> usize {
    let mut groups = Vec::new();
    let (mut base, mut pow, mut prefix) = (0usize, 0usize, 0usize);
    let mut operand = false;
    let mut deepest = 0usize;

    let mut i = 0;
    while i < input.len() {
        match input[i] {
            b'(' => {
                groups.push((base, pow));
                base += pow + prefix + 1;
                pow = 0;
                prefix = 0;
                operand = false;
            }
            b')' => {
                let (b, p) = groups.pop().unwrap_or((0, 0));
                base = b;
                pow = p;
                prefix = 0;
                operand = true;
            }
            b'*' if input.get(i + 1) == Some(&b'*') => {
                pow += 1;
                operand = false;
                i += 1;
            }
            b'?' => {
                base += 1;
                pow = 0;
                operand = false;
            }
            b'-' | b'+' | b'!' if !operand => prefix += 1,
            b' ' | b'\t' | b'\r' | b'\n' => {}
            b if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' => {
                prefix = 0;
                operand = true;
            }
            _ => {
                pow = 0;
                operand = false;
            }
        }
        deepest = deepest.max(base + pow + prefix);
        i += 1;
    }
    deepest
}

/// Parses a whole expression such as `x * (y + 2)`.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    if nesting(input.as_bytes()) > MAX_NESTING {
        debug!("rejected {:?}: nested too deeply", input);
        return Err(ParseError::TooDeep { limit: MAX_NESTING });
    }

    match statement(input.as_bytes()) {
        IResult::Done(rest, node) => {
            if rest.is_empty() {
                debug!("parsed {:?} as {}", input, node);
                Ok(node)
            } else {
                let offset = input.len() - rest.len();
                Err(ParseError::Trailing {
                    offset,
                    rest: String::from_utf8_lossy(rest).into_owned(),
                })
            }
        }
        _ => Err(ParseError::Invalid),
    }
}
