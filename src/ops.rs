// Licensed under MIT. See LICENSE for details.

use std::f64::consts::PI;
use std::fmt;

fn truth(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

// Prefix operators and one-argument functions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnaryFn {
    // -x
    Neg,
    // +x
    Plus,
    // !x
    Not,
    Abs,
    Acos,
    Acosh,
    Asin,
    Asinh,
    Atan,
    Atanh,
    Cbrt,
    Ceil,
    Cos,
    Cosh,
    Deg,
    Erf,
    Erfc,
    Exp,
    Exp2,
    Floor,
    IsInf,
    IsNan,
    Log,
    Log2,
    Log10,
    Rad,
    Round,
    Sgn,
    Sin,
    Sinh,
    Sqrt,
    Tan,
    Tanh,
    Tgamma,
}

const UNARY_FUNCTIONS: &[UnaryFn] = &[
    UnaryFn::Abs,
    UnaryFn::Acos,
    UnaryFn::Acosh,
    UnaryFn::Asin,
    UnaryFn::Asinh,
    UnaryFn::Atan,
    UnaryFn::Atanh,
    UnaryFn::Cbrt,
    UnaryFn::Ceil,
    UnaryFn::Cos,
    UnaryFn::Cosh,
    UnaryFn::Deg,
    UnaryFn::Erf,
    UnaryFn::Erfc,
    UnaryFn::Exp,
    UnaryFn::Exp2,
    UnaryFn::Floor,
    UnaryFn::IsInf,
    UnaryFn::IsNan,
    UnaryFn::Log,
    UnaryFn::Log2,
    UnaryFn::Log10,
    UnaryFn::Rad,
    UnaryFn::Round,
    UnaryFn::Sgn,
    UnaryFn::Sin,
    UnaryFn::Sinh,
    UnaryFn::Sqrt,
    UnaryFn::Tan,
    UnaryFn::Tanh,
    UnaryFn::Tgamma,
];

impl UnaryFn {
    /// Looks up a function that is written as `name(x)`.
    pub fn from_name(name: &str) -> Option<UnaryFn> {
        UNARY_FUNCTIONS.iter().cloned().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Neg => "-",
            UnaryFn::Plus => "+",
            UnaryFn::Not => "!",
            UnaryFn::Abs => "abs",
            UnaryFn::Acos => "acos",
            UnaryFn::Acosh => "acosh",
            UnaryFn::Asin => "asin",
            UnaryFn::Asinh => "asinh",
            UnaryFn::Atan => "atan",
            UnaryFn::Atanh => "atanh",
            UnaryFn::Cbrt => "cbrt",
            UnaryFn::Ceil => "ceil",
            UnaryFn::Cos => "cos",
            UnaryFn::Cosh => "cosh",
            UnaryFn::Deg => "deg",
            UnaryFn::Erf => "erf",
            UnaryFn::Erfc => "erfc",
            UnaryFn::Exp => "exp",
            UnaryFn::Exp2 => "exp2",
            UnaryFn::Floor => "floor",
            UnaryFn::IsInf => "isinf",
            UnaryFn::IsNan => "isnan",
            UnaryFn::Log => "log",
            UnaryFn::Log2 => "log2",
            UnaryFn::Log10 => "log10",
            UnaryFn::Rad => "rad",
            UnaryFn::Round => "round",
            UnaryFn::Sgn => "sgn",
            UnaryFn::Sin => "sin",
            UnaryFn::Sinh => "sinh",
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Tan => "tan",
            UnaryFn::Tanh => "tanh",
            UnaryFn::Tgamma => "tgamma",
        }
    }

    pub fn is_prefix(self) -> bool {
        match self {
            UnaryFn::Neg | UnaryFn::Plus | UnaryFn::Not => true,
            _ => false,
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryFn::Neg => -x,
            UnaryFn::Plus => x,
            UnaryFn::Not => truth(x == 0.0),
            UnaryFn::Abs => x.abs(),
            UnaryFn::Acos => x.acos(),
            UnaryFn::Acosh => x.acosh(),
            UnaryFn::Asin => x.asin(),
            UnaryFn::Asinh => x.asinh(),
            UnaryFn::Atan => x.atan(),
            UnaryFn::Atanh => x.atanh(),
            UnaryFn::Cbrt => x.cbrt(),
            UnaryFn::Ceil => x.ceil(),
            UnaryFn::Cos => x.cos(),
            UnaryFn::Cosh => x.cosh(),
            UnaryFn::Deg => x * 180.0 / PI,
            UnaryFn::Erf => libm::erf(x),
            UnaryFn::Erfc => libm::erfc(x),
            UnaryFn::Exp => x.exp(),
            UnaryFn::Exp2 => x.exp2(),
            UnaryFn::Floor => x.floor(),
            UnaryFn::IsInf => truth(x.is_infinite()),
            UnaryFn::IsNan => truth(x.is_nan()),
            UnaryFn::Log => x.ln(),
            UnaryFn::Log2 => x.log2(),
            UnaryFn::Log10 => x.log10(),
            UnaryFn::Rad => x * PI / 180.0,
            UnaryFn::Round => x.round(),
            // Zero and NaN have no sign.
            UnaryFn::Sgn => truth(0.0 < x) - truth(x < 0.0),
            UnaryFn::Sin => x.sin(),
            UnaryFn::Sinh => x.sinh(),
            UnaryFn::Sqrt => x.sqrt(),
            UnaryFn::Tan => x.tan(),
            UnaryFn::Tanh => x.tanh(),
            UnaryFn::Tgamma => libm::tgamma(x),
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Infix operators and two-argument functions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryFn {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    And,
    Or,
    Atan2,
    Max,
    Min,
}

impl BinaryFn {
    /// Looks up a function that is written as `name(x, y)`.
    pub fn from_name(name: &str) -> Option<BinaryFn> {
        match name {
            "atan2" => Some(BinaryFn::Atan2),
            "max" => Some(BinaryFn::Max),
            "min" => Some(BinaryFn::Min),
            "pow" => Some(BinaryFn::Pow),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryFn::Add => "+",
            BinaryFn::Sub => "-",
            BinaryFn::Mul => "*",
            BinaryFn::Div => "/",
            BinaryFn::Mod => "%",
            BinaryFn::Pow => "**",
            BinaryFn::Lt => "<",
            BinaryFn::Le => "<=",
            BinaryFn::Gt => ">",
            BinaryFn::Ge => ">=",
            BinaryFn::Eq => "==",
            BinaryFn::Ne => "!=",
            BinaryFn::And => "&&",
            BinaryFn::Or => "||",
            BinaryFn::Atan2 => "atan2",
            BinaryFn::Max => "max",
            BinaryFn::Min => "min",
        }
    }

    pub fn is_function(self) -> bool {
        match self {
            BinaryFn::Atan2 | BinaryFn::Max | BinaryFn::Min => true,
            _ => false,
        }
    }

    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            BinaryFn::Add => x + y,
            BinaryFn::Sub => x - y,
            BinaryFn::Mul => x * y,
            BinaryFn::Div => x / y,
            BinaryFn::Mod => x % y,
            BinaryFn::Pow => x.powf(y),
            BinaryFn::Lt => truth(x < y),
            BinaryFn::Le => truth(x <= y),
            BinaryFn::Gt => truth(x > y),
            BinaryFn::Ge => truth(x >= y),
            BinaryFn::Eq => truth(x == y),
            BinaryFn::Ne => truth(x != y),
            BinaryFn::And => truth(x != 0.0 && y != 0.0),
            BinaryFn::Or => truth(x != 0.0 || y != 0.0),
            BinaryFn::Atan2 => x.atan2(y),
            BinaryFn::Max => x.max(y),
            BinaryFn::Min => x.min(y),
        }
    }
}

impl fmt::Display for BinaryFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Conditionals.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TernaryFn {
    // c ? t : f
    Select,
}

impl TernaryFn {
    pub fn apply(self, cond: f64, t: f64, f: f64) -> f64 {
        match self {
            TernaryFn::Select => {
                if cond != 0.0 {
                    t
                } else {
                    f
                }
            }
        }
    }
}
