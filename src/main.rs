// Licensed under MIT. See LICENSE for details.

use std::process;

use clap::Parser;
use itertools::Itertools;

use rmatheval::parser::parse;
use rmatheval::{Bindings, Ident};

/// Evaluates an arithmetic expression such as "x * (y + 2)".
#[derive(Parser, Debug)]
#[command(name = "matheval", version, about, long_about = None)]
struct Args {
    /// Print the expression after constant folding.
    #[arg(long)]
    fold: bool,

    /// Print the variables the expression depends on.
    #[arg(long)]
    vars: bool,

    expression: String,

    /// Variable bindings, e.g. x=1.5
    #[arg(value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(Ident, f64)>,
}

fn parse_binding(s: &str) -> Result<(Ident, f64), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid binding {:?}: expected NAME=VALUE", s))?;
    let name = s[..pos].trim();
    if name.is_empty() {
        return Err(format!("invalid binding {:?}: empty name", s));
    }
    let value = s[pos + 1..]
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value in {:?}: {}", s, e))?;
    Ok((name.to_string(), value))
}

fn main() {
    let args = Args::parse();

    let expr = parse(&args.expression).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    if args.fold {
        println!("{}", expr.fold());
    }

    if args.vars {
        println!("{}", expr.variables().iter().join(", "));
    }

    let bindings: Bindings = args.bindings.into_iter().collect();
    match expr.evaluate(&bindings) {
        Ok(val) => println!("{}", val),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
