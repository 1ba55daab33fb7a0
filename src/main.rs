//! CLI entry point for `boolcalc`.
//!
//! Reads declarations and an expression from standard input and prints
//! `True`, `False` or `[error]`.

use std::io::{self, Write};

fn main() {
    let outcome = boolcalc::run(io::stdin().lock());
    let _ = writeln!(io::stdout(), "{}", boolcalc::render(&outcome));
}
