// src/demos/variables.rs
use std::io::{self, Write};

/// Declaration forms: inferred, multiple assignment with explicit
/// types, zero-value default, and shorthand.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    let a = "initial";
    writeln!(out, "{a}")?;

    // Two variables at once, explicitly typed.
    let (b, c): (i64, i64) = (1, 2);
    writeln!(out, "{b} {c}")?;

    // Inferred from the initializer.
    let d = true;
    writeln!(out, "{d}")?;

    // Declared without an initial value: the type's zero value.
    let e = i64::default();
    writeln!(out, "{e}")?;

    let f = "short";
    writeln!(out, "{f}")
}
