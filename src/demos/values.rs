// src/demos/values.rs
//! Strings, numbers, and booleans. The operands are deliberately
//! literal; the point is the operator, not the folded result.
#![allow(clippy::eq_op, clippy::nonminimal_bool, clippy::overly_complex_bool_expr)]

use std::io::{self, Write};

pub fn run(out: &mut impl Write) -> io::Result<()> {
    // Strings concatenate with `+` (owned left-hand side).
    let lang = String::from("go") + "lang";
    writeln!(out, "{lang}")?;

    // Integers and floats. Float division prints with the default
    // shortest-roundtrip representation, not fixed precision.
    writeln!(out, "1+1 = {}", 1 + 1)?;
    writeln!(out, "7.0/3.0 = {}", 7.0_f64 / 3.0)?;

    // Booleans, with the usual operators.
    writeln!(out, "{}", true && false)?;
    writeln!(out, "{}", true || false)?;
    writeln!(out, "{}", !true)
}

#[cfg(test)]
mod tests {
    use crate::demos::capture;

    #[test]
    fn prints_values_in_order() {
        let text = capture(super::run);
        assert_eq!(
            text,
            "golang\n1+1 = 2\n7.0/3.0 = 2.3333333333333335\nfalse\ntrue\nfalse\n"
        );
    }
}
