// src/demos/conditionals.rs
use std::io::{self, Write};

pub fn run(out: &mut impl Write) -> io::Result<()> {
    let eight = 8;

    if eight % 2 == 0 {
        writeln!(out, "{eight} is even")?;
    } else {
        writeln!(out, "{eight} is odd")?;
    }

    // `if` without an `else`.
    if eight % 4 == 0 {
        writeln!(out, "{eight} is divisible by 4")?;
    }

    // A binding preceding the conditional, visible to all branches.
    let num = -3;
    if num < 0 {
        writeln!(out, "{num} is negative")?;
    } else if num < 10 {
        writeln!(out, "{num} has 1 digit")?;
    } else {
        writeln!(out, "{num} has multiple digits")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::demos::capture;

    #[test]
    fn classifies_eight_and_negative_three() {
        assert_eq!(
            capture(super::run),
            "8 is even\n8 is divisible by 4\n-3 is negative\n"
        );
    }
}
