// src/demos/loops.rs
use std::io::{self, Write};

/// The four loop forms: condition-only, counted, infinite-with-break,
/// and skip-by-parity.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    let mut i = 1;
    while i <= 3 {
        writeln!(out, "{i}")?;
        i += 1;
    }

    for j in 7..=9 {
        writeln!(out, "{j}")?;
    }

    loop {
        writeln!(out, "loop")?;
        break;
    }

    for n in 0..=5 {
        if n % 2 == 0 {
            continue;
        }
        writeln!(out, "{n}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::demos::capture;

    #[test]
    fn prints_each_loop_form() {
        assert_eq!(capture(super::run), "1\n2\n3\n7\n8\n9\nloop\n1\n3\n5\n");
    }
}
