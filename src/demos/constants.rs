// src/demos/constants.rs
use std::io::{self, Write};

pub const S: &str = "constant";

const N: i64 = 500_000_000;

/// 3e20 does not fit in 64 bits, so the derived constant is computed
/// in 128-bit integer space and narrowed afterwards. The quotient is
/// exact (6e11), so the truncating narrow loses nothing.
const M_WIDE: i128 = 300_000_000_000_000_000_000 / N as i128;
const M: i64 = M_WIDE as i64;

pub fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "S =  {S}")?;
    writeln!(out, "M =  {M_WIDE}")?;
    writeln!(out, "M int64 =  {M}")?;
    // The integer constant widens to f64 at the call site.
    writeln!(out, "N math =  {}", (N as f64).sin())
}
