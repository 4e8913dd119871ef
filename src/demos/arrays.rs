// src/demos/arrays.rs
// The counted index loops are the demonstration here.
#![allow(clippy::needless_range_loop)]

use std::io::{self, Write};

pub fn run(out: &mut impl Write) -> io::Result<()> {
    // Zero-valued on declaration.
    let mut a = [0_i64; 5];
    writeln!(out, "emp: {a:?}")?;

    a[4] = 100;
    writeln!(out, "set: {a:?}")?;
    writeln!(out, "get: {}", a[4])?;
    writeln!(out, "len: {}", a.len())?;

    let p = [1_i64, 2, 3, 4, 5];
    writeln!(out, "dcl: {p:?}")?;

    // Arrays compose into a 2x3 grid; each cell holds the sum of its
    // row and column indices.
    let mut two_d = [[0_i64; 3]; 2];
    for i in 0..2 {
        for j in 0..3 {
            two_d[i][j] = (i + j) as i64;
        }
    }
    writeln!(out, "2d: {two_d:?}")
}
