// src/demos/hello.rs
use std::io::{self, Write};

pub fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "hello world")
}
