// src/demos/switches.rs
use std::fmt;
use std::io::{self, Write};

use chrono::{Datelike, Timelike, Weekday};

use crate::clock::Clock;

/// Closed variant type standing in for a dynamically-typed value.
/// `Str` doubles as the "unknown" fallback case of the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl Value {
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "i64",
            Self::Str(_) => "str",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => b.fmt(f),
            Self::Int(n) => n.fmt(f),
            Self::Str(s) => s.fmt(f),
        }
    }
}

pub fn run(out: &mut impl Write, clock: &dyn Clock) -> io::Result<()> {
    // Value-based branch over an integer.
    let k = 2;
    let spelled = match k {
        1 => "one",
        2 => "two",
        3 => "three",
        _ => "?",
    };
    writeln!(out, "Write {k} as {spelled}")?;

    // Weekend vs weekday, off the injected clock.
    match clock.now().weekday() {
        Weekday::Sat | Weekday::Sun => writeln!(out, "It's the weekend")?,
        _ => writeln!(out, "It's a weekday")?,
    }

    // Branch with no discriminant: a guard chain over the hour.
    match clock.now().hour() {
        h if h < 12 => writeln!(out, "It's before noon")?,
        _ => writeln!(out, "It's after noon")?,
    }

    // Branch over the variant, with `Str` as the unknown fallback.
    let mut what_am_i = |value: Value| match value {
        Value::Bool(b) => writeln!(out, "I'm a bool {b}"),
        Value::Int(n) => writeln!(out, "I'm an int {n}"),
        other => writeln!(out, "Don't know type {} {}", other.type_name(), other),
    };
    what_am_i(Value::Bool(true))?;
    what_am_i(Value::Int(1))?;
    what_am_i(Value::Str("hey"))?;

    Ok(())
}
