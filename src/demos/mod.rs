// src/demos/mod.rs
pub mod arrays;
pub mod conditionals;
pub mod constants;
pub mod hello;
pub mod loops;
pub mod switches;
pub mod values;
pub mod variables;

use std::io::Write;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::options::Demo;

/// Run the configured demonstrations in canonical order, writing every
/// line to `out`. Section headers (preceded by a blank line) come from
/// `Demo::header`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let clock: Box<dyn Clock> = match config.at {
        Some(instant) => Box::new(FixedClock(instant)),
        None => Box::new(SystemClock),
    };

    for demo in &config.demos {
        if config.headers
            && let Some(header) = demo.header()
        {
            writeln!(out)?;
            writeln!(out, "{header}")?;
        }

        match demo {
            Demo::Hello => hello::run(out)?,
            Demo::Values => values::run(out)?,
            Demo::Variables => variables::run(out)?,
            Demo::Constants => constants::run(out)?,
            Demo::Loops => loops::run(out)?,
            Demo::Conditionals => conditionals::run(out)?,
            Demo::Switches => switches::run(out, clock.as_ref())?,
            Demo::Arrays => arrays::run(out)?,
        }
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn capture(run: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buf = Vec::new();
    run(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
