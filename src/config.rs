// src/config.rs
use chrono::{DateTime, Local};

use crate::args::Args;
use crate::options::Demo;

/// Resolved run configuration, built from CLI args.
#[derive(Debug)]
pub struct Config {
    /// Demonstrations to run, already in canonical order.
    pub demos: Vec<Demo>,
    /// Print the CASE section headers.
    pub headers: bool,
    /// Pin the clock-dependent demonstrations to this instant.
    pub at: Option<DateTime<Local>>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // `--only` is a filter over the canonical order, so duplicates
        // collapse and flag order is irrelevant.
        let demos = if args.only.is_empty() {
            Demo::ALL.to_vec()
        } else {
            Demo::ALL
                .into_iter()
                .filter(|d| args.only.contains(d))
                .collect()
        };

        Self {
            demos,
            headers: !args.no_headers,
            at: args.at.map(|arg| arg.0),
        }
    }
}
