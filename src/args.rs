// src/args.rs
use clap::Parser;

use crate::options::Demo;
use crate::parsers::DateTimeArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "syntax_tour",
    version = crate::VERSION,
    about = "Guided tour of basic language syntax, printed as an ordered run of demonstrations"
)]
pub struct Args {
    /// Run only the named demonstrations (comma separated or repeated).
    /// They always run in canonical order, not flag order.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub only: Vec<Demo>,

    /// List the demonstrations and exit
    #[arg(long)]
    pub list: bool,

    /// Suppress the CASE section headers
    #[arg(long)]
    pub no_headers: bool,

    /// Evaluate the clock-dependent demonstrations at a fixed instant
    /// (RFC 3339, "YYYY-MM-DD HH:MM:SS", or "YYYY-MM-DD")
    #[arg(long, value_name = "DATETIME")]
    pub at: Option<DateTimeArg>,
}
