// src/lib.rs
pub mod args;
pub mod clock;
pub mod config;
pub mod demos;
pub mod error;
pub mod options;
pub mod parsers;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
