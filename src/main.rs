// src/main.rs
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use syntax_tour::args::Args;
use syntax_tour::config::Config;
use syntax_tour::demos;
use syntax_tour::options::Demo;

fn main() -> ExitCode {
    let args = Args::parse();

    if args.list {
        for demo in Demo::ALL {
            println!("{:<13} {}", demo.name(), demo.about());
        }
        return ExitCode::SUCCESS;
    }

    let config = Config::from(args);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = demos::run(&config, &mut out).and_then(|()| Ok(out.flush()?));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
