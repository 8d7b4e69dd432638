//! `base45` — encode stdin to base45 or decode base45 from stdin.
//!
//! Usage:
//!   base45 <encode|decode> [--url-safe] [--input <FILE>] [--output <FILE>]

use std::fs;
use std::io::{self, Read, Write};

use base45_cli::{parse_args, run, CliError, Command, Options, USAGE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(e) = execute(&options) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn execute(options: &Options) -> Result<(), CliError> {
    let input = match &options.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let output = run(options, &input)?;

    match &options.output {
        Some(path) => fs::write(path, output)?,
        None => io::stdout().write_all(&output)?,
    }
    Ok(())
}
