//! prng-cli: drive the generators from the command line.
//!
//! Examples:
//!   prng-cli demo
//!   prng-cli --seed 125 --count 10 stream mwc
//!   prng-cli --json stream mt
//!   prng-cli --count 20 range 1 6
//!   prng-cli --seed 125 --count 1000 snapshot
//!
//! Values go to stdout; logs go to stderr.

use std::io;
use std::process;

use prngs::clock::SystemClock;
use tracing::Level;

mod args;
mod commands;
mod config;
mod error;
mod output;

use args::{Args, Command};
use config::{CliConfig, Settings};
use error::CliError;
use output::Printer;

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    if args.command == Command::Help {
        args::usage();
        return Ok(());
    }

    let cfg = CliConfig::load(args.config.as_deref())?;
    let settings = Settings::resolve(&args, &cfg);

    let stdout = io::stdout();
    let mut out = Printer::new(stdout.lock(), settings.json);
    let clock = SystemClock;

    match args.command {
        Command::Demo => commands::demo(&settings, &clock, &mut out),
        Command::Stream(target) => commands::stream(&settings, target, &clock, &mut out),
        Command::Range { min, max } => commands::range(&settings, min, max, &clock, &mut out),
        Command::Snapshot => commands::snapshot(&settings, &clock, &mut out),
        Command::Help => Ok(()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = match args::parse(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {}", e);
            args::usage();
            process::exit(2);
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        if e.is_usage() {
            process::exit(2);
        }
        return Err(e.into());
    }
    Ok(())
}
