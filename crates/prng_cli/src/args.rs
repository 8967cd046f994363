//! Hand-rolled argument parsing.
//!
//! Options may appear anywhere; the first positional word is the command.

use std::path::PathBuf;
use std::str::FromStr;

use prngs::Algorithm;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTarget {
    Set(Algorithm),
    Mt,
}

impl FromStr for StreamTarget {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mt") || s.eq_ignore_ascii_case("mt19937") {
            return Ok(StreamTarget::Mt);
        }
        s.parse::<Algorithm>()
            .map(StreamTarget::Set)
            .map_err(|source| CliError::UnknownGenerator {
                name: s.to_string(),
                source,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Demo,
    Stream(StreamTarget),
    Range { min: i64, max: i64 },
    Snapshot,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub seed: Option<i64>,
    pub carry: Option<i64>,
    pub count: Option<usize>,
    pub json: bool,
    pub verbose: bool,
    pub command: Command,
}

pub fn usage() {
    eprintln!("prng-cli (LCG / BBS / MWC / xorshift / MT19937)");
    eprintln!("Usage: prng-cli [options] <command> [args]\n");
    eprintln!("Commands:");
    eprintln!("  demo                        Print every generator in turn (default seed 125)");
    eprintln!("  stream <lcg|bbs|mwc|xor|mt> Print values from one generator");
    eprintln!("  range <min> <max>           Print inclusive integer draws from the LCG");
    eprintln!("  snapshot                    Advance every generator, then dump state as JSON");
    eprintln!("  help                        Show this message\n");
    eprintln!("Options:");
    eprintln!("  --config <path>             JSON config (default: <config dir>/prngs/config.json)");
    eprintln!("  --seed <n>                  Seed for LCG, MWC and xorshift (default: clock)");
    eprintln!("  --carry <n>                 Initial MWC carry (default: 3)");
    eprintln!("  --count <n>                 Number of values or iterations");
    eprintln!("  --json                      One JSON object per line");
    eprintln!("  -v, --verbose               Debug logging on stderr");
}

pub fn parse<I>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut seed = None;
    let mut carry = None;
    let mut count = None;
    let mut json = false;
    let mut verbose = false;
    let mut positional: Vec<String> = Vec::new();

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(value(&mut it, &arg)?)),
            "--seed" => seed = Some(parse_value(&mut it, &arg)?),
            "--carry" => carry = Some(parse_value(&mut it, &arg)?),
            "--count" => count = Some(parse_value(&mut it, &arg)?),
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => positional.insert(0, "help".to_string()),
            s if s.starts_with('-') && s.len() > 1 && s.parse::<i64>().is_err() => {
                return Err(CliError::UnknownOption(s.to_string()));
            }
            _ => positional.push(arg),
        }
    }

    let command = parse_command(&positional)?;
    Ok(Args {
        config,
        seed,
        carry,
        count,
        json,
        verbose,
        command,
    })
}

fn parse_command(positional: &[String]) -> Result<Command, CliError> {
    let Some(name) = positional.first() else {
        return Ok(Command::Demo);
    };
    let rest = &positional[1..];

    match name.as_str() {
        "help" => Ok(Command::Help),
        "demo" => Ok(Command::Demo),
        "snapshot" => Ok(Command::Snapshot),
        "stream" => match rest {
            [target] => Ok(Command::Stream(target.parse()?)),
            _ => Err(CliError::Usage("stream <lcg|bbs|mwc|xor|mt>")),
        },
        "range" => match rest {
            [min, max] => Ok(Command::Range {
                min: parse_number("min", min)?,
                max: parse_number("max", max)?,
            }),
            _ => Err(CliError::Usage("range <min> <max>")),
        },
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn value<I: Iterator<Item = String>>(it: &mut I, flag: &str) -> Result<String, CliError> {
    it.next().ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

fn parse_value<T: FromStr, I: Iterator<Item = String>>(
    it: &mut I,
    flag: &str,
) -> Result<T, CliError> {
    let raw = value(it, flag)?;
    parse_number(flag, &raw)
}

fn parse_number<T: FromStr>(flag: &str, raw: &str) -> Result<T, CliError> {
    raw.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value: raw.to_string(),
    })
}
