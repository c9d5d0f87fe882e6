//! pesel-check - batch validation of PESEL numbers or surnames.
//!
//! ```text
//! pesel-check [--name] [VALUE ...]
//! ```
//!
//! Values come from the command line, or one per line on stdin when none are
//! given. Every value gets a `valid` / `invalid (reason)` line on stdout; the
//! exit code is 1 if anything failed.

use std::{
    env,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use pesel_validate::{ValidationResult, validate_identity_number, validate_name};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const USAGE: &str = "usage: pesel-check [--name] [VALUE ...]\n\
\n\
Validates PESEL numbers (default) or surnames (--name).\n\
Reads one value per line from stdin when no VALUE is given.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Pesel,
    Name,
}

impl Field {
    fn validate(self, value: &str) -> ValidationResult {
        match self {
            Field::Pesel => validate_identity_number(value),
            Field::Name => validate_name(value),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Check { field: Field, values: Vec<String> },
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut field = Field::Pesel;
    let mut values = Vec::new();
    let mut literal = false;
    for arg in args {
        if literal {
            values.push(arg);
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--name" => field = Field::Name,
            "--" => literal = true,
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            other => values.push(other.to_string()),
        }
    }
    Ok(Command::Check { field, values })
}

/// Write one verdict line per value and return how many were invalid.
fn check_all<I, W>(field: Field, values: I, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let mut invalid = 0;
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match field.validate(value) {
            ValidationResult::Valid => writeln!(out, "{value}: valid")?,
            ValidationResult::Invalid { reason } => {
                invalid += 1;
                tracing::debug!(?field, %reason, "value rejected");
                writeln!(out, "{value}: invalid ({reason})")?;
            }
        }
    }
    Ok(invalid)
}

fn read_lines<R: BufRead>(input: R) -> Result<Vec<String>> {
    input
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read values from stdin")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    // stdout carries results; logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn run() -> Result<bool> {
    let (field, values) = match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(true);
        }
        Command::Check { field, values } if values.is_empty() => {
            (field, read_lines(io::stdin().lock())?)
        }
        Command::Check { field, values } => (field, values),
    };

    let total = values.len();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let invalid = check_all(field, values, &mut out)?;
    out.flush()?;
    tracing::info!(total, invalid, "check finished");
    Ok(invalid == 0)
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("pesel-check: {err:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Field, check_all, parse_args, read_lines};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_to_pesel() {
        assert_eq!(
            parse_args(args(&["90010112349"])).unwrap(),
            Command::Check {
                field: Field::Pesel,
                values: args(&["90010112349"]),
            }
        );
    }

    #[test]
    fn name_flag_switches_field() {
        let Command::Check { field, values } = parse_args(args(&["--name", "Nowak"])).unwrap()
        else {
            panic!("expected check command");
        };
        assert_eq!(field, Field::Name);
        assert_eq!(values, args(&["Nowak"]));
    }

    #[test]
    fn double_dash_passes_values_through() {
        let Command::Check { values, .. } = parse_args(args(&["--", "--help"])).unwrap() else {
            panic!("expected check command");
        };
        assert_eq!(values, args(&["--help"]));
    }

    #[test]
    fn help_and_unknown_options() {
        assert_eq!(parse_args(args(&["-h"])).unwrap(), Command::Help);
        let err = parse_args(args(&["--verbose"])).unwrap_err();
        assert!(err.to_string().contains("--verbose"));
    }

    #[test]
    fn reports_each_value_and_counts_failures() {
        let mut out = Vec::new();
        let invalid = check_all(
            Field::Pesel,
            args(&["90010112349", "90010112340", "", "  02200112348  "]),
            &mut out,
        )
        .unwrap();
        assert_eq!(invalid, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "90010112349: valid\n\
             90010112340: invalid (check digit mismatch: expected 9, found 0)\n\
             02200112348: invalid (month field 20 does not encode any century)\n"
        );
    }

    #[test]
    fn name_values_are_trimmed_before_checking() {
        let mut out = Vec::new();
        let invalid = check_all(Field::Name, args(&["  Kowalska ", "Ab"]), &mut out).unwrap();
        assert_eq!(invalid, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Kowalska: valid\n"));
        assert!(text.contains("Ab: invalid (surname must have at least 3 characters (got 2))"));
    }

    #[test]
    fn reads_stdin_lines() {
        let lines = read_lines("a\nb\n".as_bytes()).unwrap();
        assert_eq!(lines, args(&["a", "b"]));
    }
}
