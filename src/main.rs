use std::path::PathBuf;

use clap::{ArgAction, Parser};
use date_resolver::{date, logging};

/// Printed instead of a date when the file is not three `/`-separated integers.
const WRONG_INPUT: &str = "Wrong input data";

#[derive(thiserror::Error, Debug)]
pub enum DateCliError {
    #[error("Could not read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Prints the earliest valid date that an `A/B/C` date could mean, as `YYYY-MM-DD`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file holding the ambiguous date, e.g. `12/10/01`
    date_file: PathBuf,

    /// Log more to stderr (`-v` for info, `-vv` for debug). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match do_work(&cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn do_work(cli: &Cli) -> Result<Output, DateCliError> {
    let input = std::fs::read_to_string(&cli.date_file).map_err(|source| DateCliError::Read {
        path: cli.date_file.clone(),
        source,
    })?;

    // malformed input is reported on stdout like any other outcome
    let output = date(&input).unwrap_or_else(|| WRONG_INPUT.to_string());
    Ok((output, 0))
}
