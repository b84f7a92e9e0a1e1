//! tsort - topological sort, in the manner of the POSIX utility.
//!
//! Reads pairs of whitespace-delimited tokens naming edges of a directed
//! graph and writes a total ordering consistent with them, one node per
//! line. Cycles are reported on stderr, broken, and reflected in the exit
//! status.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tsort::sort::{self, Outcome};

#[derive(Parser)]
#[command(name = "tsort")]
#[command(about = "Write a totally ordered list consistent with a partial ordering of items")]
struct Cli {
    /// File of token pairs to sort; standard input when omitted or "-"
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::CyclesBroken) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("tsort: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match cli.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            sort::run_file(path, &mut stdout, &mut stderr)
        }
        _ => sort::run(io::stdin().lock(), &mut stdout, &mut stderr),
    }
}
