//! bc2score - approximate-match scorer for gene normalization output
//!
//! ```bash
//! # Summary only
//! bc2score gold.tsv test.tsv
//!
//! # Summary plus the misses
//! bc2score gold.tsv test.tsv recall
//!
//! # Everything, as JSON
//! bc2score gold.tsv test.tsv all --format json
//! ```

use std::process::ExitCode;

use bc2score::cli::commands::score;
use bc2score::cli::output::format_error;
use bc2score::cli::utils::init_logging;
use bc2score::cli::Cli;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    match score::run(cli.score) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}
