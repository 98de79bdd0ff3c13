//! namematch - compare two personal names from the command line
//!
//! ## Usage
//!
//! ```bash
//! namematch "Vikash Yadav Luniwal" "Vikash Y L"
//! namematch --format json "Dr Vikash Yadav" "Vikash Yadav"
//! namematch --min-score 90 "Vikash Yadav" "V Y" || echo "no match"
//! ```
//!
//! ## Configuration
//!
//! - `NAMEMATCH_FORMAT`: output format, `text`, `json` or `pretty` (default: text)
//! - `RUST_LOG`: logging filter, overrides `--log-level` (default: warn)
//!
//! Exit status is 0 on success, 1 on error and 2 when `--min-score` is set
//! and not reached.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use namematch_core::match_names;
use tracing::{debug, info};

mod config;
mod error;
mod logging;
mod render;

use config::Args;
use error::Result;

const BELOW_THRESHOLD: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    logging::init(&args.log_level)?;
    debug!(format = ?args.format, min_score = ?args.min_score, "starting namematch");

    let result = match_names(&args.input_name, &args.given_name);
    info!(
        percentage = result.percentage,
        remark = %result.remark,
        "compared names"
    );

    let rendered = render::render(&result, args.format)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;

    match args.min_score {
        Some(threshold) if !result.is_match(threshold) => {
            debug!(threshold, "below minimum score");
            Ok(ExitCode::from(BELOW_THRESHOLD))
        }
        _ => Ok(ExitCode::SUCCESS),
    }
}
