mod calc;
mod cli;
mod error;
mod net;
mod report;

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }
    let color = colored::control::SHOULD_COLORIZE.should_colorize();

    log::debug!("{args:?}");

    match calc::compute(&args.network_address, args.family_hint()) {
        Ok(report) => {
            print!("{}", report::render(&report, color));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
