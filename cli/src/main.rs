use std::process::ExitCode;

use clap::Parser;
use drivemap_cli::Cli;
use drivemap_cli::run_main;

fn main() -> anyhow::Result<ExitCode> {
    run_main(Cli::parse())
}
