mod cli;
mod day;
mod generate;
mod logging;
mod views;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::run(args),
        Command::Views(args) => views::run(args),
        Command::Day(args) => day::run(args),
    }
}
