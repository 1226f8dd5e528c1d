//! Binary entry point for the `flowdag` CLI.
use std::process;

use clap::Parser;

mod cli;
mod cmd;
mod error;
mod io;

use cli::{Cli, Command};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        let message = e.message();
        if !message.is_empty() {
            eprintln!("error: {message}");
        }
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Check { file } => {
            let content = io::read_input(file, cli.max_input_size)?;
            cmd::check::run(&content, &cli.format)
        }
        Command::Version => {
            println!("{}", flowdag_core::version());
            Ok(())
        }
    }
}
