mod cli;
mod cmd;
mod error;
mod io;
mod logging;

use std::process::ExitCode;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.quiet, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.message());
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2))
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let content = io::read_input(cli.command.file(), cli.max_file_size)?;
    let format = cli.format;

    match &cli.command {
        Command::Components { .. } => cmd::components::run(&content, format),
        Command::Connected { v, w, .. } => cmd::connected::run(&content, *v, *w, format),
        Command::Find { v, .. } => cmd::find::run(&content, *v, format),
        Command::Size { v, .. } => cmd::size::run(&content, *v, format),
        Command::Inspect { .. } => cmd::inspect::run(&content, format),
    }
}
