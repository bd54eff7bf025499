use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    encode::{self, EncodeArgs},
    marks::{self, MarksArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;
mod profile;

#[derive(Parser, Debug)]
#[command(name = "glitch", about = "Zalgo-style glitch text generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Glitch text from an argument, a file or stdin.
    Encode(EncodeArgs),
    /// Dump the combining mark tables as JSON.
    Marks(MarksArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> ExitCode {
    // Logs go to stderr so glitched output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Display keeps the structured code, context and hint readable.
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Encode(args) => encode::run(&args),
        Command::Marks(args) => marks::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
