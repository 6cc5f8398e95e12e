//! agegreet - interactive greeter with age-bracket classification
//!
//! Prompts for a name and an age on stdin, then prints a greeting and one
//! of three classification lines (minor / adult / senior citizen).

use agegreet::errors::{self, InputError};
use agegreet::session;
use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "agegreet")]
#[command(about = "Interactive greeter with age-bracket classification", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the interaction itself
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    info!("agegreet v{} starting", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match session::run(&mut input, &mut output) {
        Ok(outcome) => {
            info!(
                age = outcome.age,
                bracket = outcome.bracket.label(),
                "session complete"
            );
            Ok(())
        }
        Err(InputError::InputClosed) => {
            eprintln!("agegreet: input closed before an age was entered");
            std::process::exit(errors::EXIT_INPUT_CLOSED);
        }
        Err(err) => Err(err.into()),
    }
}
