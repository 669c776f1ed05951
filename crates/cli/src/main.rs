//! Exactly CLI - preview floating and fixed borrow rates.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_curve, run_fixed, run_floating};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Floating(args) => run_floating(&args, cli.format)?,
        Commands::Fixed(args) => run_fixed(&args, cli.format)?,
        Commands::Curve(args) => run_curve(&args, cli.format)?,
    }

    Ok(())
}
