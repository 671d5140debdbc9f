//! namescreen - multi-metric name similarity screening
//!
//! Screens candidate names against a reference list and reports ranked
//! naming conflicts, with an optional interactive loop.

use clap::Parser;
use colored::Colorize;
use std::process;

use namescreen::cli::{commands, Cli, Commands};
use namescreen::repl::{run, ReplConfig, ReplState};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl { list } => {
            let mut state = ReplState::new();
            let load_result = match &list {
                Some(path) => state.load(path).map(|count| {
                    println!("loaded {count} reference names");
                }),
                None => Ok(()),
            };
            load_result.and_then(|_| run(ReplConfig::default(), state))
        }
        command => commands::execute(command),
    };

    if let Err(e) = result {
        eprintln!("{}: {e:#}", "Error".red().bold());
        process::exit(1);
    }
}
