//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command-line interface.
#[derive(Parser)]
#[command(name = "namescreen")]
#[command(about = "Screen candidate names against a reference list for naming conflicts")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Screen a candidate name against a reference list
    Screen {
        /// Candidate name to screen
        name: String,

        /// Reference list file (one name per line)
        #[arg(short, long)]
        list: PathBuf,

        /// Show the full metric breakdown and justification per match
        #[arg(short, long)]
        details: bool,

        /// Write the similarity report as JSON to this path
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Limit displayed matches (ranking itself is always Top-5)
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Compare two names and show every metric plus the edit-operation
    /// justification
    Compare {
        /// First name
        first: String,

        /// Second name
        second: String,
    },

    /// Launch the interactive screening loop
    Repl {
        /// Reference list file to load at startup
        #[arg(short, long)]
        list: Option<PathBuf>,
    },

    /// Print the narrative prompt for a candidate's risk match
    Prompt {
        /// Candidate name to screen
        name: String,

        /// Reference list file (one name per line)
        #[arg(short, long)]
        list: PathBuf,
    },
}
