//! CLI interface for namescreen
//!
//! Provides command-line utilities for screening candidates, comparing
//! pairs, and exporting similarity reports.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
