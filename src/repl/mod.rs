//! Interactive screening loop
//!
//! Reads candidate names from the terminal and screens each one against
//! the loaded reference list. All loop state lives in a [`ReplState`]
//! value scoped to the session; there is no global mutable state.

use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};

use crate::cli::commands::{print_detail, print_ranking};
use crate::screen::{load_reference_names, Screener};

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "namescreen> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".namescreen_history"),
            ),
        }
    }
}

/// Session-scoped loop state: the active screener plus display flags.
#[derive(Debug, Default)]
pub struct ReplState {
    screener: Option<Screener>,
    show_details: bool,
    display_limit: Option<usize>,
}

impl ReplState {
    /// Create an empty session with no reference list loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a reference list file into the session.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let references = load_reference_names(path)?;
        let count = references.len();
        self.screener = Some(Screener::new(references));
        Ok(count)
    }

    /// Screen one candidate and print the results.
    fn screen(&self, candidate: &str) -> Result<()> {
        let screener = self
            .screener
            .as_ref()
            .context("No reference list loaded; use :load <path>")?;

        let screening = screener.screen(candidate)?;
        print_ranking(&screening, self.display_limit);

        if self.show_details {
            for (reference, detail) in screening.details() {
                print_detail(screening.candidate(), &reference, &detail);
            }
        }

        Ok(())
    }
}

/// Run the interactive screening loop until `:quit` or end of input.
pub fn run(config: ReplConfig, mut state: ReplState) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to initialize line editor")?;

    if let Some(history) = &config.history_file {
        // Missing history on first run is expected.
        let _ = editor.load_history(history);
    }

    println!("Enter a candidate name to screen, or :help for commands.");

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match handle_line(line, &mut state) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => eprintln!("{}: {e:#}", "Error".red().bold()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Readline failure"),
        }
    }

    if let Some(history) = &config.history_file {
        let _ = editor.save_history(history);
    }

    Ok(())
}

/// Handle one input line. Returns `Ok(true)` when the session should end.
fn handle_line(line: &str, state: &mut ReplState) -> Result<bool> {
    if let Some(command) = line.strip_prefix(':') {
        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("quit") | Some("q") | Some("exit") => return Ok(true),
            Some("help") | Some("h") => print_help(),
            Some("details") => {
                state.show_details = !state.show_details;
                let mode = if state.show_details { "on" } else { "off" };
                println!("details {mode}");
            }
            Some("top") => match parts.next().map(str::parse::<usize>) {
                Some(Ok(limit)) if limit > 0 => {
                    state.display_limit = Some(limit);
                    println!("showing up to {limit} matches");
                }
                None => {
                    state.display_limit = None;
                    println!("showing all ranked matches");
                }
                _ => eprintln!("usage: :top [count]"),
            },
            Some("load") => match parts.next() {
                Some(path) => {
                    let count = state.load(Path::new(path))?;
                    println!("loaded {count} reference names");
                }
                None => eprintln!("usage: :load <path>"),
            },
            Some(other) => eprintln!("unknown command :{other}; try :help"),
            None => print_help(),
        }
        return Ok(false);
    }

    state.screen(line)?;
    Ok(false)
}

fn print_help() {
    println!("Commands:");
    println!("  <name>         screen a candidate name");
    println!("  :load <path>   load a reference list (one name per line)");
    println!("  :details       toggle per-match metric breakdown");
    println!("  :top [count]   limit displayed matches (no count: show all)");
    println!("  :help          show this help");
    println!("  :quit          exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_quit() {
        let mut state = ReplState::new();
        assert!(handle_line(":quit", &mut state).unwrap());
        assert!(handle_line(":q", &mut state).unwrap());
        assert!(handle_line(":exit", &mut state).unwrap());
    }

    #[test]
    fn test_handle_details_toggle() {
        let mut state = ReplState::new();
        assert!(!state.show_details);
        handle_line(":details", &mut state).unwrap();
        assert!(state.show_details);
        handle_line(":details", &mut state).unwrap();
        assert!(!state.show_details);
    }

    #[test]
    fn test_handle_top() {
        let mut state = ReplState::new();
        handle_line(":top 3", &mut state).unwrap();
        assert_eq!(state.display_limit, Some(3));
        handle_line(":top", &mut state).unwrap();
        assert_eq!(state.display_limit, None);
    }

    #[test]
    fn test_screen_without_list_fails() {
        let mut state = ReplState::new();
        assert!(handle_line("Cardivix", &mut state).is_err());
    }

    #[test]
    fn test_unknown_command_is_not_fatal() {
        let mut state = ReplState::new();
        assert!(!handle_line(":bogus", &mut state).unwrap());
    }
}
