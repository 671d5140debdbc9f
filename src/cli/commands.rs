//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::report::{assemble_report, DetailedComparison};
use crate::screen::{load_reference_names, Screener, Screening};

use super::args::Commands;

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Repl { .. } => {
            // Handled in main.rs
            unreachable!("REPL command should be handled in main");
        }
        Commands::Screen {
            name,
            list,
            details,
            report,
            top,
        } => cmd_screen(&name, &list, details, report, top),
        Commands::Compare { first, second } => cmd_compare(&first, &second),
        Commands::Prompt { name, list } => cmd_prompt(&name, &list),
    }
}

fn cmd_screen(
    name: &str,
    list: &Path,
    details: bool,
    report: Option<PathBuf>,
    top: Option<usize>,
) -> Result<()> {
    let references = load_reference_names(list)?;
    let screener = Screener::new(references);
    let screening = screener
        .screen(name)
        .with_context(|| format!("Failed to screen '{name}'"))?;

    print_ranking(&screening, top);

    if details {
        for (reference, detail) in screening.details() {
            print_detail(screening.candidate(), &reference, &detail);
        }
    }

    if let Some(path) = report {
        let document = assemble_report(&screening, None);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create report: {}", path.display()))?;
        serde_json::to_writer_pretty(file, &document)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        println!("Report written to {}", path.display().to_string().cyan());
    }

    Ok(())
}

fn cmd_compare(first: &str, second: &str) -> Result<()> {
    let detail = DetailedComparison::compute(first, second);
    print_detail(first, second, &detail);
    Ok(())
}

fn cmd_prompt(name: &str, list: &Path) -> Result<()> {
    let references = load_reference_names(list)?;
    let screening = Screener::new(references)
        .screen(name)
        .with_context(|| format!("Failed to screen '{name}'"))?;

    println!("{}", screening.narrative_prompt().render());
    Ok(())
}

/// Print the ranked matches, highest score first.
pub fn print_ranking(screening: &Screening, top: Option<usize>) {
    let candidates = screening.ranking().candidates();
    let shown = top.unwrap_or(candidates.len()).min(candidates.len());

    println!(
        "Top matches for {}:",
        screening.candidate().bold()
    );
    for (index, ranked) in candidates.iter().take(shown).enumerate() {
        let score = format!("{:.2}%", ranked.score);
        let score = if ranked.score >= 50.0 {
            score.red()
        } else {
            score.green()
        };
        println!("  {}. {} {}", index + 1, ranked.name, score);
    }
}

/// Print the full metric breakdown and justification for one pair.
pub fn print_detail(candidate: &str, reference: &str, detail: &DetailedComparison) {
    println!();
    println!("{}", format!("{candidate} vs {reference}").bold());
    for (label, score) in detail.bundle.labeled() {
        println!("  {label}: {score:.2}%");
    }

    if detail.justification.is_empty() {
        println!("  no edits required");
    } else {
        println!("  justification:");
        for line in detail.justification_lines() {
            println!("    - {line}");
        }
    }
}
