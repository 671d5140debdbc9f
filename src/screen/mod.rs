//! Screening session: the query interface tying the metrics, ranking and
//! reporting together.
//!
//! A [`Screener`] owns an ordered reference list and answers candidate
//! queries; each query produces a [`Screening`] scoped to that request.
//! There is no process-wide state: sessions are plain values, reentrant
//! and independent of one another.

use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, ScreenError};
use crate::rank::{rank, Ranking};
use crate::report::{DetailedComparison, NarrativePrompt};

/// Query interface over an ordered reference list of registered names.
#[derive(Debug, Clone)]
pub struct Screener {
    references: Vec<String>,
}

impl Screener {
    /// Create a screener over an ordered reference list.
    ///
    /// The list order matters: ranking ties are broken by original
    /// position. An empty list is accepted here and rejected per query,
    /// so a session can be constructed before its data is loaded.
    pub fn new(references: Vec<String>) -> Self {
        Self { references }
    }

    /// The reference names, in their original order.
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Screen one candidate name against the reference list.
    ///
    /// The candidate is trimmed of surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// [`ScreenError::InvalidName`] when the candidate is empty after
    /// trimming; [`ScreenError::NoReferenceData`] when the reference list
    /// is empty.
    pub fn screen(&self, candidate: &str) -> Result<Screening> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Err(ScreenError::InvalidName);
        }

        let ranking = rank(candidate, &self.references)?;

        Ok(Screening {
            candidate: candidate.to_string(),
            ranking,
        })
    }
}

/// Result of screening one candidate: the Top-K ranking plus on-demand
/// per-pair detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Screening {
    candidate: String,
    ranking: Ranking,
}

impl Screening {
    /// The (trimmed) candidate name that was screened.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// The ordered Top-K ranking.
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    /// Full metric breakdown and justification for the candidate against
    /// one reference name.
    pub fn detail(&self, reference: &str) -> DetailedComparison {
        DetailedComparison::compute(&self.candidate, reference)
    }

    /// Detailed comparisons for every ranked pair, in ranking order.
    pub fn details(&self) -> Vec<(String, DetailedComparison)> {
        self.ranking
            .candidates()
            .iter()
            .map(|ranked| (ranked.name.clone(), self.detail(&ranked.name)))
            .collect()
    }

    /// The fixed-shape prompt payload for narrative generation, built
    /// from the risk candidate.
    pub fn narrative_prompt(&self) -> NarrativePrompt {
        let risk = self.ranking.risk_candidate();
        NarrativePrompt {
            candidate: self.candidate.clone(),
            risk_name: risk.name.clone(),
            risk_score: risk.score,
        }
    }
}

/// Load a reference name list from a newline-delimited UTF-8 text file.
///
/// Surrounding whitespace is stripped from each line and blank lines are
/// skipped; the remaining lines keep their file order. The core never
/// cares where the list came from, only that it receives an ordered
/// sequence of names.
pub fn load_reference_names(path: &Path) -> anyhow::Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open reference list: {}", path.display()))?;

    let mut names = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        let name = line.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}
