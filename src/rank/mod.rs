//! Ranking engine: score a candidate against every reference name and
//! select the top matches.
//!
//! Scoring each pair is independent, so the pass over the reference list
//! runs in parallel; the final ordering never depends on execution order.
//! Results are sorted descending by overall average score with ties broken
//! by original reference-list position (stable sort), and the fixed Top-5
//! policy selects the matches that feed the details view and the report.

use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use crate::error::{Result, ScreenError};
use crate::metrics::overall_average;

/// Number of top matches retained by the ranking engine.
pub const TOP_K: usize = 5;

/// One reference name with its overall average similarity to the candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    /// The reference name.
    pub name: String,
    /// Overall average similarity score in `[0, 100]`.
    pub score: f64,
}

/// Ordered Top-K result of ranking a candidate against a reference list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    candidates: Vec<RankedCandidate>,
}

impl Ranking {
    /// The ranked matches, highest score first.
    pub fn candidates(&self) -> &[RankedCandidate] {
        &self.candidates
    }

    /// The highest-scoring reference: the risk candidate handed to
    /// narrative generation.
    pub fn risk_candidate(&self) -> &RankedCandidate {
        // Construction guarantees at least one entry.
        &self.candidates[0]
    }

    /// Number of retained matches (at most [`TOP_K`]).
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the ranking holds no matches. Never true for a ranking
    /// produced by [`rank`], which rejects empty reference lists.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Rank `candidate` against every name in `references`.
///
/// Computes the overall average score per pair (in parallel), sorts
/// descending by score with ties keeping original list order, and retains
/// the first [`TOP_K`] entries (all of them when fewer exist).
///
/// # Errors
///
/// [`ScreenError::NoReferenceData`] when `references` is empty.
pub fn rank(candidate: &str, references: &[String]) -> Result<Ranking> {
    if references.is_empty() {
        return Err(ScreenError::NoReferenceData);
    }

    // Order-preserving parallel map keeps tie-breaking deterministic.
    let mut scored: Vec<RankedCandidate> = references
        .par_iter()
        .map(|reference| RankedCandidate {
            name: reference.clone(),
            score: overall_average(candidate, reference),
        })
        .collect();

    // Scores are never NaN; Equal on the impossible case keeps the sort
    // total and the tie order stable.
    scored.sort_by(|x, y| y.score.partial_cmp(&x.score).unwrap_or(Ordering::Equal));
    scored.truncate(TOP_K);

    Ok(Ranking { candidates: scored })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_orders_by_score() {
        let references = names(&["Cardinol", "Cardivex", "Zantryl"]);
        let ranking = rank("Cardivix", &references).unwrap();

        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking.risk_candidate().name, "Cardivex");

        let cardivex_pos = ranking
            .candidates()
            .iter()
            .position(|c| c.name == "Cardivex")
            .unwrap();
        let zantryl_pos = ranking
            .candidates()
            .iter()
            .position(|c| c.name == "Zantryl")
            .unwrap();
        assert!(cardivex_pos < zantryl_pos);
    }

    #[test]
    fn test_rank_descending_scores() {
        let references = names(&["Cardinol", "Zantryl", "Cardivex", "Xividrac"]);
        let ranking = rank("Cardivix", &references).unwrap();

        for pair in ranking.candidates().windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_rank_top_k_limit() {
        let references = names(&[
            "Altrexa", "Benovar", "Cardivex", "Dunaxol", "Elivane", "Fentraz", "Gavolin",
        ]);
        let ranking = rank("Cardivix", &references).unwrap();
        assert_eq!(ranking.len(), TOP_K);
    }

    #[test]
    fn test_rank_fewer_than_top_k() {
        let references = names(&["Cardivex", "Zantryl"]);
        let ranking = rank("Cardivix", &references).unwrap();
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn test_rank_empty_references() {
        let result = rank("Cardivix", &[]);
        assert_eq!(result, Err(ScreenError::NoReferenceData));
    }

    #[test]
    fn test_rank_stable_on_ties() {
        // Case variants fold to the same lowercase form, so every metric
        // scores them identically. The entries stay distinguishable by
        // name, and input order must decide the tie.
        let references = names(&["Zantryl", "CARDIVEX", "Cardivex", "ZANTRYL"]);
        let ranking = rank("Cardivix", &references).unwrap();

        let ordered: Vec<&str> = ranking
            .candidates()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(ordered, ["CARDIVEX", "Cardivex", "Zantryl", "ZANTRYL"]);
        assert_eq!(ranking.candidates()[0].score, ranking.candidates()[1].score);
    }

    #[test]
    fn test_rank_deterministic() {
        let references = names(&[
            "Cardinol", "Cardivex", "Zantryl", "Xividrac", "Altrexa", "Benovar",
        ]);
        let first = rank("Cardivix", &references).unwrap();
        let second = rank("Cardivix", &references).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scores_in_range() {
        let references = names(&["Cardinol", "Cardivex", "Zantryl"]);
        let ranking = rank("Cardivix", &references).unwrap();
        for candidate in ranking.candidates() {
            assert!((0.0..=100.0).contains(&candidate.score));
        }
    }
}
