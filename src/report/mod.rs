//! Detailed comparison data, narrative generation boundary, and report
//! assembly.
//!
//! Everything here is plain structured data handed to external
//! collaborators: the interactive details view, the narrative generator
//! (an opaque external service behind a capability trait) and the report
//! exporter. None of it feeds back into scoring.

use serde::Serialize;

use crate::distance::{edit_ops, EditOp};
use crate::error::Result;
use crate::metrics::MetricBundle;
use crate::screen::Screening;

/// Full metric breakdown plus the edit-operation justification for one
/// name pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedComparison {
    /// Every individual and composite score for the pair.
    pub bundle: MetricBundle,
    /// Minimal edit-operation sequence from the first name to the second.
    pub justification: Vec<EditOp>,
}

impl DetailedComparison {
    /// Compute the detailed comparison for one name pair.
    pub fn compute(a: &str, b: &str) -> Self {
        Self {
            bundle: MetricBundle::compute(a, b),
            justification: edit_ops(a, b),
        }
    }

    /// The justification as human-readable lines.
    pub fn justification_lines(&self) -> Vec<String> {
        self.justification.iter().map(|op| op.to_string()).collect()
    }
}

/// Fixed-shape payload for the narrative-generation call.
///
/// The core supplies exactly these fields; the generator returns free text
/// the core neither parses nor validates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativePrompt {
    /// The candidate name under evaluation.
    pub candidate: String,
    /// The highest-scoring reference name (the risk candidate).
    pub risk_name: String,
    /// Overall average similarity between the two, in `[0, 100]`.
    pub risk_score: f64,
}

impl NarrativePrompt {
    /// Render the prompt text sent to the narrative service.
    ///
    /// The directive to weigh similarity at the start of the name, in
    /// particular the first three letters, is part of the fixed shape.
    pub fn render(&self) -> String {
        format!(
            "The candidate name '{}' shows a similarity of {:.2}% with the registered \
             name '{}'. Acting as an official name-clearance examiner, assess whether \
             the candidate resembles the registered name closely enough that an average \
             user could confuse the two, considering both phonetic and orthographic \
             similarity, and knowing that a similarity of 50% or more makes approval \
             unlikely. Give an articulated, reasoned decision on whether the candidate \
             should be accepted or rejected. Put extra emphasis on similarity at the \
             beginning of the name, in particular the first three letters.",
            self.candidate, self.risk_score, self.risk_name
        )
    }
}

/// Capability interface for the external narrative service.
///
/// Abstracting the call keeps the ranking logic testable without network
/// access; failures surface as
/// [`ScreenError::ExternalServiceFailure`](crate::error::ScreenError) and
/// never invalidate the ranking.
pub trait NarrativeGenerator {
    /// Produce free-text risk justification for the given prompt.
    fn generate(&self, prompt: &NarrativePrompt) -> Result<String>;
}

/// One exported row: a name pair with every metric formatted as a
/// two-decimal percentage, in the report's fixed column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// "candidate vs reference" label.
    pub comparison: String,
    /// `(metric label, "NN.NN%")` cells.
    pub scores: Vec<(String, String)>,
}

/// Exportable similarity report: narrative text plus one row per ranked
/// pair. The document format (JSON here) is a boundary concern; the core
/// only guarantees it can re-supply the full metric breakdown per pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    /// The candidate name that was screened.
    pub candidate: String,
    /// Narrative risk justification, when the external service produced
    /// one.
    pub narrative: Option<String>,
    /// One row per Top-K pair.
    pub rows: Vec<ReportRow>,
}

/// Assemble the exportable report for a screening result.
///
/// Recomputes the full metric bundle for each Top-K pair so the exporter
/// can render one cell per metric with two-decimal percentage formatting.
pub fn assemble_report(screening: &Screening, narrative: Option<String>) -> ReportDocument {
    let candidate = screening.candidate().to_string();

    let rows = screening
        .ranking()
        .candidates()
        .iter()
        .map(|ranked| {
            let bundle = MetricBundle::compute(screening.candidate(), &ranked.name);
            ReportRow {
                comparison: format!("{} vs {}", candidate, ranked.name),
                scores: bundle
                    .labeled()
                    .iter()
                    .map(|(label, score)| (label.to_string(), format!("{score:.2}%")))
                    .collect(),
            }
        })
        .collect();

    ReportDocument {
        candidate,
        narrative,
        rows,
    }
}
