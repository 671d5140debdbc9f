//! # namescreen
//!
//! Multi-metric name similarity screening for regulatory name clearance.
//!
//! A candidate name is scored against every name on a reference list using
//! orthographic metrics (Levenshtein edit-distance ratio, character-bigram
//! overlap) and phonetic metrics (Soundex, NYSIIS and Metaphone encodings
//! compared by edit-distance ratio). Unweighted composites roll the metrics
//! up into one overall average per pair; the ranking engine sorts the
//! references by that average and keeps the Top-5. For any pair, a
//! character-level edit-operation alignment explains why the names are
//! considered similar.
//!
//! ## Example
//!
//! ```rust
//! use namescreen::prelude::*;
//!
//! let references = vec![
//!     "Cardinol".to_string(),
//!     "Cardivex".to_string(),
//!     "Zantryl".to_string(),
//! ];
//!
//! let screener = Screener::new(references);
//! let screening = screener.screen("Cardivix").unwrap();
//!
//! assert_eq!(screening.ranking().risk_candidate().name, "Cardivex");
//! for ranked in screening.ranking().candidates() {
//!     println!("{}: {:.2}%", ranked.name, ranked.score);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod distance;
pub mod error;
pub mod metrics;
pub mod rank;
pub mod repl;
pub mod report;
pub mod screen;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{apply_edit_ops, edit_ops, standard_distance, EditOp};
    pub use crate::error::ScreenError;
    pub use crate::metrics::{
        edit_distance_ratio, metaphone_ratio, ngram_overlap_ratio, nysiis_ratio,
        orthographic_composite, overall_average, phonetic_composite, soundex_ratio, MetricBundle,
    };
    pub use crate::rank::{rank, RankedCandidate, Ranking, TOP_K};
    pub use crate::report::{
        assemble_report, DetailedComparison, NarrativeGenerator, NarrativePrompt, ReportDocument,
        ReportRow,
    };
    pub use crate::screen::{load_reference_names, Screener, Screening};
}
