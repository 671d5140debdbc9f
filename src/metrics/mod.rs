//! Orthographic and phonetic similarity metrics.
//!
//! Every metric returns a percentage similarity in `[0, 100]`; higher means
//! more similar. Normalization (lowercasing, whitespace stripping) happens
//! inside each metric, so callers make no case or whitespace guarantees.
//!
//! Orthographic metrics look at spelling: a Levenshtein edit-distance ratio
//! and a character-bigram overlap ratio. Phonetic metrics compare phonetic
//! encodings of the names instead of the raw text: Soundex, NYSIIS and
//! Metaphone codes, each run through the same edit-distance ratio. The
//! composite scorer folds these into two mid-level composites and one
//! overall average per name pair; the weights are fixed unweighted means
//! and downstream behavior depends on them exactly.

use rphonetic::{Encoder, Metaphone, Nysiis, Soundex};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::distance::standard_distance;

/// N-gram size used by [`ngram_overlap_ratio`].
pub const NGRAM_SIZE: usize = 2;

/// Edit-distance similarity ratio between two names, in `[0, 100]`.
///
/// Both names are lowercased, then scored as
/// `100 * (1 - d / max(len_a, len_b))` where `d` is the Levenshtein
/// distance over characters. Two empty names are identical (100); a
/// non-empty name against an empty one shares nothing (0).
///
/// # Example
///
/// ```rust
/// use namescreen::metrics::edit_distance_ratio;
///
/// assert_eq!(edit_distance_ratio("Cardivix", "Cardivix"), 100.0);
/// assert_eq!(edit_distance_ratio("Cardivix", ""), 0.0);
/// ```
pub fn edit_distance_ratio(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);

    if max_len == 0 {
        return 100.0;
    }

    let distance = standard_distance(&a, &b);
    100.0 * (1.0 - distance as f64 / max_len as f64)
}

/// Character n-gram overlap ratio between two names, in `[0, 100]`.
///
/// All whitespace is stripped and both names lowercased before building
/// the set of contiguous `n`-character substrings for each (empty for
/// names shorter than `n`). The Dice overlap
/// `2 * |intersection| / (|set_a| + |set_b|)` is scaled to 100 and then
/// multiplied by `1 - |len_a - len_b| / max(len_a, len_b)`. Pure n-gram
/// overlap over-rewards short common substrings when names differ greatly
/// in length; the penalty compensates. Both names empty after stripping
/// yields 0.
pub fn ngram_overlap_ratio(a: &str, b: &str) -> f64 {
    ngram_overlap_ratio_sized(a, b, NGRAM_SIZE)
}

/// [`ngram_overlap_ratio`] with an explicit n-gram size.
pub fn ngram_overlap_ratio_sized(a: &str, b: &str, n: usize) -> f64 {
    let a = squash(a);
    let b = squash(b);

    let len_a = a.len();
    let len_b = b.len();
    let max_len = len_a.max(len_b);

    if max_len == 0 {
        return 0.0;
    }

    let grams_a = ngrams(&a, n);
    let grams_b = ngrams(&b, n);

    let overlap = if grams_a.is_empty() && grams_b.is_empty() {
        0.0
    } else {
        let common = grams_a.intersection(&grams_b).count();
        2.0 * common as f64 / (grams_a.len() + grams_b.len()) as f64
    };

    let length_penalty = (len_a as f64 - len_b as f64).abs() / max_len as f64;
    overlap * (1.0 - length_penalty) * 100.0
}

/// Soundex similarity ratio: encode both names, then [`edit_distance_ratio`]
/// over the codes rather than the raw names.
pub fn soundex_ratio(a: &str, b: &str) -> f64 {
    let soundex = Soundex::default();
    encoded_ratio(&soundex, a, b)
}

/// NYSIIS similarity ratio: encode both names with the refined NYSIIS
/// encoding (non-strict, untruncated codes), then [`edit_distance_ratio`]
/// over the codes.
pub fn nysiis_ratio(a: &str, b: &str) -> f64 {
    let nysiis = Nysiis::new(false);
    encoded_ratio(&nysiis, a, b)
}

/// Metaphone similarity ratio: encode both names with unbounded-length
/// Metaphone codes, then [`edit_distance_ratio`] over the codes.
pub fn metaphone_ratio(a: &str, b: &str) -> f64 {
    let metaphone = Metaphone::new(None);
    encoded_ratio(&metaphone, a, b)
}

/// Phonetic composite: unweighted mean of the Metaphone, Soundex and
/// NYSIIS ratios. No metric is dropped even when a sub-score is 0.
pub fn phonetic_composite(a: &str, b: &str) -> f64 {
    (metaphone_ratio(a, b) + soundex_ratio(a, b) + nysiis_ratio(a, b)) / 3.0
}

/// Orthographic composite: unweighted mean of the edit-distance and
/// n-gram overlap ratios.
pub fn orthographic_composite(a: &str, b: &str) -> f64 {
    (edit_distance_ratio(a, b) + ngram_overlap_ratio(a, b)) / 2.0
}

/// Overall average: unweighted mean of the phonetic and orthographic
/// composites. This is the score the ranking engine sorts by.
pub fn overall_average(a: &str, b: &str) -> f64 {
    (phonetic_composite(a, b) + orthographic_composite(a, b)) / 2.0
}

/// Every individual metric score plus the composites for one name pair.
///
/// Backs both ranking diagnostics and the exported report. Invariant:
/// `overall == (phonetic_composite + orthographic_composite) / 2`, and
/// each composite is the unweighted mean of its constituent metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricBundle {
    /// Edit-distance ratio over the raw (lowercased) names.
    pub orthographic: f64,
    /// Metaphone-encoded ratio.
    pub metaphone: f64,
    /// Soundex-encoded ratio.
    pub soundex: f64,
    /// NYSIIS-encoded ratio.
    pub nysiis: f64,
    /// Character-bigram overlap ratio with length penalty.
    pub ngram: f64,
    /// Mean of the three phonetic ratios.
    pub phonetic_composite: f64,
    /// Mean of the two orthographic ratios.
    pub orthographic_composite: f64,
    /// Mean of the two composites.
    pub overall: f64,
}

impl MetricBundle {
    /// Compute the full metric breakdown for one name pair.
    pub fn compute(a: &str, b: &str) -> Self {
        let orthographic = edit_distance_ratio(a, b);
        let metaphone = metaphone_ratio(a, b);
        let soundex = soundex_ratio(a, b);
        let nysiis = nysiis_ratio(a, b);
        let ngram = ngram_overlap_ratio(a, b);

        let phonetic_composite = (metaphone + soundex + nysiis) / 3.0;
        let orthographic_composite = (orthographic + ngram) / 2.0;
        let overall = (phonetic_composite + orthographic_composite) / 2.0;

        Self {
            orthographic,
            metaphone,
            soundex,
            nysiis,
            ngram,
            phonetic_composite,
            orthographic_composite,
            overall,
        }
    }

    /// Metric scores paired with their report labels, in the report's
    /// fixed column order.
    pub fn labeled(&self) -> [(&'static str, f64); 8] {
        [
            ("orthographic", self.orthographic),
            ("metaphone", self.metaphone),
            ("soundex", self.soundex),
            ("nysiis", self.nysiis),
            ("ngram", self.ngram),
            ("phonetic_composite", self.phonetic_composite),
            ("orthographic_composite", self.orthographic_composite),
            ("overall", self.overall),
        ]
    }
}

/// Encode both names and compare the codes with the edit-distance ratio.
///
/// Input is folded to lowercase ASCII letters first; the encoders are
/// defined over that alphabet. A name with no encodable content yields an
/// empty code, so the empty-string rules of [`edit_distance_ratio`] carry
/// over to the phonetic ratios.
fn encoded_ratio<E: Encoder>(encoder: &E, a: &str, b: &str) -> f64 {
    let code_a = encode_folded(encoder, a);
    let code_b = encode_folded(encoder, b);
    edit_distance_ratio(&code_a, &code_b)
}

fn encode_folded<E: Encoder>(encoder: &E, name: &str) -> String {
    let folded = fold_ascii_alpha(name);
    if folded.is_empty() {
        return String::new();
    }
    encoder.encode(&folded)
}

/// Lowercase and keep only ASCII alphabetic characters, the alphabet the
/// phonetic encoders are defined over.
fn fold_ascii_alpha(s: &str) -> String {
    s.chars()
        .flat_map(|ch| ch.to_lowercase())
        .filter(|ch| ch.is_ascii_alphabetic())
        .collect()
}

/// Lowercase and strip all whitespace.
fn squash(s: &str) -> Vec<char> {
    s.chars()
        .flat_map(|ch| ch.to_lowercase())
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Contiguous n-character substrings of `chars`, as a set.
fn ngrams(chars: &[char], n: usize) -> FxHashSet<String> {
    if n == 0 || chars.len() < n {
        return FxHashSet::default();
    }
    chars
        .windows(n)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
