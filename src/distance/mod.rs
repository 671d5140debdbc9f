//! Levenshtein distance and edit-operation alignment.
//!
//! This module provides the character-level edit distance underlying the
//! orthographic similarity ratio, plus the dynamic-programming backtracking
//! that explains *why* two names are considered similar: the minimal
//! sequence of substitutions, insertions and deletions transforming one
//! name into the other.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Compute standard Levenshtein distance between two strings.
///
/// Uses space-optimized dynamic programming (two rows) to compute the
/// minimum number of single-character edits (insertions, deletions,
/// substitutions) required to transform `source` into `target`. Operates
/// on Unicode scalar values, not bytes.
///
/// # Example
///
/// ```rust
/// use namescreen::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("cardivix", "cardivix"), 0);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row = vec![0; n + 1];
    let mut curr_row = vec![0; n + 1];

    for (j, item) in prev_row.iter_mut().enumerate().take(n + 1) {
        *item = j;
    }

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// One unit of transformation from a source name to a target name.
///
/// Positions are character indices into the respective input strings as
/// passed to [`edit_ops`]: substitution and deletion positions index the
/// source, insertion positions name the source slot *before* which the
/// target character is inserted. Characters are reported from the
/// original-case inputs, so a rendered sequence reads naturally even
/// though the alignment itself is computed over lowercased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EditOp {
    /// Replace the source character at `position` with `to`.
    Substitute {
        /// Character index into the source string.
        position: usize,
        /// Character being replaced (original case).
        from: char,
        /// Replacement character (original case).
        to: char,
    },
    /// Insert `ch` before source position `position`.
    Insert {
        /// Source character index the insertion precedes.
        position: usize,
        /// Character inserted (original case).
        ch: char,
    },
    /// Delete the source character at `position`.
    Delete {
        /// Character index into the source string.
        position: usize,
        /// Character removed (original case).
        ch: char,
    },
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Substitute { position, from, to } => {
                write!(f, "substitute '{from}' with '{to}' at position {position}")
            }
            EditOp::Insert { position, ch } => {
                write!(f, "insert '{ch}' at position {position}")
            }
            EditOp::Delete { position, ch } => {
                write!(f, "delete '{ch}' from position {position}")
            }
        }
    }
}

/// Compute the canonical minimal edit-operation sequence transforming
/// lowercased `source` into lowercased `target`.
///
/// The alignment uses full-matrix dynamic programming with backtracking.
/// Tie-break policy is fixed: when costs are equal, substitution is
/// preferred over deletion, and deletion over insertion, matching
/// conventional edit-distance libraries. Operations are returned in
/// ascending source position, which is the order [`apply_edit_ops`]
/// expects.
///
/// Reported characters come from the original-case inputs where the
/// position exists there; this is a one-way explanation, not a reversible
/// transform against the un-lowercased strings.
///
/// # Example
///
/// ```rust
/// use namescreen::distance::{edit_ops, EditOp};
///
/// let ops = edit_ops("cat", "cot");
/// assert_eq!(
///     ops,
///     vec![EditOp::Substitute { position: 1, from: 'a', to: 'o' }]
/// );
/// ```
pub fn edit_ops(source: &str, target: &str) -> Vec<EditOp> {
    let source_orig: SmallVec<[char; 32]> = source.chars().collect();
    let target_orig: SmallVec<[char; 32]> = target.chars().collect();
    let source_chars: SmallVec<[char; 32]> = source.to_lowercase().chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.to_lowercase().chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    // Full matrix; the backtracking walk needs every cell.
    let mut matrix = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        matrix[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    // Walk back from (m, n). Preference on equal cost: match/substitute,
    // then delete, then insert.
    let mut ops = Vec::with_capacity(matrix[m][n]);
    let mut i = m;
    let mut j = n;

    while i > 0 || j > 0 {
        if i > 0
            && j > 0
            && source_chars[i - 1] == target_chars[j - 1]
            && matrix[i][j] == matrix[i - 1][j - 1]
        {
            i -= 1;
            j -= 1;
            continue;
        }

        if i > 0 && j > 0 && matrix[i][j] == matrix[i - 1][j - 1] + 1 {
            ops.push(EditOp::Substitute {
                position: i - 1,
                from: original_char(&source_orig, &source_chars, i - 1),
                to: original_char(&target_orig, &target_chars, j - 1),
            });
            i -= 1;
            j -= 1;
        } else if i > 0 && matrix[i][j] == matrix[i - 1][j] + 1 {
            ops.push(EditOp::Delete {
                position: i - 1,
                ch: original_char(&source_orig, &source_chars, i - 1),
            });
            i -= 1;
        } else {
            ops.push(EditOp::Insert {
                position: i,
                ch: original_char(&target_orig, &target_chars, j - 1),
            });
            j -= 1;
        }
    }

    ops.reverse();
    ops
}

/// Fetch the original-case character for a lowercased index, falling back
/// to the lowercased character when case folding changed the length.
fn original_char(original: &[char], lowered: &[char], index: usize) -> char {
    if original.len() == lowered.len() {
        original[index]
    } else {
        lowered[index]
    }
}

/// Apply an edit-operation sequence to `source`, producing the target.
///
/// `ops` must be in ascending source position as produced by [`edit_ops`].
/// Operation characters are folded to lowercase before being applied, so
/// for any pair `(a, b)`,
/// `apply_edit_ops(&a.to_lowercase(), &edit_ops(a, b))` reproduces
/// `b.to_lowercase()` exactly.
pub fn apply_edit_ops(source: &str, ops: &[EditOp]) -> String {
    let mut result: Vec<char> = source.chars().collect();
    let mut offset: isize = 0;

    for op in ops {
        match *op {
            EditOp::Substitute { position, to, .. } => {
                let at = (position as isize + offset) as usize;
                let lowered: SmallVec<[char; 2]> = to.to_lowercase().collect();
                let added = lowered.len() as isize;
                result.splice(at..at + 1, lowered);
                offset += added - 1;
            }
            EditOp::Insert { position, ch } => {
                let at = (position as isize + offset) as usize;
                let lowered: SmallVec<[char; 2]> = ch.to_lowercase().collect();
                let added = lowered.len() as isize;
                result.splice(at..at, lowered);
                offset += added;
            }
            EditOp::Delete { position, .. } => {
                let at = (position as isize + offset) as usize;
                result.remove(at);
                offset -= 1;
            }
        }
    }

    result.into_iter().collect()
}
