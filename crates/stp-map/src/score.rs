//! Similarity scoring between synonym labels and column names.
//!
//! The ratio is Ratcliff/Obershelp: `2·M / T`, where `T` is the combined
//! length of both strings and `M` the number of characters in the matching
//! blocks. Blocks are found greedily: the longest contiguous common run
//! first, then recursively on the pieces to its left and right. The ratio is
//! not symmetric; the column is scanned as the outer sequence and the label
//! as the inner one.

use std::cmp::Ordering;

use rapidfuzz::distance::indel;

/// Minimum similarity for a column to count as a match.
pub const MATCH_CUTOFF: f64 = 0.6;

/// A column together with its similarity to a label.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredColumn {
    pub column: String,
    pub score: f64,
}

/// Case-insensitive similarity of `column` to `label`, in `0.0..=1.0`.
pub fn similarity(label: &str, column: &str) -> f64 {
    let label: Vec<char> = label.to_uppercase().chars().collect();
    let column: Vec<char> = column.to_uppercase().chars().collect();
    ratio(matched_chars(&column, &label), column.len() + label.len())
}

/// The single closest column to `label` at or above `cutoff`.
///
/// Blank column names never match. Equal scores go to the lexically largest
/// column name.
pub fn closest_match(label: &str, columns: &[String], cutoff: f64) -> Option<ScoredColumn> {
    let label_chars: Vec<char> = label.to_uppercase().chars().collect();
    let mut best: Option<ScoredColumn> = None;

    for column in columns {
        if column.trim().is_empty() {
            continue;
        }
        let column_chars: Vec<char> = column.to_uppercase().chars().collect();
        let total = column_chars.len() + label_chars.len();

        // Matching blocks form a common subsequence, so the LCS ratio bounds
        // the score from above.
        let distance = indel::distance(column_chars.iter().copied(), label_chars.iter().copied());
        let lcs = (total - distance) / 2;
        if ratio(lcs, total) < cutoff {
            continue;
        }
        let score = ratio(matched_chars(&column_chars, &label_chars), total);
        if score < cutoff {
            continue;
        }
        let better = match &best {
            None => true,
            Some(current) => match score.partial_cmp(&current.score) {
                Some(Ordering::Greater) => true,
                Some(Ordering::Equal) => column > &current.column,
                _ => false,
            },
        };
        if better {
            best = Some(ScoredColumn {
                column: column.clone(),
                score,
            });
        }
    }

    best
}

fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matched as f64 / total as f64
    }
}

/// Total size of the matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_block(a, b, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Among equally long runs the one starting earliest in `a` wins, then the
/// one starting earliest in `b`.
fn longest_block(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run[x + 1]: length of the common run ending at b[blo + x].
    let mut previous = vec![0usize; bhi - blo + 1];
    for i in alo..ahi {
        let mut run = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] != b[j] {
                continue;
            }
            let size = previous[j - blo] + 1;
            run[j - blo + 1] = size;
            if size > best_size {
                best_i = i + 1 - size;
                best_j = j + 1 - size;
                best_size = size;
            }
        }
        previous = run;
    }
    (best_i, best_j, best_size)
}
