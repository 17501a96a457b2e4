//! Top-k ranking of a score vector.
//!
//! Orders label indices by descending score with ties broken by ascending
//! index, so identical vectors always produce identical rankings regardless
//! of which sort is used underneath.

use std::cmp::Ordering;

/// Return up to `k` label indices, highest score first.
///
/// `k = 0` yields an empty ranking; `k > L` yields all `L` indices in order.
/// `NaN` scores sort after every real score.
pub fn rank(scores: &[f32], k: usize) -> Vec<usize> {
    let k = k.min(scores.len());
    if k == 0 {
        return Vec::new();
    }

    let mut indices: Vec<usize> = (0..scores.len()).collect();
    let by_score = |&a: &usize, &b: &usize| compare(scores, a, b);

    // Partition first when only a prefix is needed; L can be in the tens of
    // thousands while k is usually 1..10.
    if k < indices.len() {
        indices.select_nth_unstable_by(k - 1, by_score);
        indices.truncate(k);
    }
    indices.sort_unstable_by(by_score);
    indices
}

/// Total order: descending score, `NaN` last, then ascending index.
fn compare(scores: &[f32], a: usize, b: usize) -> Ordering {
    let (sa, sb) = (scores[a], scores[b]);
    match (sa.is_nan(), sb.is_nan()) {
        (true, true) => a.cmp(&b),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => sb
            .partial_cmp(&sa)
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b)),
    }
}
