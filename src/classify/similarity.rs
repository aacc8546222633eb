//! Set similarity for fallback scoring.

use std::collections::HashSet;

use crate::utils::math::count_to_f64;

/// Jaccard similarity: |A ∩ B| / |A ∪ B|
///
/// Returns 0.0 when both sets are empty (undefined mathematically, but 0.0
/// avoids a fallback with no reference cards claiming an empty deck).
#[must_use]
pub fn jaccard_similarity<T: Eq + std::hash::Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        0.0
    } else {
        count_to_f64(intersection) / count_to_f64(union)
    }
}
