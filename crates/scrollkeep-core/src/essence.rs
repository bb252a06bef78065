//! Essence selection
//!
//! Picks which fragments of a segment survive compression. The first fragment
//! (head) and the last fragment (tail) are mandatory anchors; the remaining
//! budget is filled by descending essence weight, ties broken by original
//! order. Indices are returned in document order so the essence keeps the
//! narrative order of the segment.

/// Select essence indices from per-fragment weights under budget `k`.
///
/// Anchors are always kept, so the result may exceed `k` when `k < 2`.
/// - empty input → empty selection
/// - single fragment → `[0]`
/// - `k >= weights.len()` → every index
pub fn select_essence(weights: &[f64], k: usize) -> Vec<usize> {
    let count = weights.len();
    if count == 0 {
        return Vec::new();
    }

    let mut selected = vec![false; count];
    selected[0] = true;
    selected[count - 1] = true;
    let mut size = if count > 1 { 2 } else { 1 };

    // Stable sort keeps original order for equal weights
    let mut ranked: Vec<usize> = (1..count.saturating_sub(1)).collect();
    ranked.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));

    for idx in ranked {
        if size >= k {
            break;
        }
        selected[idx] = true;
        size += 1;
    }

    selected
        .iter()
        .enumerate()
        .filter_map(|(idx, &keep)| keep.then_some(idx))
        .collect()
}
