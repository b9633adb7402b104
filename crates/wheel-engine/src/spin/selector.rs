// spin/selector.rs
//
// Winner selection. Uniform by default; weighted when any segment carries an
// explicit weight (missing weights count as 1). Callers guarantee the set can
// spin (>= 2 segments) — the entry guard lives in the spin driver.

use crate::core::segments::SegmentSet;
use crate::spin::rng::WheelRng;

/// Pick a winning segment index from the set.
pub fn select_winner(segments: &SegmentSet, rng: &mut WheelRng) -> usize {
    debug_assert!(segments.can_spin(), "selector invoked on an unspinnable set");

    if segments.iter().all(|s| s.weight.is_none()) {
        return rng.next_index(segments.len());
    }

    let total: f64 = segments.iter().map(|s| s.effective_weight() as f64).sum();
    let mut draw = rng.next_f64() * total;
    for (index, segment) in segments.iter().enumerate() {
        draw -= segment.effective_weight() as f64;
        if draw < 0.0 {
            return index;
        }
    }
    // Float rounding can leave a sliver of `draw` after the last segment.
    segments.len() - 1
}
