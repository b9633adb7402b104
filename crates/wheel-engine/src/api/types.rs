use crate::core::segments::Segment;

/// Notifications drained from the controller after each tick.
///
/// Events are plain values polled once per frame by the caller (the wasm
/// runner, or a test) — there are no callbacks crossing the engine boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    /// A spin passed the entry guard and the wheel is now animating.
    SpinStarted,
    /// A spin settled. Fired exactly once per completed spin, carrying the
    /// winning segment by value.
    SpinSettled { winner: Segment },
    /// Elimination mode removed the winner from the wheel after settling.
    SegmentEliminated { segment: Segment },
}
