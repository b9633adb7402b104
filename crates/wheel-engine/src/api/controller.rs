use crate::api::types::WheelEvent;
use crate::core::segments::{Segment, SegmentSet};
use crate::error::WheelError;
use crate::input::commands::WheelCommand;
use crate::spin::driver::{SpinConfig, SpinDriver, SpinState};
use crate::spin::rng::WheelRng;

/// Owns one wheel: the segment set, the spin driver, elimination state, and
/// the baseline list that `reset` restores.
///
/// The controller is the single writer for all of this state; the only
/// suspension point is the time-based spin animation, advanced by `tick`.
/// Segment mutation is a hard error while a spin is in flight.
pub struct WheelController {
    segments: SegmentSet,
    /// The list `reset` restores. Updated by `set_segments`, never by
    /// elimination removals.
    baseline: Vec<Segment>,
    driver: SpinDriver,
    rng: WheelRng,
    elimination: bool,
    spins_completed: u64,
    events: Vec<WheelEvent>,
}

impl WheelController {
    /// Create an empty wheel. `seed` feeds the per-instance generator — pass
    /// something different per wheel (the web bridge derives it from
    /// `Math.random()`), a fixed value in tests.
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SpinConfig::default())
    }

    pub fn with_config(seed: u64, config: SpinConfig) -> Self {
        Self {
            segments: SegmentSet::new(),
            baseline: Vec::new(),
            driver: SpinDriver::new(config),
            rng: WheelRng::new(seed),
            elimination: false,
            spins_completed: 0,
            events: Vec::new(),
        }
    }

    /// Create a wheel with an initial segment list.
    pub fn with_segments(seed: u64, segments: Vec<Segment>) -> Result<Self, WheelError> {
        let mut controller = Self::new(seed);
        controller.set_segments(segments)?;
        Ok(controller)
    }

    /// The six-option starter wheel every new session gets.
    pub fn default_wheel(seed: u64) -> Self {
        let segments = vec![
            Segment::new("1", "Pizza", "#EF4444"),
            Segment::new("2", "Sushi", "#3B82F6"),
            Segment::new("3", "Burger", "#F59E0B"),
            Segment::new("4", "Salad", "#10B981"),
            Segment::new("5", "Tacos", "#8B5CF6"),
            Segment::new("6", "Pasta", "#EC4899"),
        ];
        // Static list with unique ids; cannot fail validation.
        Self::with_segments(seed, segments).unwrap_or_else(|_| Self::new(seed))
    }

    // ── Read accessors ───────────────────────────────────────────────────────

    pub fn segments(&self) -> &SegmentSet {
        &self.segments
    }

    /// Current cumulative rotation in degrees (unbounded; take mod 360 for
    /// display geometry only).
    pub fn rotation(&self) -> f64 {
        self.driver.rotation()
    }

    pub fn state(&self) -> SpinState {
        self.driver.state()
    }

    pub fn is_spinning(&self) -> bool {
        self.driver.is_spinning()
    }

    pub fn elimination(&self) -> bool {
        self.elimination
    }

    /// Spins settled since this wheel was created.
    pub fn spins_completed(&self) -> u64 {
        self.spins_completed
    }

    // ── Mutation (idle only) ─────────────────────────────────────────────────

    /// Replace the segment list and make it the new baseline for `reset`.
    pub fn set_segments(&mut self, segments: Vec<Segment>) -> Result<(), WheelError> {
        if self.driver.is_spinning() {
            return Err(WheelError::SpinInFlight);
        }
        self.segments.replace(segments)?;
        self.baseline = self.segments.segments().to_vec();
        log::debug!("segments replaced: {} option(s)", self.segments.len());
        Ok(())
    }

    /// Restore the baseline segment list (undoing elimination removals).
    /// Does NOT reset the cumulative rotation — the wheel keeps spinning
    /// forward from wherever it stopped.
    pub fn reset(&mut self) -> Result<(), WheelError> {
        if self.driver.is_spinning() {
            return Err(WheelError::SpinInFlight);
        }
        self.segments.replace(self.baseline.clone())
    }

    /// Toggle elimination mode. Allowed at any time; the flag is read when a
    /// spin settles.
    pub fn set_elimination(&mut self, on: bool) {
        self.elimination = on;
    }

    // ── Spin lifecycle ───────────────────────────────────────────────────────

    /// Request a spin. Refusals (too few segments, already spinning) are
    /// silent no-ops per the entry guard; returns whether a spin started.
    pub fn start_spin(&mut self) -> bool {
        let started = self.driver.start(&self.segments, &mut self.rng);
        if started {
            self.events.push(WheelEvent::SpinStarted);
        }
        started
    }

    /// Abort an in-flight spin. No settle event will fire.
    pub fn cancel_spin(&mut self) -> bool {
        self.driver.cancel()
    }

    /// Advance the animation by `dt` seconds. On the settling tick this
    /// pushes `SpinSettled` (and, in elimination mode, removes the winner and
    /// pushes `SegmentEliminated`).
    pub fn tick(&mut self, dt: f32) {
        let Some(outcome) = self.driver.tick(dt) else {
            return;
        };

        self.spins_completed += 1;
        log::info!(
            "spin #{} settled on `{}` at {:.1} deg",
            self.spins_completed,
            outcome.winner.text,
            outcome.rotation
        );
        self.events.push(WheelEvent::SpinSettled {
            winner: outcome.winner.clone(),
        });

        if self.elimination {
            if let Some(segment) = self.segments.remove(&outcome.winner.id) {
                log::debug!("eliminated `{}`, {} left", segment.text, self.segments.len());
                self.events.push(WheelEvent::SegmentEliminated { segment });
            }
        }
    }

    /// Drain events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a queued UI command.
    pub fn apply(&mut self, command: WheelCommand) -> Result<(), WheelError> {
        match command {
            WheelCommand::Spin => {
                self.start_spin();
                Ok(())
            }
            WheelCommand::Cancel => {
                self.cancel_spin();
                Ok(())
            }
            WheelCommand::SetSegments(segments) => self.set_segments(segments),
            WheelCommand::SetElimination(on) => {
                self.set_elimination(on);
                Ok(())
            }
            WheelCommand::Reset => self.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_segments() -> Vec<Segment> {
        vec![
            Segment::new("a", "Cinema", "#EC4899"),
            Segment::new("b", "Bowling", "#3B82F6"),
            Segment::new("c", "Board Games", "#F59E0B"),
            Segment::new("d", "Stargazing", "#6366F1"),
        ]
    }

    /// Tick until the current spin settles, returning the drained events.
    fn settle(controller: &mut WheelController) -> Vec<WheelEvent> {
        for _ in 0..2000 {
            controller.tick(1.0 / 60.0);
            if !controller.is_spinning() {
                return controller.drain_events();
            }
        }
        panic!("spin never settled");
    }

    fn settled_winner(events: &[WheelEvent]) -> Segment {
        events
            .iter()
            .find_map(|e| match e {
                WheelEvent::SpinSettled { winner } => Some(winner.clone()),
                _ => None,
            })
            .expect("no SpinSettled event")
    }

    #[test]
    fn spin_refused_below_two_segments() {
        let mut controller = WheelController::new(1);
        assert!(!controller.start_spin());

        controller
            .set_segments(vec![Segment::new("a", "A", "#FFFFFF")])
            .unwrap();
        assert!(!controller.start_spin());
        assert_eq!(controller.state(), SpinState::Idle);
        assert!(controller.drain_events().is_empty());
    }

    #[test]
    fn double_start_yields_one_settle() {
        let mut controller = WheelController::with_segments(2, four_segments()).unwrap();
        assert!(controller.start_spin());
        assert!(!controller.start_spin());

        let events = settle(&mut controller);
        let settles = events
            .iter()
            .filter(|e| matches!(e, WheelEvent::SpinSettled { .. }))
            .count();
        assert_eq!(settles, 1);
    }

    #[test]
    fn mutation_rejected_while_spinning() {
        let mut controller = WheelController::with_segments(3, four_segments()).unwrap();
        assert!(controller.start_spin());

        let err = controller.set_segments(four_segments()).unwrap_err();
        assert!(matches!(err, WheelError::SpinInFlight));
        let err = controller.reset().unwrap_err();
        assert!(matches!(err, WheelError::SpinInFlight));

        // Elimination toggle is fine mid-spin
        controller.set_elimination(true);
        let _ = settle(&mut controller);
    }

    #[test]
    fn elimination_round_trip() {
        let mut controller = WheelController::with_segments(4, four_segments()).unwrap();
        controller.set_elimination(true);

        // Three spins each remove their winner
        for remaining in [3usize, 2, 1] {
            assert!(controller.start_spin());
            let events = settle(&mut controller);
            let winner = settled_winner(&events);
            assert!(events
                .iter()
                .any(|e| matches!(e, WheelEvent::SegmentEliminated { segment } if segment.id == winner.id)));
            assert_eq!(controller.segments().len(), remaining);
            assert!(controller.segments().find(&winner.id).is_none());
        }

        // One segment left: further spins are refused
        assert!(!controller.start_spin());
        let rotation_before_reset = controller.rotation();
        assert!(rotation_before_reset > 0.0);

        // Reset restores all four and keeps the rotation
        controller.reset().unwrap();
        assert_eq!(controller.segments().len(), 4);
        assert_eq!(controller.rotation(), rotation_before_reset);
        assert!(controller.start_spin());
    }

    #[test]
    fn reset_restores_baseline_not_latest_mutation() {
        let mut controller = WheelController::with_segments(5, four_segments()).unwrap();
        controller.set_elimination(true);
        assert!(controller.start_spin());
        let _ = settle(&mut controller);
        assert_eq!(controller.segments().len(), 3);

        // A fresh set_segments becomes the new baseline
        controller
            .set_segments(vec![
                Segment::new("x", "X", "#111111"),
                Segment::new("y", "Y", "#222222"),
            ])
            .unwrap();
        assert!(controller.start_spin());
        let _ = settle(&mut controller);
        controller.reset().unwrap();
        assert_eq!(controller.segments().len(), 2);
        assert!(controller.segments().find("x").is_some());
    }

    #[test]
    fn winner_carried_by_value_through_elimination() {
        let mut controller = WheelController::with_segments(6, four_segments()).unwrap();
        controller.set_elimination(true);
        assert!(controller.start_spin());
        let events = settle(&mut controller);
        let winner = settled_winner(&events);
        // The winner segment is intact even though it left the list
        assert!(!winner.text.is_empty());
        assert!(controller.segments().find(&winner.id).is_none());
    }

    #[test]
    fn spin_counter_counts_settles_only() {
        let mut controller = WheelController::with_segments(7, four_segments()).unwrap();
        assert_eq!(controller.spins_completed(), 0);

        assert!(controller.start_spin());
        controller.tick(0.1);
        assert!(controller.cancel_spin());
        assert_eq!(controller.spins_completed(), 0);

        assert!(controller.start_spin());
        let _ = settle(&mut controller);
        assert_eq!(controller.spins_completed(), 1);
    }

    #[test]
    fn commands_route_to_operations() {
        let mut controller = WheelController::new(8);
        controller
            .apply(WheelCommand::SetSegments(four_segments()))
            .unwrap();
        controller.apply(WheelCommand::SetElimination(true)).unwrap();
        assert!(controller.elimination());

        controller.apply(WheelCommand::Spin).unwrap();
        assert!(controller.is_spinning());
        let err = controller.apply(WheelCommand::Reset).unwrap_err();
        assert!(matches!(err, WheelError::SpinInFlight));
        controller.apply(WheelCommand::Cancel).unwrap();
        assert!(!controller.is_spinning());
    }
}
