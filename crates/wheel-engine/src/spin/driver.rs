// spin/driver.rs
//
// The spin animation state machine. Owns the cumulative rotation angle and
// the in-flight animation; everything else (segment mutation, elimination,
// events) lives in the controller.
//
// Lifecycle: Idle -> Spinning -> (settle) -> Idle. Settling happens inside
// `tick` and hands the outcome straight back — there is no resting "settled"
// state the caller has to leave explicitly.

use crate::core::segments::{Segment, SegmentSet};
use crate::spin::easing::SpinEase;
use crate::spin::planner::plan_target;
use crate::spin::rng::WheelRng;
use crate::spin::selector::select_winner;

/// Default spin duration in seconds.
pub const DEFAULT_SPIN_SECONDS: f32 = 4.2;

/// Animation parameters for one wheel instance.
#[derive(Debug, Clone, Copy)]
pub struct SpinConfig {
    /// Wall-clock duration of one spin, in seconds.
    pub duration: f32,
    /// Timing curve. Must decelerate to a stop (all `SpinEase` curves do).
    pub ease: SpinEase,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_SPIN_SECONDS,
            ease: SpinEase::default(),
        }
    }
}

/// Lifecycle state visible to callers (the UI disables its trigger control
/// while `Spinning`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning,
}

/// What a completed spin produced.
///
/// Carries the winning segment by value: the caller may mutate the segment
/// list the moment it sees this, so an index alone would be meaningless.
#[derive(Debug, Clone)]
pub struct SpinOutcome {
    pub winner: Segment,
    pub winner_index: usize,
    /// Cumulative rotation after settling (exactly the planned target).
    pub rotation: f64,
}

/// An in-flight spin.
#[derive(Debug, Clone)]
struct Flight {
    from: f64,
    target: f64,
    elapsed: f32,
    winner_index: usize,
    winner: Segment,
}

/// Drives the cumulative rotation angle through time-bounded spins.
#[derive(Debug)]
pub struct SpinDriver {
    /// Cumulative rotation in degrees. Monotonically non-decreasing for the
    /// lifetime of the driver; never wrapped.
    rotation: f64,
    flight: Option<Flight>,
    config: SpinConfig,
}

impl SpinDriver {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            rotation: 0.0,
            flight: None,
            config,
        }
    }

    /// Current cumulative rotation in degrees. During a spin this is the
    /// interpolated value the renderer should draw.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn state(&self) -> SpinState {
        if self.flight.is_some() {
            SpinState::Spinning
        } else {
            SpinState::Idle
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.flight.is_some()
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Entry guard + takeoff. Returns `true` if a spin actually started.
    ///
    /// A request while already spinning, or on a set with fewer than 2
    /// segments, is a no-op — it must not restart, queue, or disturb an
    /// in-flight animation.
    pub fn start(&mut self, segments: &SegmentSet, rng: &mut WheelRng) -> bool {
        if self.is_spinning() {
            log::debug!("spin refused: already spinning");
            return false;
        }
        if !segments.can_spin() {
            log::debug!("spin refused: {} segment(s)", segments.len());
            return false;
        }

        let winner_index = select_winner(segments, rng);
        let Some(winner) = segments.get(winner_index) else {
            return false;
        };
        let target = plan_target(self.rotation, segments.len(), winner_index, rng);

        log::debug!(
            "spin started: {} -> {target:.1} deg over {}s",
            self.rotation,
            self.config.duration
        );
        self.flight = Some(Flight {
            from: self.rotation,
            target,
            elapsed: 0.0,
            winner_index,
            winner: winner.clone(),
        });
        true
    }

    /// Advance the in-flight animation by `dt` seconds.
    ///
    /// Returns the outcome exactly once, on the tick where the elapsed time
    /// reaches the configured duration; the rotation is then the planned
    /// target with no residual interpolation error.
    pub fn tick(&mut self, dt: f32) -> Option<SpinOutcome> {
        let flight = self.flight.as_mut()?;
        flight.elapsed += dt.max(0.0);

        if flight.elapsed >= self.config.duration {
            let flight = self.flight.take()?;
            self.rotation = flight.target;
            return Some(SpinOutcome {
                winner: flight.winner,
                winner_index: flight.winner_index,
                rotation: self.rotation,
            });
        }

        let t = (flight.elapsed / self.config.duration) as f64;
        let eased = self.config.ease.apply(t);
        self.rotation = flight.from + (flight.target - flight.from) * eased;
        None
    }

    /// Abort an in-flight spin (unmount, navigation). The rotation freezes at
    /// its current interpolated value (forward travel already shown is kept,
    /// so monotonicity holds) and no settle outcome is produced.
    /// Returns `true` if there was a spin to cancel.
    pub fn cancel(&mut self) -> bool {
        if self.flight.take().is_some() {
            log::debug!("spin cancelled at {:.1} deg", self.rotation);
            true
        } else {
            false
        }
    }
}

impl Default for SpinDriver {
    fn default() -> Self {
        Self::new(SpinConfig::default())
    }
}
