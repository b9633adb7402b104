// spin/mod.rs
//
// The spin engine: winner selection, rotation planning, and the animation
// state machine, layered leaves-first (rng -> selector/planner -> driver).

pub mod driver;
pub mod easing;
pub mod planner;
pub mod rng;
pub mod selector;

pub use driver::{SpinConfig, SpinDriver, SpinOutcome, SpinState};
pub use easing::{CubicBezier, SpinEase};
pub use planner::{plan_target, pointer_angle, slot_at_pointer};
pub use rng::WheelRng;
pub use selector::select_winner;
