pub mod api;
pub mod bridge;
pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod spin;

// Re-export key types at crate root for convenience
pub use api::controller::WheelController;
pub use api::types::WheelEvent;
pub use bridge::record::{segment_to_json, segments_from_json, segments_to_json, WheelRecord};
pub use core::segments::{Segment, SegmentSet};
pub use error::WheelError;
pub use input::commands::{CommandQueue, WheelCommand};
pub use render::wedges::{build_wedges, unit_point, WedgeBuffer, WedgeInstance};
pub use spin::driver::{SpinConfig, SpinDriver, SpinOutcome, SpinState, DEFAULT_SPIN_SECONDS};
pub use spin::easing::{CubicBezier, SpinEase};
pub use spin::planner::{plan_target, pointer_angle, slot_at_pointer};
pub use spin::rng::WheelRng;
pub use spin::selector::select_winner;
