use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wheel_engine::{segments_from_json, WheelCommand};

pub mod runner;
pub use runner::WheelRunner;

thread_local! {
    static RUNNER: RefCell<Option<WheelRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut WheelRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Wheel not initialized. Call wheel_init() first.");
        f(runner)
    })
}

/// Seed the per-instance generator from the browser's entropy. Two draws of
/// `Math.random()` cover the full 53 bits a single draw can carry.
fn entropy_seed() -> u64 {
    let hi = (js_sys::Math::random() * (1u64 << 26) as f64) as u64;
    let lo = (js_sys::Math::random() * (1u64 << 27) as f64) as u64;
    (hi << 27) | lo
}

#[wasm_bindgen]
pub fn wheel_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = WheelRunner::new(entropy_seed());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("wheel-web: initialized");
}

/// Advance the wheel by `dt` seconds. Call from requestAnimationFrame.
#[wasm_bindgen]
pub fn wheel_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn wheel_spin() {
    with_runner(|r| r.push_command(WheelCommand::Spin));
}

#[wasm_bindgen]
pub fn wheel_cancel() {
    with_runner(|r| r.push_command(WheelCommand::Cancel));
}

/// Queue a segment-list replacement. Returns `false` if the JSON is
/// malformed (nothing is queued); a structurally valid list can still be
/// rejected at apply time if a spin is in flight.
#[wasm_bindgen]
pub fn wheel_set_segments(json: &str) -> bool {
    match segments_from_json(json) {
        Ok(segments) => {
            with_runner(|r| r.push_command(WheelCommand::SetSegments(segments)));
            true
        }
        Err(err) => {
            log::warn!("segment JSON rejected: {err}");
            false
        }
    }
}

#[wasm_bindgen]
pub fn wheel_set_elimination(on: bool) {
    with_runner(|r| r.push_command(WheelCommand::SetElimination(on)));
}

#[wasm_bindgen]
pub fn wheel_reset() {
    with_runner(|r| r.push_command(WheelCommand::Reset));
}

/// Cumulative rotation in degrees. Apply as a clockwise CSS rotation; never
/// wrap it on the JS side or the wheel will snap backward.
#[wasm_bindgen]
pub fn wheel_rotation() -> f64 {
    with_runner(|r| r.rotation())
}

#[wasm_bindgen]
pub fn wheel_is_spinning() -> bool {
    with_runner(|r| r.is_spinning())
}

#[wasm_bindgen]
pub fn wheel_elimination() -> bool {
    with_runner(|r| r.elimination())
}

/// The settled winner as a JSON segment, exactly once per spin.
#[wasm_bindgen]
pub fn wheel_take_winner() -> Option<String> {
    with_runner(|r| r.take_winner_json())
}

#[wasm_bindgen]
pub fn wheel_segment_count() -> u32 {
    with_runner(|r| r.segment_count())
}

#[wasm_bindgen]
pub fn wheel_segments_json() -> String {
    with_runner(|r| r.segments_json())
}

#[wasm_bindgen]
pub fn wheel_spins_completed() -> u32 {
    with_runner(|r| r.spins_completed())
}

// ---- Wedge buffer accessors (read out of wasm memory) ----

#[wasm_bindgen]
pub fn get_wedges_ptr() -> *const f32 {
    with_runner(|r| r.wedges_ptr())
}

#[wasm_bindgen]
pub fn get_wedge_count() -> u32 {
    with_runner(|r| r.wedge_count())
}

#[wasm_bindgen]
pub fn get_wedge_floats() -> u32 {
    wheel_engine::WedgeInstance::FLOATS as u32
}
