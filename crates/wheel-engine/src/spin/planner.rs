// spin/planner.rs
//
// Rotation planning: given the cumulative angle so far and a chosen winner,
// compute the next cumulative target angle. The target is always strictly
// ahead of the previous angle — the wheel only ever travels forward
// (clockwise), across the whole life of a wheel instance.
//
// Angles are in degrees. The cumulative angle is never wrapped; only the
// visual remainder (mod 360) participates in slot math.

use crate::spin::rng::WheelRng;

/// Minimum number of full extra turns per spin.
pub const MIN_FULL_TURNS: usize = 5;
/// Extra turns are drawn from `[MIN_FULL_TURNS, MIN_FULL_TURNS + TURN_SPREAD)`.
pub const TURN_SPREAD: usize = 3;
/// Landing jitter as a fraction of the slot width, applied symmetrically.
/// Below 0.5, so the pointer always lands inside the winning slot with a
/// margin of at least `(0.5 - NOISE_FRACTION)` of the slot width.
pub const NOISE_FRACTION: f64 = 0.4;

/// Compute the next cumulative target angle.
///
/// The plan: several full turns for visual effect, plus the exact forward
/// distance that puts the midpoint of the winner's slot under the top
/// pointer, plus a little jitter so repeat winners don't land on the same
/// pixel.
pub fn plan_target(
    previous: f64,
    segment_count: usize,
    winner: usize,
    rng: &mut WheelRng,
) -> f64 {
    debug_assert!(segment_count >= 2 && winner < segment_count);

    let slot = 360.0 / segment_count as f64;
    let winner_center = winner as f64 * slot + slot * 0.5;

    // Forward distance from the current visual angle to the orientation that
    // shows the winner's midpoint at the pointer.
    let current_visual = previous.rem_euclid(360.0);
    let target_visual = (360.0 - winner_center).rem_euclid(360.0);
    let advance = (target_visual - current_visual).rem_euclid(360.0);

    let turns = 360.0 * (MIN_FULL_TURNS + rng.next_index(TURN_SPREAD)) as f64;
    let noise = rng.range_f64(-NOISE_FRACTION, NOISE_FRACTION) * slot;

    previous + turns + advance + noise
}

/// The wheel angle currently under the fixed top pointer, in `[0, 360)`.
///
/// The wheel rotates clockwise by `rotation` degrees, so the pointer reads
/// the wheel's own coordinate system backwards.
pub fn pointer_angle(rotation: f64) -> f64 {
    (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0)
}

/// Index of the slot currently under the pointer for an `n`-segment wheel.
pub fn slot_at_pointer(rotation: f64, segment_count: usize) -> usize {
    let slot = 360.0 / segment_count as f64;
    let index = (pointer_angle(rotation) / slot) as usize;
    // pointer_angle can round to exactly 360/slot at the seam
    index.min(segment_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_strictly_ahead() {
        let mut rng = WheelRng::new(11);
        let mut previous = 0.0;
        for spin in 0..200 {
            let n = 2 + rng.next_index(10);
            let winner = rng.next_index(n);
            let target = plan_target(previous, n, winner, &mut rng);
            assert!(
                target > previous,
                "spin {spin}: target {target} not ahead of {previous}"
            );
            previous = target;
        }
    }

    #[test]
    fn includes_at_least_five_full_turns() {
        let mut rng = WheelRng::new(21);
        for _ in 0..200 {
            let previous = rng.range_f64(0.0, 10_000.0);
            let target = plan_target(previous, 6, 2, &mut rng);
            let travel = target - previous;
            // 5 turns minus max jitter .. 8 turns (exclusive) plus advance
            assert!(travel >= 360.0 * 5.0 - 0.4 * 60.0, "travel {travel} too short");
            assert!(travel < 360.0 * 8.0 + 360.0, "travel {travel} too long");
        }
    }

    #[test]
    fn pointer_lands_inside_winning_slot() {
        let mut rng = WheelRng::new(31);
        for _ in 0..2000 {
            let n = 2 + rng.next_index(12);
            let winner = rng.next_index(n);
            let previous = rng.range_f64(0.0, 100_000.0);
            let target = plan_target(previous, n, winner, &mut rng);

            let slot = 360.0 / n as f64;
            let pointer = pointer_angle(target);
            let (start, end) = (winner as f64 * slot, (winner + 1) as f64 * slot);
            assert!(
                pointer >= start && pointer < end,
                "pointer {pointer} outside slot [{start}, {end}) for n={n} winner={winner}"
            );
            // Jitter bound leaves a 10% margin on both edges
            let margin = slot * (0.5 - NOISE_FRACTION);
            assert!(pointer >= start + margin - 1e-9, "too close to slot start");
            assert!(pointer <= end - margin + 1e-9, "too close to slot end");
        }
    }

    #[test]
    fn slot_at_pointer_inverts_planning() {
        let mut rng = WheelRng::new(41);
        for _ in 0..500 {
            let n = 2 + rng.next_index(10);
            let winner = rng.next_index(n);
            let previous = rng.range_f64(0.0, 50_000.0);
            let target = plan_target(previous, n, winner, &mut rng);
            assert_eq!(slot_at_pointer(target, n), winner);
        }
    }

    #[test]
    fn pointer_angle_wraps_correctly() {
        assert_eq!(pointer_angle(0.0), 0.0);
        assert_eq!(pointer_angle(90.0), 270.0);
        assert_eq!(pointer_angle(360.0), 0.0);
        assert_eq!(pointer_angle(360.0 * 7.0 + 90.0), 270.0);
    }
}
