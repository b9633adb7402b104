use wheel_engine::{
    build_wedges, segment_to_json, CommandQueue, Segment, SpinState, WedgeBuffer,
    WheelCommand, WheelController, WheelEvent,
};

/// Wires the wheel controller to a browser render loop.
///
/// JS pushes commands between frames and calls `tick(dt)` from
/// requestAnimationFrame; each tick applies pending commands, advances the
/// animation, latches the latest winner for polling, and rebuilds the wedge
/// buffer that the page reads out of wasm memory.
pub struct WheelRunner {
    controller: WheelController,
    commands: CommandQueue,
    wedges: WedgeBuffer,
    /// Most recent settled winner, pre-serialized, awaiting pickup by JS.
    winner_json: Option<String>,
}

impl WheelRunner {
    pub fn new(seed: u64) -> Self {
        let controller = WheelController::default_wheel(seed);
        let mut wedges = WedgeBuffer::new();
        build_wedges(controller.segments(), &mut wedges);
        Self {
            controller,
            commands: CommandQueue::new(),
            wedges,
            winner_json: None,
        }
    }

    /// Push a command into the queue (called from JS via wasm-bindgen).
    pub fn push_command(&mut self, command: WheelCommand) {
        self.commands.push(command);
    }

    /// Run one frame: apply queued commands, advance the spin, refresh the
    /// wedge buffer.
    pub fn tick(&mut self, dt: f32) {
        for command in self.commands.drain() {
            if let Err(err) = self.controller.apply(command) {
                log::warn!("wheel command rejected: {err}");
            }
        }

        self.controller.tick(dt);

        for event in self.controller.drain_events() {
            if let WheelEvent::SpinSettled { winner } = event {
                self.latch_winner(&winner);
            }
        }

        // Segment counts are tiny; rebuilding every frame beats tracking
        // dirtiness across commands, elimination, and resets.
        build_wedges(self.controller.segments(), &mut self.wedges);
    }

    fn latch_winner(&mut self, winner: &Segment) {
        match segment_to_json(winner) {
            Ok(json) => self.winner_json = Some(json),
            Err(err) => log::warn!("winner serialization failed: {err}"),
        }
    }

    /// The settled winner as JSON, if one is waiting. Clears on read.
    pub fn take_winner_json(&mut self) -> Option<String> {
        self.winner_json.take()
    }

    // ---- Read accessors for the page ----

    pub fn rotation(&self) -> f64 {
        self.controller.rotation()
    }

    pub fn is_spinning(&self) -> bool {
        self.controller.state() == SpinState::Spinning
    }

    pub fn elimination(&self) -> bool {
        self.controller.elimination()
    }

    pub fn segment_count(&self) -> u32 {
        self.controller.segments().len() as u32
    }

    pub fn spins_completed(&self) -> u32 {
        self.controller.spins_completed() as u32
    }

    pub fn segments_json(&self) -> String {
        wheel_engine::segments_to_json(self.controller.segments().segments())
            .unwrap_or_else(|_| "[]".to_string())
    }

    pub fn wedges_ptr(&self) -> *const f32 {
        self.wedges.wedges_ptr()
    }

    pub fn wedge_count(&self) -> u32 {
        self.wedges.wedge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_settle(runner: &mut WheelRunner) {
        for _ in 0..2000 {
            runner.tick(1.0 / 60.0);
            if !runner.is_spinning() {
                return;
            }
        }
        panic!("spin never settled");
    }

    #[test]
    fn starts_with_the_default_wheel() {
        let runner = WheelRunner::new(99);
        assert_eq!(runner.segment_count(), 6);
        assert_eq!(runner.wedge_count(), 6);
        assert!(!runner.is_spinning());
    }

    #[test]
    fn spin_command_produces_a_winner_exactly_once() {
        let mut runner = WheelRunner::new(7);
        runner.push_command(WheelCommand::Spin);
        runner.tick(1.0 / 60.0);
        assert!(runner.is_spinning());

        run_to_settle(&mut runner);
        let json = runner.take_winner_json().expect("winner should be latched");
        assert!(json.contains("\"id\""));
        assert!(runner.take_winner_json().is_none());
        assert_eq!(runner.spins_completed(), 1);
    }

    #[test]
    fn elimination_shrinks_the_wedge_buffer() {
        let mut runner = WheelRunner::new(13);
        runner.push_command(WheelCommand::SetElimination(true));
        runner.push_command(WheelCommand::Spin);
        run_to_settle(&mut runner);
        assert_eq!(runner.segment_count(), 5);
        assert_eq!(runner.wedge_count(), 5);

        runner.push_command(WheelCommand::Reset);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.wedge_count(), 6);
    }

    #[test]
    fn rejected_commands_leave_state_intact() {
        let mut runner = WheelRunner::new(21);
        runner.push_command(WheelCommand::Spin);
        // Mutation queued behind a spin gets rejected at apply time
        runner.push_command(WheelCommand::SetSegments(vec![
            Segment::new("x", "X", "#111111"),
            Segment::new("y", "Y", "#222222"),
        ]));
        runner.tick(1.0 / 60.0);
        assert!(runner.is_spinning());
        assert_eq!(runner.segment_count(), 6);
    }
}
