//! Driver-facing game holder
//!
//! Owns the current run, turns wall-clock frame time into fixed ticks and
//! buffers input between frames. Platform code only talks to this.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, tick};
use crate::tuning::Tuning;

/// Discrete input from the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    Reset,
    Quit,
    ToggleAutopilot,
    ToggleMute,
}

/// Game instance holding all driver state
pub struct Runner {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    /// Events from a reset, reported with the next frame
    pending: Vec<GameEvent>,
    quit: bool,
    muted: bool,
}

impl Runner {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        log::info!("New run (seed {seed})");
        Self {
            state: GameState::new(seed, tuning),
            accumulator: 0.0,
            input: TickInput::default(),
            pending: Vec::new(),
            quit: false,
            muted: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn autopilot(&self) -> bool {
        self.input.autopilot
    }

    /// Whether sound effects should be silenced
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Apply one input event. Jump is held until the next tick; reset only
    /// takes effect once the run is over.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Jump => {
                if self.state.phase == GamePhase::Running {
                    self.input.jump = true;
                }
            }
            InputEvent::Reset => {
                if self.state.phase == GamePhase::GameOver {
                    self.restart();
                }
            }
            InputEvent::Quit => self.quit = true,
            InputEvent::ToggleAutopilot => {
                self.input.autopilot = !self.input.autopilot;
                log::info!("Autopilot: {}", self.input.autopilot);
            }
            InputEvent::ToggleMute => {
                self.muted = !self.muted;
                log::info!("Muted: {}", self.muted);
            }
        }
    }

    /// Swap in a fresh run built from the finished one
    fn restart(&mut self) {
        let next = self.state.next_session();
        log::info!(
            "Restarting (last run: score {}, currency {}); new seed {}",
            self.state.score,
            self.state.currency,
            next.seed
        );
        self.state = next;
        self.accumulator = 0.0;
        self.input.jump = false;
        self.pending.push(GameEvent::Restarted);
    }

    /// Advance by exactly one tick, ignoring the accumulator
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending);
        events.extend(tick(&mut self.state, &self.input));
        // Clear one-shot inputs after processing
        self.input.jump = false;
        events
    }

    /// Run as many fixed ticks as `dt` seconds of wall time cover
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        // A bad timestamp must not poison the accumulator
        let dt = if dt.is_finite() { dt.clamp(0.0, 0.1) } else { 0.0 };
        self.accumulator += dt;

        let mut events = std::mem::take(&mut self.pending);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiral
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> Runner {
        Runner::new(2024, Tuning::default())
    }

    fn step_n(runner: &mut Runner, n: usize) -> Vec<GameEvent> {
        (0..n).flat_map(|_| runner.step()).collect()
    }

    #[test]
    fn test_frame_runs_fixed_ticks() {
        let mut r = runner();
        r.frame(SIM_DT * 3.5);
        assert_eq!(r.state().frame, 3);
        r.frame(SIM_DT * 0.6);
        assert_eq!(r.state().frame, 4);
    }

    #[test]
    fn test_frame_caps_substeps() {
        let mut r = runner();
        r.frame(10.0);
        assert!(r.state().frame <= MAX_SUBSTEPS as u64);
        r.frame(0.0);
        assert!(r.state().frame <= MAX_SUBSTEPS as u64 + 1);
    }

    #[test]
    fn test_frame_ignores_non_finite_dt() {
        let mut r = runner();
        assert!(r.frame(f32::NAN).is_empty());
        r.frame(SIM_DT * 2.0);
        r.frame(SIM_DT * 2.0);
        assert_eq!(r.state().frame, 4);

        r.frame(f32::INFINITY);
        r.frame(f32::NEG_INFINITY);
        assert_eq!(r.state().frame, 4);
        r.frame(SIM_DT * 1.5);
        assert_eq!(r.state().frame, 5);
    }

    #[test]
    fn test_jump_survives_zero_tick_frame() {
        let mut r = runner();
        r.handle(InputEvent::Jump);
        assert!(r.frame(0.0).is_empty());
        assert!(r.frame(SIM_DT * 0.5).is_empty());
        assert_eq!(r.state().frame, 0);

        let events = r.frame(SIM_DT * 0.6);
        assert_eq!(r.state().frame, 1);
        assert_eq!(events, vec![GameEvent::Jumped]);
        assert!(r.state().player.jumping);
    }

    #[test]
    fn test_jump_applies_once_across_substeps() {
        let mut r = runner();
        r.handle(InputEvent::Jump);
        let events = r.frame(SIM_DT * 3.5);
        assert_eq!(r.state().frame, 3);
        let jumps = events.iter().filter(|e| **e == GameEvent::Jumped).count();
        assert_eq!(jumps, 1);
        assert!(r.state().player.jumping);
        assert!(!r.input.jump);
    }

    #[test]
    fn test_jump_is_one_shot() {
        let mut r = runner();
        r.handle(InputEvent::Jump);
        assert_eq!(r.step(), vec![GameEvent::Jumped]);
        assert!(r.state().player.jumping);
        assert!(!r.input.jump);
    }

    #[test]
    fn test_reset_ignored_while_running() {
        let mut r = runner();
        step_n(&mut r, 50);
        let seed = r.state().seed;
        r.handle(InputEvent::Reset);
        assert_eq!(r.state().frame, 50);
        assert_eq!(r.state().seed, seed);
    }

    #[test]
    fn test_reset_after_game_over_starts_clean() {
        let mut r = runner();
        let events = step_n(&mut r, 400);
        assert!(events.contains(&GameEvent::Crashed));
        assert!(r.state().is_game_over());
        assert!(r.state().score > 0);

        // Jump during game over does nothing
        r.handle(InputEvent::Jump);
        assert!(!r.input.jump);

        r.handle(InputEvent::Reset);
        let snap = r.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.currency, 0);
        assert_eq!(snap.frame, 0);
        assert!(snap.obstacles.is_empty());
        assert!(snap.collectibles.is_empty());
        assert!(!snap.game_over);

        let events = r.step();
        assert_eq!(events.first(), Some(&GameEvent::Restarted));
        assert_eq!(r.state().frame, 1);
    }

    #[test]
    fn test_quit_and_autopilot_flags() {
        let mut r = runner();
        assert!(!r.quit_requested());
        r.handle(InputEvent::ToggleAutopilot);
        assert!(r.autopilot());
        step_n(&mut r, 1000);
        assert!(!r.state().is_game_over());
        r.handle(InputEvent::Quit);
        assert!(r.quit_requested());
    }

    #[test]
    fn test_mute_toggles_without_touching_the_run() {
        let mut r = runner();
        assert!(!r.muted());
        step_n(&mut r, 20);
        r.handle(InputEvent::ToggleMute);
        assert!(r.muted());
        assert_eq!(r.state().frame, 20);
        r.handle(InputEvent::ToggleMute);
        assert!(!r.muted());
    }
}
