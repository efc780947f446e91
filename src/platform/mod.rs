//! Platform layer
//!
//! `FrameDriver` is the part both shells share: it buffers key events, runs
//! fixed 60 Hz ticks from variable frame times, and forwards game events to
//! the log and the audio cues. The shells only own the window/canvas, the
//! clock and the GPU surface.

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::audio::AudioManager;
use crate::consts::*;
use crate::renderer::{Vertex, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Key, TickInput, tick};

/// Fixed-step driver between a shell's frame callback and the simulation
pub struct FrameDriver {
    pub state: GameState,
    pub input: TickInput,
    accumulator: f32,
    audio: AudioManager,
}

impl FrameDriver {
    pub fn new(settings: &Settings, seed: u64, audio: AudioManager) -> Self {
        let mut state = GameState::new(seed);
        state.time_budget_secs = settings.clone().normalized().time_budget_secs;
        log::info!("Game initialized with seed: {}", state.seed);
        Self {
            state,
            input: TickInput::default(),
            accumulator: 0.0,
            audio,
        }
    }

    /// A key went down; auto-repeat events update held state only
    pub fn key_down(&mut self, key: Key, repeat: bool) {
        self.input.held.set(key, true);
        if !repeat {
            self.input.pressed.push(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.held.set(key, false);
    }

    /// Run as many fixed ticks as `dt` seconds of wall time cover
    ///
    /// `now` is the clock reading in seconds that the round timer uses.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, dt: f32, now: f64) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        self.input.now = now;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // One-shot presses belong to the first tick only
            self.input.pressed.clear();
        }

        for event in self.state.drain_events() {
            log_event(&event);
            self.audio.handle_event(&event);
        }

        substeps
    }

    /// Vertices for the current state
    pub fn frame(&self) -> Vec<Vertex> {
        build_frame(&self.state)
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::LevelStarted(level) => {
            log::info!("Level {} ({}) started", level.number(), level.name())
        }
        GameEvent::Launched { attempts } => log::debug!("Shot {} launched", attempts),
        GameEvent::Bounce { surface, speed } => {
            log::trace!("Bounce off {:?} at {:.2}", surface, speed)
        }
        GameEvent::Scored { score } => log::info!("Scored! Total: {}", score),
        GameEvent::TimeUp { score, attempts } => {
            log::info!("Time up. Final score: {}/{}", score, attempts)
        }
        GameEvent::ReturnedToMenu => log::info!("Returned to menu"),
    }
}

/// Map a DOM `KeyboardEvent.code` to a game key
pub fn key_from_code(code: &str) -> Option<Key> {
    match code {
        "Digit1" | "Numpad1" => Some(Key::Digit1),
        "Digit2" | "Numpad2" => Some(Key::Digit2),
        "Digit3" | "Numpad3" => Some(Key::Digit3),
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        "ArrowLeft" => Some(Key::Left),
        "ArrowRight" => Some(Key::Right),
        "Space" => Some(Key::Space),
        "KeyR" => Some(Key::R),
        "Escape" => Some(Key::Escape),
        "Enter" | "NumpadEnter" => Some(Key::Enter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    fn driver() -> FrameDriver {
        FrameDriver::new(&Settings::default(), 42, AudioManager::disabled())
    }

    #[test]
    fn test_short_frame_keeps_presses_for_later() {
        let mut d = driver();
        d.key_down(Key::Digit1, false);
        assert_eq!(d.advance(SIM_DT / 2.0, 0.0), 0);
        assert_eq!(d.state.phase, GamePhase::Menu);
        assert_eq!(d.advance(SIM_DT / 2.0, 0.0), 1);
        assert_eq!(d.state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut d = driver();
        assert_eq!(d.advance(5.0, 0.0), MAX_SUBSTEPS);
    }

    #[test]
    fn test_press_is_consumed_once() {
        let mut d = driver();
        d.key_down(Key::Up, false);
        d.advance(SIM_DT * 3.0, 0.0);
        assert_eq!(d.state.time_budget_secs, 70);
        assert!(d.input.pressed.is_empty());
    }

    #[test]
    fn test_auto_repeat_is_not_a_press() {
        let mut d = driver();
        d.key_down(Key::Up, false);
        for _ in 0..5 {
            d.key_down(Key::Up, true);
        }
        d.advance(SIM_DT, 0.0);
        assert_eq!(d.state.time_budget_secs, 70);
    }

    #[test]
    fn test_held_key_aims_every_tick() {
        let mut d = driver();
        d.key_down(Key::Digit1, false);
        d.advance(SIM_DT, 0.0);
        d.key_down(Key::Up, false);
        for _ in 0..10 {
            d.advance(SIM_DT, 0.0);
        }
        assert_eq!(d.state.power, 10);
        d.key_up(Key::Up);
        d.advance(SIM_DT, 0.0);
        assert_eq!(d.state.power, 10);
    }

    #[test]
    fn test_round_ends_on_clock() {
        let mut d = driver();
        d.key_down(Key::Digit2, false);
        d.advance(SIM_DT, 100.0);
        d.advance(SIM_DT, 160.0);
        assert_eq!(d.state.phase, GamePhase::GameOver);
        assert!(d.state.events.is_empty());
    }

    #[test]
    fn test_settings_budget_applies_to_menu() {
        let settings = Settings {
            time_budget_secs: 95,
            ..Default::default()
        };
        let d = FrameDriver::new(&settings, 1, AudioManager::disabled());
        assert_eq!(d.state.time_budget_secs, 90);
        assert_eq!(d.state.seed, 1);
    }

    #[test]
    fn test_dom_codes() {
        assert_eq!(key_from_code("Numpad3"), Some(Key::Digit3));
        assert_eq!(key_from_code("NumpadEnter"), Some(Key::Enter));
        assert_eq!(key_from_code("KeyR"), Some(Key::R));
        assert_eq!(key_from_code("KeyQ"), None);
    }
}
