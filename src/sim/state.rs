//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one owned `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hoop::Hoop;
use super::level::{Level, LevelConfig};
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level select and time budget adjustment
    #[default]
    Menu,
    /// A timed round is running
    Playing,
    /// Round ended on time, showing the final score
    GameOver,
}

/// Surfaces the ball can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Floor,
    LeftWall,
    RightWall,
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round started on this level
    LevelStarted(Level),
    /// Ball launched; carries the new attempt count
    Launched { attempts: u32 },
    /// Hard enough bounce to be heard
    Bounce { surface: Surface, speed: f32 },
    /// Ball went through the hoop; carries the new score
    Scored { score: u32 },
    /// Time ran out
    TimeUp { score: u32, attempts: u32 },
    /// Back on the menu (abandoned run or after game over)
    ReturnedToMenu,
}

/// The basketball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: LAUNCH_POS,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Put the ball back on the launch spot, motionless
    pub fn reset(&mut self) {
        self.pos = LAUNCH_POS;
        self.vel = Vec2::ZERO;
    }

    /// Both velocity components are below the rest threshold
    pub fn is_stopped(&self) -> bool {
        self.vel.x.abs() < REST_SPEED && self.vel.y.abs() < REST_SPEED
    }

    /// Sitting on (or within a small margin of) the floor
    pub fn is_near_floor(&self) -> bool {
        self.pos.y > FLOOR_Y - self.radius - REST_FLOOR_MARGIN
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed used for the wind RNG
    pub seed: u64,
    /// Wind RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub level: Level,
    /// Parameters of `level`, applied when the level starts
    pub config: LevelConfig,
    pub hoop: Hoop,
    pub ball: Ball,
    /// Ball is airborne after a launch
    pub shooting: bool,
    /// The current shot already scored
    pub shot_scored: bool,
    /// Shot power, 0-100
    pub power: u8,
    /// Shot angle in degrees, 0-90
    pub angle: u8,
    pub score: u32,
    pub attempts: u32,
    /// Round length, adjustable from the menu
    pub time_budget_secs: u32,
    /// Clock reading (seconds) when the round started
    pub started_at: f64,
    /// Latest clock reading seen by `tick`
    pub now: f64,
    /// Pending events for the frame driver
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state sitting on the menu
    pub fn new(seed: u64) -> Self {
        let level = Level::default();
        let config = level.config();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            level,
            config,
            hoop: Hoop::for_level(&config),
            ball: Ball::default(),
            shooting: false,
            shot_scored: false,
            power: DEFAULT_POWER,
            angle: DEFAULT_ANGLE,
            score: 0,
            attempts: 0,
            time_budget_secs: DEFAULT_TIME_BUDGET,
            started_at: 0.0,
            now: 0.0,
            events: Vec::new(),
        }
    }

    /// Switch level, rebuilding hoop and net geometry
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.config = level.config();
        self.hoop = Hoop::for_level(&self.config);
    }

    /// Begin a fresh round at `now`
    pub fn start_round(&mut self, now: f64) {
        self.phase = GamePhase::Playing;
        self.started_at = now;
        self.now = now;
        self.score = 0;
        self.attempts = 0;
        self.reset_ball();
    }

    /// Return the ball to the launch spot and end any shot in progress
    pub fn reset_ball(&mut self) {
        self.ball.reset();
        self.shooting = false;
    }

    /// Nudge the round length by whole steps, staying within limits
    pub fn adjust_time_budget(&mut self, steps: i32) {
        let next = self.time_budget_secs as i64 + steps as i64 * TIME_BUDGET_STEP as i64;
        self.time_budget_secs = next.clamp(MIN_TIME_BUDGET as i64, MAX_TIME_BUDGET as i64) as u32;
    }

    /// Whole seconds since the round started
    pub fn elapsed_secs(&self) -> u32 {
        (self.now - self.started_at).max(0.0).floor() as u32
    }

    /// Seconds left in the round (0 once the round is over)
    pub fn remaining_secs(&self) -> u32 {
        match self.phase {
            GamePhase::Menu => self.time_budget_secs,
            GamePhase::Playing => self.time_budget_secs.saturating_sub(self.elapsed_secs()),
            GamePhase::GameOver => 0,
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_menu() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.level, Level::One);
        assert_eq!(state.time_budget_secs, 60);
        assert_eq!(state.angle, 45);
        assert_eq!(state.power, 0);
        assert_eq!(state.ball.pos, Vec2::new(200.0, 500.0));
        assert!(!state.shooting);
    }

    #[test]
    fn test_time_budget_clamps() {
        let mut state = GameState::new(1);
        state.adjust_time_budget(100);
        assert_eq!(state.time_budget_secs, 120);
        state.adjust_time_budget(-100);
        assert_eq!(state.time_budget_secs, 10);
        state.adjust_time_budget(2);
        assert_eq!(state.time_budget_secs, 30);
    }

    #[test]
    fn test_remaining_time_floors_elapsed() {
        let mut state = GameState::new(1);
        state.start_round(10.0);
        state.now = 10.9;
        assert_eq!(state.remaining_secs(), 60);
        state.now = 11.0;
        assert_eq!(state.remaining_secs(), 59);
        state.now = 500.0;
        assert_eq!(state.remaining_secs(), 0);
    }

    #[test]
    fn test_start_round_resets_counters() {
        let mut state = GameState::new(1);
        state.score = 3;
        state.attempts = 7;
        state.shooting = true;
        state.ball.pos = Vec2::new(10.0, 10.0);
        state.start_round(0.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.attempts, 0);
        assert!(!state.shooting);
        assert_eq!(state.ball.pos, LAUNCH_POS);
    }

    #[test]
    fn test_ball_rest_checks() {
        let mut ball = Ball::default();
        assert!(ball.is_stopped());
        assert!(!ball.is_near_floor());
        ball.pos.y = FLOOR_Y - ball.radius;
        assert!(ball.is_near_floor());
        ball.vel.x = 0.2;
        assert!(!ball.is_stopped());
    }
}
