//! Fixed timestep simulation tick
//!
//! One call per 60 Hz frame: apply key presses to the menu/level state
//! machine, check the round clock, then either aim or advance the shot.

use rand::Rng;

use super::collision::{floor_bounce, hoop_entry, wall_bounce};
use super::level::Level;
use super::state::{GameEvent, GamePhase, GameState};
use crate::aim_direction;
use crate::consts::*;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit1,
    Digit2,
    Digit3,
    Up,
    Down,
    Left,
    Right,
    /// Launch
    Space,
    /// Reset ball
    R,
    Escape,
    Enter,
}

/// Continuous (held-down) key state used for aiming
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Record a press or release; returns false for keys that are never held
    pub fn set(&mut self, key: Key, down: bool) -> bool {
        match key {
            Key::Up => self.up = down,
            Key::Down => self.down = down,
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            _ => return false,
        }
        true
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Clock reading in seconds
    pub now: f64,
    /// Keys currently held
    pub held: HeldKeys,
    /// Discrete presses since the previous tick, oldest first
    pub pressed: Vec<Key>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.now = input.now;

    for &key in &input.pressed {
        handle_key(state, key);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    if state.remaining_secs() == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::TimeUp {
            score: state.score,
            attempts: state.attempts,
        });
        return;
    }

    if state.shooting {
        step_shot(state);
    } else {
        aim(state, &input.held);
    }
}

/// Menu/level state machine; unrecognised keys are ignored
fn handle_key(state: &mut GameState, key: Key) {
    match state.phase {
        GamePhase::Menu => match key {
            Key::Digit1 => start_level(state, Level::One),
            Key::Digit2 => start_level(state, Level::Two),
            Key::Digit3 => start_level(state, Level::Three),
            Key::Up => state.adjust_time_budget(1),
            Key::Down => state.adjust_time_budget(-1),
            _ => {}
        },
        GamePhase::Playing => match key {
            Key::Space => launch(state),
            Key::R => state.reset_ball(),
            Key::Escape => {
                state.reset_ball();
                state.phase = GamePhase::Menu;
                state.events.push(GameEvent::ReturnedToMenu);
            }
            _ => {}
        },
        GamePhase::GameOver => {
            if key == Key::Enter {
                state.phase = GamePhase::Menu;
                state.events.push(GameEvent::ReturnedToMenu);
            }
        }
    }
}

fn start_level(state: &mut GameState, level: Level) {
    state.set_level(level);
    state.start_round(state.now);
    state.events.push(GameEvent::LevelStarted(level));
}

/// Adjust power and angle from held keys, one unit per frame
fn aim(state: &mut GameState, held: &HeldKeys) {
    if held.up {
        state.power = (state.power + 1).min(MAX_POWER);
    }
    if held.down {
        state.power = state.power.saturating_sub(1);
    }
    // Left raises the angle, right lowers it
    if held.left {
        state.angle = (state.angle + 1).min(MAX_ANGLE);
    }
    if held.right {
        state.angle = state.angle.saturating_sub(1);
    }
}

/// Launch the ball from rest using the current power and angle
fn launch(state: &mut GameState) {
    // No shot on the tick the clock runs out
    if state.shooting || state.remaining_secs() == 0 {
        return;
    }
    state.attempts += 1;
    state.shooting = true;
    state.shot_scored = false;
    state.ball.vel = aim_direction(state.angle as f32) * (state.power as f32 * LAUNCH_SCALE);
    state.events.push(GameEvent::Launched {
        attempts: state.attempts,
    });
}

/// End the shot if the ball has come to rest on the floor
fn settle_if_resting(state: &mut GameState) -> bool {
    if state.ball.is_stopped() && state.ball.is_near_floor() {
        state.reset_ball();
        return true;
    }
    false
}

/// Advance an airborne ball by one frame
fn step_shot(state: &mut GameState) {
    // A ball handed in already at rest ends its shot without another step
    if settle_if_resting(state) {
        return;
    }

    // Fresh wind draw every frame
    let wind = state.config.wind * (state.rng.random::<f32>() - 0.5);
    let ball = &mut state.ball;
    ball.vel.x += wind;
    ball.pos += ball.vel;
    ball.vel.y += state.config.gravity;

    // One score per launch
    if !state.shot_scored && hoop_entry(&state.ball, &state.hoop) {
        state.score += 1;
        state.shot_scored = true;
        state.events.push(GameEvent::Scored { score: state.score });
    }

    for bounce in [
        floor_bounce(&mut state.ball, FLOOR_Y),
        wall_bounce(&mut state.ball, CANVAS_WIDTH),
    ] {
        if bounce.audible() {
            state.events.push(GameEvent::Bounce {
                surface: bounce.surface,
                speed: bounce.speed,
            });
        }
    }

    settle_if_resting(state);
}
