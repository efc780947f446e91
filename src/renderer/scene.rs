//! Frame building: turns the game state into one triangle list
//!
//! Pure function of `GameState`, so it runs (and is tested) without a GPU.

use super::shapes::{circle, line, rect, rect_outline};
use super::text::{text, text_centered, text_height};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Level};
use crate::{aim_direction, format_clock};

const TITLE_SCALE: f32 = 5.0;
const BODY_SCALE: f32 = 3.0;
const HINT_SCALE: f32 = 2.0;
const BALL_SEGMENTS: u32 = 32;
const NET_LINE_WIDTH: f32 = 2.0;
const AIM_LINE_LENGTH: f32 = 50.0;

/// Power meter frame: position and full-power size
const POWER_METER: (f32, f32, f32, f32) = (50.0, 90.0, 200.0, 20.0);

const INSTRUCTIONS: [&str; 5] = [
    "SPACE: Shoot ball",
    "UP/DOWN: Adjust power",
    "LEFT/RIGHT: Adjust angle",
    "R: Reset ball",
    "ESC: Menu",
];

/// Build the vertex list for the current frame (background is the clear color)
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    match state.phase {
        GamePhase::Menu => menu(state),
        GamePhase::Playing => playing(state),
        GamePhase::GameOver => game_over(state),
    }
}

fn menu(state: &GameState) -> Vec<Vertex> {
    let cx = CANVAS_WIDTH / 2.0;
    let mut v = Vec::new();
    v.extend(text_centered(cx, 100.0, "BASKETBALL SHOOTING GAME", TITLE_SCALE, colors::TEXT));
    v.extend(text_centered(
        cx,
        200.0,
        &format!(
            "Select Level (1-3) or adjust time (UP/DOWN): {} seconds",
            state.time_budget_secs
        ),
        BODY_SCALE,
        colors::TEXT,
    ));
    for level in Level::ALL {
        let y = 250.0 + level.number() as f32 * 40.0;
        let label = format!("Level {}: {}", level.number(), level.name());
        v.extend(text_centered(cx, y, &label, BODY_SCALE, colors::TEXT));
    }
    v
}

fn playing(state: &GameState) -> Vec<Vertex> {
    let mut v = Vec::new();
    let hoop = &state.hoop;
    let ball = &state.ball;

    v.extend(circle(ball.pos, ball.radius, colors::BALL, BALL_SEGMENTS));

    // Rim, then backboard on its right edge
    v.extend(rect(hoop.pos.x, hoop.pos.y, hoop.width, hoop.height, colors::HOOP));
    v.extend(rect(hoop.right(), hoop.top() - 50.0, 10.0, 100.0, colors::BACKBOARD));

    for (a, b) in hoop.net_strands().chain(hoop.net_links()) {
        v.extend(line(a, b, NET_LINE_WIDTH, colors::NET));
    }

    let (mx, my, mw, mh) = POWER_METER;
    let fill = mw * state.power as f32 / MAX_POWER as f32;
    if fill > 0.0 {
        v.extend(rect(mx, my, fill, mh, colors::POWER_FILL));
    }
    v.extend(rect_outline(mx, my, mw, mh, 2.0, colors::POWER_FRAME));

    let tip = ball.pos + aim_direction(state.angle as f32) * AIM_LINE_LENGTH;
    v.extend(line(ball.pos, tip, 2.0, colors::AIM_LINE));

    let score = format!("Score: {}/{}", state.score, state.attempts);
    v.extend(text(10.0, 10.0, &score, BODY_SCALE, colors::TEXT));
    let time = format!("Time: {}", format_clock(state.remaining_secs()));
    v.extend(text(10.0, 35.0, &time, BODY_SCALE, colors::TEXT));
    let level = format!("Level: {}", state.level.number());
    v.extend(text(10.0, 60.0, &level, BODY_SCALE, colors::LEVEL_TEXT));

    for (i, hint) in INSTRUCTIONS.iter().enumerate() {
        let y = 10.0 + i as f32 * (text_height(HINT_SCALE) + 8.0);
        v.extend(text(CANVAS_WIDTH - 210.0, y, hint, HINT_SCALE, colors::TEXT));
    }

    v
}

fn game_over(state: &GameState) -> Vec<Vertex> {
    let cx = CANVAS_WIDTH / 2.0;
    let mut v = Vec::new();
    v.extend(text_centered(cx, 200.0, "GAME OVER", TITLE_SCALE, colors::GAME_OVER));
    let final_score = format!("Final Score: {}/{}", state.score, state.attempts);
    v.extend(text_centered(cx, 250.0, &final_score, BODY_SCALE, colors::TEXT));
    v.extend(text_centered(
        cx,
        300.0,
        "Press ENTER to return to menu",
        BODY_SCALE,
        colors::TEXT,
    ));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Key, TickInput, tick};

    fn has_color(verts: &[Vertex], color: [f32; 4]) -> bool {
        verts.iter().any(|v| v.color == color)
    }

    fn start(state: &mut GameState, key: Key) {
        let input = TickInput {
            pressed: vec![key],
            ..Default::default()
        };
        tick(state, &input);
    }

    #[test]
    fn test_menu_frame_has_no_ball() {
        let state = GameState::new(1);
        let verts = build_frame(&state);
        assert!(!verts.is_empty());
        assert!(!has_color(&verts, colors::BALL));
        assert_eq!(verts.len() % 3, 0);
    }

    #[test]
    fn test_playing_frame_draws_ball_hoop_and_net() {
        let mut state = GameState::new(1);
        start(&mut state, Key::Digit1);
        let verts = build_frame(&state);
        assert!(has_color(&verts, colors::BALL));
        assert!(has_color(&verts, colors::HOOP));
        assert!(has_color(&verts, colors::NET));
        assert!(has_color(&verts, colors::LEVEL_TEXT));
        assert_eq!(verts.len() % 3, 0);
    }

    #[test]
    fn test_power_meter_fill_tracks_power() {
        let (mx, my, mw, mh) = POWER_METER;
        // Red vertices inside the meter box; the rim is red too but far right
        let fill_right_edge = |verts: &[Vertex]| {
            verts
                .iter()
                .filter(|v| v.color == colors::POWER_FILL)
                .filter(|v| v.position[0] <= mx + mw && (my..=my + mh).contains(&v.position[1]))
                .map(|v| v.position[0])
                .fold(None, |acc: Option<f32>, x| Some(acc.map_or(x, |a| a.max(x))))
        };

        let mut state = GameState::new(1);
        start(&mut state, Key::Digit1);
        assert_eq!(fill_right_edge(&build_frame(&state)), None);

        state.power = 50;
        let edge = fill_right_edge(&build_frame(&state)).expect("meter fill drawn");
        assert!((edge - (mx + 100.0)).abs() < 1e-3);
    }

    #[test]
    fn test_game_over_frame() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let verts = build_frame(&state);
        assert!(has_color(&verts, colors::GAME_OVER));
        assert!(!has_color(&verts, colors::BALL));
    }
}
