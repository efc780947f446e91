//! Hoop Shot - A single-screen arcade basketball shooting game
//!
//! Core modules:
//! - `sim`: Simulation (ball physics, hoop scoring, menu/level state machine)
//! - `renderer`: WebGPU rendering pipeline and frame building
//! - `audio`: Best-effort sound cues
//! - `platform`: Native/browser shells and the fixed-step frame driver
//! - `settings`: Player-facing configuration

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundEffect};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (one physics step per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame the accumulator accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Logical canvas size in pixels (y grows downward)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// The floor is the bottom edge of the canvas
    pub const FLOOR_Y: f32 = CANVAS_HEIGHT;
    pub const WINDOW_TITLE: &str = "Basketball Shooting Game";

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 30.0;
    /// Where the ball sits while aiming
    pub const LAUNCH_POS: Vec2 = Vec2::new(CANVAS_WIDTH / 4.0, CANVAS_HEIGHT - 100.0);
    /// Launch velocity per unit of power (pixels/frame)
    pub const LAUNCH_SCALE: f32 = 0.2;

    /// Velocity kept (and reversed) on floor/wall contact
    pub const RESTITUTION: f32 = 0.7;
    /// Post-bounce speed above which the bounce cue plays
    pub const BOUNCE_CUE_MIN_SPEED: f32 = 2.0;
    /// Both velocity components below this count as "stopped"
    pub const REST_SPEED: f32 = 0.1;
    /// How far above the floor contact point a stopped ball may sit
    pub const REST_FLOOR_MARGIN: f32 = 10.0;

    /// Aiming limits
    pub const MAX_POWER: u8 = 100;
    pub const MAX_ANGLE: u8 = 90;
    pub const DEFAULT_POWER: u8 = 0;
    pub const DEFAULT_ANGLE: u8 = 45;

    /// Hoop geometry
    pub const HOOP_HEIGHT: f32 = 10.0;
    /// Height of the scoring band at the top of the hoop
    pub const HOOP_SCORE_BAND: f32 = 10.0;
    /// Hoop left edge sits this far from the right side of the canvas
    pub const HOOP_INSET_RIGHT: f32 = 150.0;
    /// Decorative net: vertical strand pairs, depth and left inset
    pub const NET_STRANDS: usize = 6;
    pub const NET_DEPTH: f32 = 60.0;
    pub const NET_INSET: f32 = 10.0;

    /// Round length (seconds)
    pub const DEFAULT_TIME_BUDGET: u32 = 60;
    pub const MIN_TIME_BUDGET: u32 = 10;
    pub const MAX_TIME_BUDGET: u32 = 120;
    pub const TIME_BUDGET_STEP: u32 = 10;
}

/// Format whole seconds as `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Unit direction for an aim angle in degrees (0 = right, 90 = straight up).
///
/// Canvas y grows downward, so "up" is negative y.
#[inline]
pub fn aim_direction(angle_deg: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    Vec2::new(theta.cos(), -theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(119), "01:59");
    }

    #[test]
    fn test_aim_direction_points_up_at_90() {
        let dir = aim_direction(90.0);
        assert!(dir.x.abs() < 1e-6);
        assert!((dir.y + 1.0).abs() < 1e-6);
    }
}
