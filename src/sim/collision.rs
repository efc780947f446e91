//! Collision detection and response
//!
//! Everything is axis-aligned: the floor, the two side walls, and the thin
//! scoring band along the top of the hoop.

use super::hoop::Hoop;
use super::state::{Ball, Surface};
use crate::consts::*;

/// Result of a bounce check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceResult {
    /// Whether the ball touched the surface
    pub hit: bool,
    pub surface: Surface,
    /// Magnitude of the reflected velocity component
    pub speed: f32,
}

impl BounceResult {
    pub fn miss(surface: Surface) -> Self {
        Self {
            hit: false,
            surface,
            speed: 0.0,
        }
    }

    /// Loud enough to play the bounce cue
    pub fn audible(&self) -> bool {
        self.hit && self.speed > BOUNCE_CUE_MIN_SPEED
    }
}

/// Reflect one velocity component with energy loss
#[inline]
pub fn reflect_component(v: f32, restitution: f32) -> f32 {
    -v * restitution
}

/// Keep the ball above the floor, bouncing it if it went through
pub fn floor_bounce(ball: &mut Ball, floor_y: f32) -> BounceResult {
    if ball.pos.y + ball.radius <= floor_y {
        return BounceResult::miss(Surface::Floor);
    }
    ball.pos.y = floor_y - ball.radius;
    ball.vel.y = reflect_component(ball.vel.y, RESTITUTION);
    BounceResult {
        hit: true,
        surface: Surface::Floor,
        speed: ball.vel.y.abs(),
    }
}

/// Keep the ball between the side walls at `0` and `width`
pub fn wall_bounce(ball: &mut Ball, width: f32) -> BounceResult {
    let surface = if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        Surface::LeftWall
    } else if ball.pos.x + ball.radius > width {
        ball.pos.x = width - ball.radius;
        Surface::RightWall
    } else {
        return BounceResult::miss(Surface::LeftWall);
    };
    ball.vel.x = reflect_component(ball.vel.x, RESTITUTION);
    BounceResult {
        hit: true,
        surface,
        speed: ball.vel.x.abs(),
    }
}

/// Ball centre lies within the hoop span and the band at its top edge
pub fn in_scoring_band(ball: &Ball, hoop: &Hoop) -> bool {
    let p = ball.pos;
    (hoop.left()..=hoop.right()).contains(&p.x)
        && (hoop.top()..=hoop.top() + HOOP_SCORE_BAND).contains(&p.y)
}

/// Ball drops through the hoop: inside the band and moving down
pub fn hoop_entry(ball: &Ball, hoop: &Hoop) -> bool {
    ball.vel.y > 0.0 && in_scoring_band(ball, hoop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Level;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: BALL_RADIUS,
        }
    }

    #[test]
    fn test_floor_bounce_reflects_and_clamps() {
        let mut ball = ball_at(300.0, 590.0, 1.0, 10.0);
        let result = floor_bounce(&mut ball, FLOOR_Y);
        assert!(result.hit);
        assert_eq!(ball.pos.y, FLOOR_Y - BALL_RADIUS);
        assert!((ball.vel.y - (-7.0)).abs() < 1e-5);
        assert!(result.audible());
    }

    #[test]
    fn test_floor_bounce_quiet_when_slow() {
        let mut ball = ball_at(300.0, 575.0, 0.0, 2.0);
        let result = floor_bounce(&mut ball, FLOOR_Y);
        assert!(result.hit);
        assert!((result.speed - 1.4).abs() < 1e-5);
        assert!(!result.audible());
    }

    #[test]
    fn test_resting_on_floor_is_not_a_bounce() {
        let mut ball = ball_at(300.0, FLOOR_Y - BALL_RADIUS, 0.0, 0.0);
        assert!(!floor_bounce(&mut ball, FLOOR_Y).hit);
    }

    #[test]
    fn test_wall_bounce_both_sides() {
        let mut left = ball_at(10.0, 300.0, -5.0, 0.0);
        let result = wall_bounce(&mut left, CANVAS_WIDTH);
        assert_eq!(result.surface, Surface::LeftWall);
        assert_eq!(left.pos.x, BALL_RADIUS);
        assert!((left.vel.x - 3.5).abs() < 1e-5);

        let mut right = ball_at(790.0, 300.0, 5.0, 0.0);
        let result = wall_bounce(&mut right, CANVAS_WIDTH);
        assert_eq!(result.surface, Surface::RightWall);
        assert_eq!(right.pos.x, CANVAS_WIDTH - BALL_RADIUS);
        assert!((right.vel.x + 3.5).abs() < 1e-5);

        let mut middle = ball_at(400.0, 300.0, 5.0, 0.0);
        assert!(!wall_bounce(&mut middle, CANVAS_WIDTH).hit);
    }

    #[test]
    fn test_hoop_entry_requires_descent() {
        let hoop = Hoop::for_level(&Level::One.config());
        let down = ball_at(hoop.left() + 50.0, hoop.top() + 5.0, 0.0, 3.0);
        assert!(hoop_entry(&down, &hoop));

        let up = ball_at(hoop.left() + 50.0, hoop.top() + 5.0, 0.0, -3.0);
        assert!(in_scoring_band(&up, &hoop));
        assert!(!hoop_entry(&up, &hoop));
    }

    #[test]
    fn test_hoop_band_edges_inclusive() {
        let hoop = Hoop::for_level(&Level::One.config());
        let corner = ball_at(hoop.right(), hoop.top() + HOOP_SCORE_BAND, 0.0, 1.0);
        assert!(hoop_entry(&corner, &hoop));
        let below = ball_at(hoop.left(), hoop.top() + HOOP_SCORE_BAND + 0.5, 0.0, 1.0);
        assert!(!hoop_entry(&below, &hoop));
        let outside = ball_at(hoop.left() - 0.5, hoop.top(), 0.0, 1.0);
        assert!(!hoop_entry(&outside, &hoop));
    }
}
