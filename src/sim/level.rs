//! Difficulty presets
//!
//! Each level picks a hoop width, gravity, wind strength and how far the hoop
//! is raised above mid-screen.

use serde::{Deserialize, Serialize};

/// Difficulty level, numbered 1-3 on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    #[default]
    One,
    Two,
    Three,
}

/// Physics and hoop parameters for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Hoop rim width (pixels)
    pub hoop_width: f32,
    /// Downward acceleration (pixels/frame²)
    pub gravity: f32,
    /// Peak-to-peak horizontal wind kick per frame
    pub wind: f32,
    /// Hoop offset from mid-screen (negative = higher)
    pub hoop_offset_y: f32,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Level for a menu digit (1-3)
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Level::One => "Easy",
            Level::Two => "Medium",
            Level::Three => "Hard",
        }
    }

    pub fn config(&self) -> LevelConfig {
        match self {
            Level::One => LevelConfig {
                hoop_width: 100.0,
                gravity: 0.5,
                wind: 0.0,
                hoop_offset_y: 0.0,
            },
            Level::Two => LevelConfig {
                hoop_width: 80.0,
                gravity: 0.6,
                wind: 0.1,
                hoop_offset_y: -50.0,
            },
            Level::Three => LevelConfig {
                hoop_width: 60.0,
                gravity: 0.7,
                wind: 0.2,
                hoop_offset_y: -100.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_numbers_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_number(level.number()), Some(level));
        }
        assert_eq!(Level::from_number(0), None);
        assert_eq!(Level::from_number(4), None);
    }

    #[test]
    fn test_harder_levels_are_harder() {
        let easy = Level::One.config();
        let hard = Level::Three.config();
        assert!(hard.hoop_width < easy.hoop_width);
        assert!(hard.gravity > easy.gravity);
        assert!(hard.wind > easy.wind);
        assert_eq!(easy.wind, 0.0);
    }

    #[test]
    fn test_medium_preset() {
        let cfg = Level::Two.config();
        assert_eq!(cfg.hoop_width, 80.0);
        assert_eq!(cfg.gravity, 0.6);
        assert_eq!(cfg.wind, 0.1);
        assert_eq!(cfg.hoop_offset_y, -50.0);
    }
}
