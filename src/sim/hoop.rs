//! Hoop geometry and its decorative net

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::LevelConfig;
use crate::consts::*;

/// The rim: an axis-aligned rectangle with its top-left corner at `pos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hoop {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Net strand endpoints, stored as (top, bottom) pairs
    pub net: Vec<Vec2>,
}

impl Hoop {
    /// Build the hoop for a level; the net is generated to match
    pub fn for_level(config: &LevelConfig) -> Self {
        let mut hoop = Self {
            pos: Vec2::new(
                CANVAS_WIDTH - HOOP_INSET_RIGHT,
                CANVAS_HEIGHT / 2.0 + config.hoop_offset_y,
            ),
            width: config.hoop_width,
            height: HOOP_HEIGHT,
            net: Vec::with_capacity(NET_STRANDS * 2),
        };
        hoop.regenerate_net();
        hoop
    }

    /// Rebuild net points from the current position and width.
    ///
    /// Must be called whenever `pos` or `width` changes.
    pub fn regenerate_net(&mut self) {
        self.net.clear();
        let spacing = self.width / NET_STRANDS as f32;
        for i in 0..NET_STRANDS {
            let x = self.pos.x + NET_INSET + i as f32 * spacing;
            self.net.push(Vec2::new(x, self.pos.y));
            self.net.push(Vec2::new(x, self.pos.y + NET_DEPTH));
        }
    }

    /// Left edge x
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Rim top y
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// Vertical strands as (top, bottom) segments
    pub fn net_strands(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.net.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Segments joining neighbouring strands along the top and the bottom
    pub fn net_links(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.net
            .chunks_exact(2)
            .zip(self.net.chunks_exact(2).skip(1))
            .flat_map(|(a, b)| [(a[0], b[0]), (a[1], b[1])])
    }
}
