//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame
//! - Seeded RNG only (wind)
//! - Time comes in through `TickInput`, never from a system clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod hoop;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{BounceResult, floor_bounce, hoop_entry, in_scoring_band, wall_bounce};
pub use hoop::Hoop;
pub use level::{Level, LevelConfig};
pub use state::{Ball, GameEvent, GamePhase, GameState, Surface};
pub use tick::{HeldKeys, Key, TickInput, tick};
