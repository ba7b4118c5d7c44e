//! Data-driven game balance
//!
//! All values are authored at the reference resolution (1000x600). Lengths
//! are scaled by the viewport at the point of use; per-frame speeds are not.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to velocity each frame
    pub gravity: f32,
    /// Velocity assigned on jump (negative = upward)
    pub jump_impulse: f32,
    /// One-sided clamp on downward velocity
    pub max_fall_speed: f32,
    /// Leftward obstacle motion per frame
    pub scroll_speed: f32,
    /// Distance from the right edge the newest obstacle must clear before another spawns
    pub spawn_spacing: f32,
    /// Vertical size of the passable gap
    pub gap_size: f32,
    /// Minimum distance between the gap and the top/bottom screen edges
    pub gap_margin: f32,
    pub obstacle_width: f32,
    pub player_spawn: (f32, f32),
    pub player_size: (f32, f32),
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            max_fall_speed: MAX_FALL_SPEED,
            scroll_speed: SCROLL_SPEED,
            spawn_spacing: SPAWN_SPACING,
            gap_size: GAP_SIZE,
            gap_margin: GAP_MARGIN,
            obstacle_width: OBSTACLE_WIDTH,
            player_spawn: (PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            player_size: (PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }
}
