//! Fire Flap - a one-button arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, obstacles, collisions, scoring)
//! - `renderer`: Scene building and the WebGPU pipeline
//! - `platform`: Adapter traits for audio and HUD
//! - `game`: Frame loop driver tying the pieces together
//! - `tuning`: Data-driven game balance

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference design resolution; gameplay geometry scales from this
    pub const REFERENCE_WIDTH: f32 = 1000.0;
    pub const REFERENCE_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;

    /// Per-frame physics (pixels/frame, not scaled with the viewport)
    pub const GRAVITY: f32 = 0.4;
    pub const JUMP_IMPULSE: f32 = -10.0;
    pub const MAX_FALL_SPEED: f32 = 8.0;
    pub const SCROLL_SPEED: f32 = 2.0;

    /// Obstacle layout
    pub const SPAWN_SPACING: f32 = 200.0;
    pub const GAP_SIZE: f32 = 250.0;
    pub const GAP_MARGIN: f32 = 100.0;
    pub const OBSTACLE_WIDTH: f32 = 80.0;

    /// Flame decoration
    pub const FLAME_COLUMN_WIDTH: f32 = 10.0;
    pub const FLAME_FLICKER_AMPLITUDE: f32 = 5.0;
    pub const FLAME_FLICKER_RATE: f32 = 0.1;
    pub const FLAME_JITTER: f32 = 20.0;
}
