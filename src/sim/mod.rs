//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame
//! - Seeded RNG only, passed in by the caller
//! - Obstacles kept in spawn order
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{collides, hits_bounds, misses_gap, overlaps_horizontally};
pub use spawn::{generate, should_spawn};
pub use state::{GameEvent, Obstacle, Phase, Player, Viewport, World};
pub use tick::{TickInput, jump, tick};
