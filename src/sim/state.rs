//! World state and core simulation types
//!
//! Everything the physics step reads or writes lives in [`World`]. The
//! renderer only ever borrows it immutably.

use glam::Vec2;

use crate::consts::{REFERENCE_HEIGHT, REFERENCE_WIDTH};
use crate::tuning::Tuning;

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const REFERENCE: Viewport = Viewport {
        width: REFERENCE_WIDTH,
        height: REFERENCE_HEIGHT,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Per-axis scale relative to the reference design resolution
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.width / REFERENCE_WIDTH, self.height / REFERENCE_HEIGHT)
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the first jump
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Collided; only a reset leaves this phase
    Over,
}

/// Things that happened during a tick, for audio/HUD adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    Scored { score: u32 },
    GameOver { score: u32 },
}

/// The falling player entity
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Vertical velocity in pixels/frame (positive = down)
    pub vel_y: f32,
    pub size: Vec2,
}

impl Player {
    pub fn spawn(viewport: Viewport, tuning: &Tuning) -> Self {
        let scale = viewport.scale();
        Self {
            pos: Vec2::new(tuning.player_spawn.0, tuning.player_spawn.1) * scale,
            vel_y: 0.0,
            size: Vec2::new(tuning.player_size.0, tuning.player_size.1) * scale,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A top/bottom obstacle pair sharing one horizontal slot
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Bottom edge of the top segment (top of the gap)
    pub top_height: f32,
    /// Top edge of the bottom segment (bottom of the gap)
    pub bottom_y: f32,
    pub width: f32,
    /// Set once the player has cleared this pair and it has been scored
    pub passed: bool,
}

impl Obstacle {
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub player: Player,
    /// Active obstacles in spawn order (left to right on screen)
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: Phase,
}

impl World {
    pub fn new(viewport: Viewport, tuning: Tuning) -> Self {
        Self {
            player: Player::spawn(viewport, &tuning),
            viewport,
            tuning,
            obstacles: Vec::new(),
            score: 0,
            phase: Phase::NotStarted,
        }
    }

    /// Return to a fresh NotStarted run, whatever the current phase
    pub fn reset(&mut self) {
        self.player = Player::spawn(self.viewport, &self.tuning);
        self.obstacles.clear();
        self.score = 0;
        self.phase = Phase::NotStarted;
    }

    /// Adopt a new surface size, scaling all geometry proportionally
    pub fn resize(&mut self, viewport: Viewport) {
        if !viewport.is_valid() || !self.viewport.is_valid() || viewport == self.viewport {
            return;
        }
        let ratio = Vec2::new(
            viewport.width / self.viewport.width,
            viewport.height / self.viewport.height,
        );

        self.player.pos *= ratio;
        self.player.size *= ratio;
        for obstacle in &mut self.obstacles {
            obstacle.x *= ratio.x;
            obstacle.width *= ratio.x;
            obstacle.top_height *= ratio.y;
            obstacle.bottom_y *= ratio.y;
        }
        self.viewport = viewport;
    }

    /// True once the first jump has happened
    pub fn is_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    /// False once a collision has ended the run
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Over
    }

    /// End the run. Returns false if it was already over.
    pub fn game_over(&mut self) -> bool {
        if self.phase == Phase::Over {
            return false;
        }
        self.phase = Phase::Over;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_at_reference_resolution() {
        let world = World::new(Viewport::REFERENCE, Tuning::default());
        assert_eq!(world.player.pos, Vec2::new(50.0, 300.0));
        assert_eq!(world.player.size, Vec2::new(50.0, 30.0));
        assert_eq!(world.phase, Phase::NotStarted);
        assert!(!world.is_started());
        assert!(world.is_running());
    }

    #[test]
    fn test_spawn_scales_with_viewport() {
        let world = World::new(Viewport::new(2000.0, 300.0), Tuning::default());
        assert_eq!(world.player.pos, Vec2::new(100.0, 150.0));
        assert_eq!(world.player.size, Vec2::new(100.0, 15.0));
    }

    #[test]
    fn test_reset_from_over() {
        let mut world = World::new(Viewport::REFERENCE, Tuning::default());
        world.phase = Phase::Over;
        world.score = 7;
        world.player.pos.y = 512.0;
        world.player.vel_y = 8.0;
        world.obstacles.push(Obstacle {
            x: 400.0,
            top_height: 150.0,
            bottom_y: 400.0,
            width: 80.0,
            passed: false,
        });

        world.reset();

        assert_eq!(world.phase, Phase::NotStarted);
        assert_eq!(world.score, 0);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.player, Player::spawn(Viewport::REFERENCE, &Tuning::default()));
    }

    #[test]
    fn test_game_over_is_idempotent() {
        let mut world = World::new(Viewport::REFERENCE, Tuning::default());
        world.phase = Phase::Running;
        assert!(world.game_over());
        assert!(!world.game_over());
        assert_eq!(world.phase, Phase::Over);
        assert!(!world.is_running());
    }

    #[test]
    fn test_resize_scales_geometry() {
        let mut world = World::new(Viewport::REFERENCE, Tuning::default());
        world.obstacles.push(Obstacle {
            x: 500.0,
            top_height: 200.0,
            bottom_y: 450.0,
            width: 80.0,
            passed: false,
        });

        world.resize(Viewport::new(500.0, 1200.0));

        assert_eq!(world.player.pos, Vec2::new(25.0, 600.0));
        assert_eq!(world.player.size, Vec2::new(25.0, 60.0));
        let o = &world.obstacles[0];
        assert_eq!((o.x, o.width), (250.0, 40.0));
        assert_eq!((o.top_height, o.bottom_y), (400.0, 900.0));
    }

    #[test]
    fn test_resize_ignores_degenerate_surface() {
        let mut world = World::new(Viewport::REFERENCE, Tuning::default());
        world.resize(Viewport::new(0.0, 600.0));
        assert_eq!(world.viewport, Viewport::REFERENCE);
        assert_eq!(world.player.pos, Vec2::new(50.0, 300.0));
    }
}
