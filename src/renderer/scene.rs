//! Scene building: world state to a vertex list
//!
//! `build` only borrows the world. Flame flicker and jitter are applied to
//! the drawn geometry alone; collision keeps using `top_height`/`bottom_y`.

use glam::Vec2;
use rand::Rng;

use super::shapes;
use super::sprite::Sprite;
use super::vertex::{Vertex, colors};
use crate::consts::{FLAME_COLUMN_WIDTH, FLAME_FLICKER_AMPLITUDE, FLAME_FLICKER_RATE, FLAME_JITTER};
use crate::settings::Settings;
use crate::sim::{Obstacle, Phase, Viewport, World};

/// Flame color stops, top to bottom
const FLAME_STOPS: [(f32, [f32; 4]); 3] = [
    (0.0, colors::FLAME_BASE),
    (0.5, colors::FLAME_MID),
    (1.0, colors::FLAME_TIP),
];

/// One frame's worth of draw data
#[derive(Debug, Clone)]
pub struct Scene {
    pub viewport: Viewport,
    pub clear_color: [f32; 4],
    /// Triangle list in screen pixels
    pub vertices: Vec<Vertex>,
}

/// Build the scene for the current world state.
///
/// `rng` drives the per-column flame jitter and should be a separate stream
/// from the simulation's so visuals never perturb obstacle generation.
pub fn build<R: Rng>(
    world: &World,
    frame: u32,
    settings: &Settings,
    sprite: Option<&Sprite>,
    rng: &mut R,
) -> Scene {
    let viewport = world.viewport;
    let mut vertices = Vec::new();

    for obstacle in &world.obstacles {
        obstacle_vertices(obstacle, viewport, frame, settings, rng, &mut vertices);
    }

    let player = &world.player;
    match sprite.filter(|s| s.is_ready()) {
        Some(sprite) => vertices.extend(sprite.place(player.pos, player.size)),
        None => vertices.extend(shapes::rect(player.pos, player.size, colors::PLAYER_FALLBACK)),
    }

    if world.phase == Phase::NotStarted {
        vertices.extend(shapes::rect(
            Vec2::ZERO,
            Vec2::new(viewport.width, viewport.height),
            colors::START_OVERLAY,
        ));
    }

    Scene {
        viewport,
        clear_color: colors::SKY,
        vertices,
    }
}

fn obstacle_vertices<R: Rng>(
    obstacle: &Obstacle,
    viewport: Viewport,
    frame: u32,
    settings: &Settings,
    rng: &mut R,
    out: &mut Vec<Vertex>,
) {
    let top = (Vec2::new(obstacle.x, 0.0), Vec2::new(obstacle.width, obstacle.top_height));
    let bottom = (
        Vec2::new(obstacle.x, obstacle.bottom_y),
        Vec2::new(obstacle.width, viewport.height - obstacle.bottom_y),
    );

    for (pos, size) in [top, bottom] {
        if settings.flame_effects {
            let flicker = flicker(frame) * settings.flicker_scale();
            flames(pos, size, flicker, rng, out);
        } else {
            out.extend(shapes::rect(pos, size, colors::OBSTACLE));
        }
    }
}

/// Shared flicker offset for all flames this frame
pub fn flicker(frame: u32) -> f32 {
    (frame as f32 * FLAME_FLICKER_RATE).sin() * FLAME_FLICKER_AMPLITUDE
}

/// Columns of gradient flame filling a segment, bottom-aligned with it
fn flames<R: Rng>(pos: Vec2, size: Vec2, flicker: f32, rng: &mut R, out: &mut Vec<Vertex>) {
    let base_height = size.y + flicker;
    let columns = (size.x / FLAME_COLUMN_WIDTH).floor() as u32;
    let flame_y = pos.y + size.y - base_height;

    for i in 0..columns {
        let flame_x = pos.x + i as f32 * FLAME_COLUMN_WIDTH;
        let flame_height = base_height + rng.random::<f32>() * FLAME_JITTER;
        out.extend(shapes::vertical_gradient(
            Vec2::new(flame_x, flame_y),
            Vec2::new(FLAME_COLUMN_WIDTH, flame_height),
            &FLAME_STOPS,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world_with_obstacle() -> World {
        let mut world = World::new(Viewport::REFERENCE, Tuning::default());
        world.phase = Phase::Running;
        world.obstacles.push(Obstacle {
            x: 400.0,
            top_height: 150.0,
            bottom_y: 400.0,
            width: 80.0,
            passed: false,
        });
        world
    }

    fn has_overlay(scene: &Scene) -> bool {
        scene
            .vertices
            .iter()
            .any(|v| v.color == colors::START_OVERLAY)
    }

    #[test]
    fn test_overlay_only_before_start() {
        let mut world = World::new(Viewport::REFERENCE, Tuning::default());
        let mut rng = Pcg32::seed_from_u64(5);
        let settings = Settings::default();

        assert!(has_overlay(&build(&world, 0, &settings, None, &mut rng)));
        world.phase = Phase::Running;
        assert!(!has_overlay(&build(&world, 0, &settings, None, &mut rng)));
        world.phase = Phase::Over;
        assert!(!has_overlay(&build(&world, 0, &settings, None, &mut rng)));
    }

    #[test]
    fn test_fallback_box_without_sprite() {
        let world = world_with_obstacle();
        let mut rng = Pcg32::seed_from_u64(5);
        let settings = Settings::default();

        let scene = build(&world, 0, &settings, None, &mut rng);
        assert_eq!(
            scene
                .vertices
                .iter()
                .filter(|v| v.color == colors::PLAYER_FALLBACK)
                .count(),
            6
        );

        let broken = Sprite::default();
        let scene = build(&world, 0, &settings, Some(&broken), &mut rng);
        assert!(scene.vertices.iter().any(|v| v.color == colors::PLAYER_FALLBACK));

        let bird = Sprite::bird();
        let scene = build(&world, 0, &settings, Some(&bird), &mut rng);
        assert!(!scene.vertices.iter().any(|v| v.color == colors::PLAYER_FALLBACK));
        assert!(scene.vertices.iter().any(|v| v.color == colors::BIRD_BODY));
    }

    #[test]
    fn test_flames_per_segment() {
        let world = world_with_obstacle();
        let mut rng = Pcg32::seed_from_u64(5);
        let scene = build(&world, 0, &Settings::default(), None, &mut rng);

        // 8 columns x 2 segments x 2 gradient quads x 6 vertices, plus the player
        assert_eq!(scene.vertices.len(), 8 * 2 * 2 * 6 + 6);
        assert_eq!(scene.clear_color, colors::SKY);
    }

    #[test]
    fn test_flat_obstacles_without_flame_effects() {
        let world = world_with_obstacle();
        let settings = Settings {
            flame_effects: false,
            ..Settings::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        let scene = build(&world, 0, &settings, None, &mut rng);

        let flat: Vec<&Vertex> = scene
            .vertices
            .iter()
            .filter(|v| v.color == colors::OBSTACLE)
            .collect();
        assert_eq!(flat.len(), 12);
        // Flat geometry matches the collision geometry exactly
        let max_top_y = flat[..6].iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        let min_bottom_y = flat[6..].iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        assert_eq!(max_top_y, 150.0);
        assert_eq!(min_bottom_y, 400.0);
    }

    #[test]
    fn test_decoration_leaves_world_untouched() {
        let world = world_with_obstacle();
        let before = world.obstacles.clone();
        let mut rng = Pcg32::seed_from_u64(5);
        for frame in 0..50 {
            build(&world, frame, &Settings::default(), None, &mut rng);
        }
        assert_eq!(world.obstacles, before);
    }

    #[test]
    fn test_flicker_range_and_reduced_motion() {
        for frame in 0..200 {
            assert!(flicker(frame).abs() <= FLAME_FLICKER_AMPLITUDE);
        }
        assert_eq!(flicker(0), 0.0);

        let world = world_with_obstacle();
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        // Frame 16 has a strong flicker; with reduced motion the top flames
        // still start at y = 0
        let scene = build(&world, 16, &settings, None, &mut rng);
        let top_flame_y = scene.vertices[0].position[1];
        assert_eq!(top_flame_y, 0.0);
    }

    #[test]
    fn test_same_seed_same_flames() {
        let world = world_with_obstacle();
        let settings = Settings::default();
        let a = build(&world, 3, &settings, None, &mut Pcg32::seed_from_u64(11));
        let b = build(&world, 3, &settings, None, &mut Pcg32::seed_from_u64(11));
        assert_eq!(a.vertices, b.vertices);
    }
}
