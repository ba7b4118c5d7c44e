//! Per-frame simulation step
//!
//! One call to [`tick`] advances the world by exactly one display frame.

use rand::Rng;

use super::collision;
use super::spawn;
use super::state::{GameEvent, Phase, World};

/// Input commands collected since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump trigger (Space, click or tap)
    pub jump: bool,
}

/// Apply the jump trigger. Starts the run if it hasn't started yet and
/// replaces (not adds to) the current vertical velocity. Ignored once over.
pub fn jump(world: &mut World) -> bool {
    match world.phase {
        Phase::Over => false,
        Phase::NotStarted | Phase::Running => {
            if world.phase == Phase::NotStarted {
                log::info!("Run started");
            }
            world.phase = Phase::Running;
            world.player.vel_y = world.tuning.jump_impulse;
            true
        }
    }
}

/// Advance the game state by one frame
pub fn tick<R: Rng>(world: &mut World, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.jump && jump(world) {
        events.push(GameEvent::Jumped);
    }

    // Nothing moves before the first jump or after a crash
    if world.phase != Phase::Running {
        return events;
    }

    let tuning = &world.tuning;

    // Gravity; the clamp only limits falling, never rising
    let player = &mut world.player;
    player.vel_y = (player.vel_y + tuning.gravity).min(tuning.max_fall_speed);
    player.pos.y += player.vel_y;

    if spawn::should_spawn(&world.obstacles, world.viewport, tuning) {
        let obstacle = spawn::generate(world.viewport, tuning, rng);
        world.obstacles.push(obstacle);
    }

    let player_x = world.player.left();
    for obstacle in &mut world.obstacles {
        obstacle.x -= tuning.scroll_speed;

        if !obstacle.passed && player_x > obstacle.right() {
            obstacle.passed = true;
            world.score += 1;
            events.push(GameEvent::Scored { score: world.score });
        }
    }
    // retain keeps the survivors in spawn order
    world.obstacles.retain(|o| o.right() >= 0.0);

    let crashed = collision::hits_bounds(&world.player, world.viewport)
        || world
            .obstacles
            .iter()
            .any(|o| collision::collides(&world.player, o));

    if crashed && world.game_over() {
        log::info!("Game over with score {}", world.score);
        events.push(GameEvent::GameOver { score: world.score });
    }

    events
}
