//! Frame loop driver
//!
//! Owns the world and everything that changes from frame to frame. The host
//! calls [`Game::frame`] once per display refresh; input handlers only flag
//! a pending jump or request a reset between frames.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::{AudioOut, Hud, SoundEffect};
use crate::renderer::scene::{self, Scene};
use crate::renderer::sprite::Sprite;
use crate::settings::Settings;
use crate::sim::{GameEvent, TickInput, Viewport, World, tick};

/// Stream offset for the cosmetic RNG so it never shares state with gameplay
const FX_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct Game {
    world: World,
    settings: Settings,
    /// Obstacle generation
    sim_rng: Pcg32,
    /// Flame jitter
    fx_rng: Pcg32,
    /// Animation phase; wrapping is harmless
    frame: u32,
    input: TickInput,
}

impl Game {
    pub fn new(seed: u64, viewport: Viewport, settings: Settings) -> Self {
        Self {
            world: World::new(viewport, settings.tuning.clone()),
            settings,
            sim_rng: Pcg32::seed_from_u64(seed),
            fx_rng: Pcg32::seed_from_u64(seed ^ FX_SEED_SALT),
            frame: 0,
            input: TickInput::default(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn frame_count(&self) -> u32 {
        self.frame
    }

    /// Jump trigger from key, click or touch; applied at the start of the next frame
    pub fn press_jump(&mut self) {
        self.input.jump = true;
    }

    /// Restart control: back to a fresh, not-yet-started run
    pub fn reset(&mut self, hud: &impl Hud) {
        self.world.reset();
        self.input = TickInput::default();
        hud.set_score(0);
        hud.hide_game_over();
        hud.set_start_prompt(true);
        log::info!("Game reset");
    }

    /// Host surface changed size (CSS pixels)
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if viewport.is_valid() && viewport != self.world.viewport {
            log::info!("Viewport resized to {width}x{height}");
            self.world.resize(viewport);
        }
    }

    /// One update-then-render cycle
    pub fn frame(&mut self, audio: &impl AudioOut, hud: &impl Hud, sprite: Option<&Sprite>) -> Scene {
        let input = std::mem::take(&mut self.input);
        let was_started = self.world.is_started();

        let events = tick(&mut self.world, &input, &mut self.sim_rng);

        if !was_started && self.world.is_started() {
            hud.set_start_prompt(false);
        }
        for event in events {
            dispatch(event, audio, hud);
        }

        let scene = scene::build(&self.world, self.frame, &self.settings, sprite, &mut self.fx_rng);
        self.frame = self.frame.wrapping_add(1);
        scene
    }
}

fn dispatch(event: GameEvent, audio: &impl AudioOut, hud: &impl Hud) {
    match event {
        GameEvent::Jumped => audio.play(SoundEffect::Jump),
        GameEvent::Scored { score } => {
            audio.play(SoundEffect::Score);
            hud.set_score(score);
        }
        GameEvent::GameOver { score } => {
            audio.play(SoundEffect::GameOver);
            hud.show_game_over(score);
        }
    }
}
