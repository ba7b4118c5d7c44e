//! Platform abstraction layer
//!
//! The loop driver talks to the outside world only through these traits:
//! - Audio cues (fire-and-forget)
//! - HUD elements (score text, game-over panel, start prompt)
//!
//! The browser build implements them over Web Audio and the DOM; tests and
//! the native build use in-memory or logging implementations.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player jumped
    Jump,
    /// Obstacle pair cleared
    Score,
    /// Run ended
    GameOver,
}

/// Fire-and-forget sound playback. Failures are swallowed by the implementor.
pub trait AudioOut {
    fn play(&self, effect: SoundEffect);
}

/// Live UI surfaces outside the canvas
pub trait Hud {
    /// Score changed (including reset to zero)
    fn set_score(&self, score: u32);
    /// Run ended; show the panel with the final score
    fn show_game_over(&self, final_score: u32);
    fn hide_game_over(&self);
    /// Instructional text shown while waiting for the first jump
    fn set_start_prompt(&self, visible: bool);
}

/// Text for the score display
pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// Audio sink that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioOut for Silent {
    fn play(&self, _effect: SoundEffect) {}
}

/// HUD that reports through the logger (native/headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHud;

impl Hud for LogHud {
    fn set_score(&self, score: u32) {
        log::debug!("{}", score_text(score));
    }

    fn show_game_over(&self, final_score: u32) {
        log::info!("Game over! Final score: {final_score}");
    }

    fn hide_game_over(&self) {}

    fn set_start_prompt(&self, visible: bool) {
        if visible {
            log::info!("Press SPACE or Click to start");
        }
    }
}
