//! Vector sprite for the player
//!
//! Authored in unit space (0..1 on both axes) and stretched onto the
//! player's bounding box at draw time.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};

#[derive(Debug, Clone, Default)]
pub struct Sprite {
    /// Triangle list in unit coordinates
    vertices: Vec<Vertex>,
}

impl Sprite {
    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Side-on bird facing right
    pub fn bird() -> Self {
        let mut vertices = Vec::with_capacity(256);
        vertices.extend(shapes::ellipse(
            Vec2::new(0.45, 0.55),
            Vec2::new(0.42, 0.42),
            colors::BIRD_BODY,
            24,
        ));
        vertices.extend(shapes::ellipse(
            Vec2::new(0.32, 0.62),
            Vec2::new(0.2, 0.14),
            colors::BIRD_WING,
            16,
        ));
        vertices.extend(shapes::triangle(
            Vec2::new(0.8, 0.45),
            Vec2::new(1.0, 0.58),
            Vec2::new(0.8, 0.7),
            colors::BIRD_BEAK,
        ));
        vertices.extend(shapes::ellipse(
            Vec2::new(0.66, 0.35),
            Vec2::new(0.1, 0.16),
            colors::BIRD_EYE,
            12,
        ));
        vertices.extend(shapes::ellipse(
            Vec2::new(0.69, 0.37),
            Vec2::new(0.04, 0.07),
            colors::BIRD_PUPIL,
            8,
        ));
        Self::from_vertices(vertices)
    }

    /// A sprite with no geometry can't be drawn
    pub fn is_ready(&self) -> bool {
        !self.vertices.is_empty() && self.vertices.len() % 3 == 0
    }

    /// Map the sprite onto a screen-space box
    pub fn place(&self, pos: Vec2, size: Vec2) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().map(move |v| {
            let p = pos + Vec2::from(v.position) * size;
            Vertex::new(p.x, p.y, v.color)
        })
    }
}
