//! Shape generation for 2D primitives
//!
//! All coordinates are screen pixels, y pointing down.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Axis-aligned filled rectangle (two triangles)
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vertical_gradient(pos, size, &[(0.0, color), (1.0, color)])
}

/// Rectangle with a top-to-bottom gradient through the given color stops.
///
/// Stops are `(offset, color)` with offsets in 0..=1, ascending. Each span
/// between neighbouring stops becomes one quad.
pub fn vertical_gradient(pos: Vec2, size: Vec2, stops: &[(f32, [f32; 4])]) -> Vec<Vertex> {
    if size.x <= 0.0 || size.y <= 0.0 || stops.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((stops.len() - 1) * 6);
    let (left, right) = (pos.x, pos.x + size.x);

    for pair in stops.windows(2) {
        let (t1, c1) = pair[0];
        let (t2, c2) = pair[1];
        let y1 = pos.y + size.y * t1;
        let y2 = pos.y + size.y * t2;

        // Two triangles
        vertices.push(Vertex::new(left, y1, c1));
        vertices.push(Vertex::new(right, y1, c1));
        vertices.push(Vertex::new(left, y2, c2));

        vertices.push(Vertex::new(left, y2, c2));
        vertices.push(Vertex::new(right, y1, c1));
        vertices.push(Vertex::new(right, y2, c2));
    }

    vertices
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> [Vertex; 3] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_bounds() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_gradient_one_quad_per_span() {
        let stops = [(0.0, [1.0; 4]), (0.5, [0.5; 4]), (1.0, [0.0; 4])];
        let verts = vertical_gradient(Vec2::ZERO, Vec2::new(10.0, 100.0), &stops);
        assert_eq!(verts.len(), 12);
        // Middle stop sits halfway down
        assert_eq!(verts[2].position[1], 50.0);
        assert_eq!(verts[2].color, [0.5; 4]);
    }

    #[test]
    fn test_degenerate_rect_is_empty() {
        assert!(rect(Vec2::ZERO, Vec2::new(0.0, 10.0), [1.0; 4]).is_empty());
        assert!(rect(Vec2::ZERO, Vec2::new(10.0, -1.0), [1.0; 4]).is_empty());
    }

    #[test]
    fn test_ellipse_vertex_count() {
        assert_eq!(ellipse(Vec2::ZERO, Vec2::ONE, [1.0; 4], 16).len(), 48);
    }
}
