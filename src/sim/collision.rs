//! Collision predicates for the player's bounding box
//!
//! These read only the undecorated obstacle geometry (`top_height`,
//! `bottom_y`); flame rendering never feeds back into them.

use super::state::{Obstacle, Player, Viewport};

/// Player touched the floor or the ceiling
pub fn hits_bounds(player: &Player, viewport: Viewport) -> bool {
    player.bottom() >= viewport.height || player.top() <= 0.0
}

/// Player and obstacle share some horizontal span
pub fn overlaps_horizontally(player: &Player, obstacle: &Obstacle) -> bool {
    player.left() < obstacle.right() && player.right() > obstacle.x
}

/// Player's box sticks out of the gap above or below
pub fn misses_gap(player: &Player, obstacle: &Obstacle) -> bool {
    player.top() < obstacle.top_height || player.bottom() > obstacle.bottom_y
}

pub fn collides(player: &Player, obstacle: &Obstacle) -> bool {
    overlaps_horizontally(player, obstacle) && misses_gap(player, obstacle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player_at(x: f32, y: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            vel_y: 0.0,
            size: Vec2::new(50.0, 30.0),
        }
    }

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            top_height: 200.0,
            bottom_y: 450.0,
            width: 80.0,
            passed: false,
        }
    }

    #[test]
    fn test_bounds() {
        let viewport = Viewport::REFERENCE;
        assert!(!hits_bounds(&player_at(50.0, 300.0), viewport));
        assert!(hits_bounds(&player_at(50.0, 570.0), viewport));
        assert!(!hits_bounds(&player_at(50.0, 569.9), viewport));
        assert!(hits_bounds(&player_at(50.0, 0.0), viewport));
        assert!(!hits_bounds(&player_at(50.0, 0.1), viewport));
    }

    #[test]
    fn test_horizontal_overlap_edges_are_exclusive() {
        // Player spans [50, 100)
        assert!(!overlaps_horizontally(&player_at(50.0, 300.0), &obstacle_at(100.0)));
        assert!(overlaps_horizontally(&player_at(50.0, 300.0), &obstacle_at(99.0)));
        assert!(!overlaps_horizontally(&player_at(50.0, 300.0), &obstacle_at(-30.0)));
        assert!(overlaps_horizontally(&player_at(50.0, 300.0), &obstacle_at(-29.0)));
    }

    #[test]
    fn test_gap() {
        let obstacle = obstacle_at(60.0);
        assert!(!collides(&player_at(50.0, 300.0), &obstacle));
        // Flush with the gap edges is still inside
        assert!(!collides(&player_at(50.0, 200.0), &obstacle));
        assert!(!collides(&player_at(50.0, 420.0), &obstacle));
        assert!(collides(&player_at(50.0, 199.0), &obstacle));
        assert!(collides(&player_at(50.0, 421.0), &obstacle));
    }

    #[test]
    fn test_out_of_gap_but_clear_horizontally() {
        assert!(!collides(&player_at(50.0, 10.0), &obstacle_at(300.0)));
    }
}
