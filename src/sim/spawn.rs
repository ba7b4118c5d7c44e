//! Obstacle generation
//!
//! Randomness comes in through the caller's RNG so runs are reproducible
//! from a seed.

use rand::Rng;

use super::state::{Obstacle, Viewport};
use crate::tuning::Tuning;

/// Whether a new pair is due: none on screen yet, or the newest one has
/// scrolled at least the spacing threshold in from the right edge.
pub fn should_spawn(obstacles: &[Obstacle], viewport: Viewport, tuning: &Tuning) -> bool {
    let spacing = tuning.spawn_spacing * viewport.scale().x;
    match obstacles.last() {
        None => true,
        Some(newest) => newest.x < viewport.width - spacing,
    }
}

/// Build a new obstacle pair just off the right edge of the viewport
pub fn generate<R: Rng>(viewport: Viewport, tuning: &Tuning, rng: &mut R) -> Obstacle {
    let scale = viewport.scale();
    let gap = tuning.gap_size * scale.y;
    let margin = tuning.gap_margin * scale.y;

    let lowest = margin;
    let highest = viewport.height - gap - margin;
    let top_height = if highest > lowest {
        rng.random_range(lowest..=highest)
    } else {
        // Too short for both margins; centre the gap
        ((viewport.height - gap) * 0.5).max(0.0)
    };

    Obstacle {
        x: viewport.width,
        top_height,
        bottom_y: top_height + gap,
        width: tuning.obstacle_width * scale.x,
        passed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_respects_margins() {
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = Tuning::default();
        for _ in 0..500 {
            let o = generate(Viewport::REFERENCE, &tuning, &mut rng);
            assert!(o.top_height >= 100.0);
            assert!(o.bottom_y <= 500.0);
            assert_eq!(o.bottom_y, o.top_height + 250.0);
            assert_eq!(o.x, 1000.0);
            assert_eq!(o.width, 80.0);
            assert!(!o.passed);
        }
    }

    #[test]
    fn test_generate_spans_whole_gap_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        let tuning = Tuning::default();
        let (mut lowest, mut highest) = (f32::MAX, f32::MIN);
        for _ in 0..5000 {
            let top = generate(Viewport::REFERENCE, &tuning, &mut rng).top_height;
            lowest = lowest.min(top);
            highest = highest.max(top);
        }
        // Uniform over [100, 250]: both ends get close
        assert!(lowest >= 100.0 && lowest < 101.0, "lowest {lowest}");
        assert!(highest <= 250.0 && highest > 249.0, "highest {highest}");
    }

    #[test]
    fn test_generate_short_viewport_centres_gap() {
        let mut rng = Pcg32::seed_from_u64(7);
        // Scaled gap 125 and margin 100 leave no room in a 300px viewport
        let tuning = Tuning {
            gap_margin: 200.0,
            ..Tuning::default()
        };
        let viewport = Viewport::new(1000.0, 300.0);
        let o = generate(viewport, &tuning, &mut rng);
        assert_eq!(o.top_height, (300.0 - 125.0) / 2.0);
        assert_eq!(o.bottom_y, o.top_height + 125.0);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                generate(Viewport::REFERENCE, &tuning, &mut a),
                generate(Viewport::REFERENCE, &tuning, &mut b)
            );
        }
    }

    #[test]
    fn test_should_spawn() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(should_spawn(&[], Viewport::REFERENCE, &tuning));

        let mut o = generate(Viewport::REFERENCE, &tuning, &mut rng);
        o.x = 800.0;
        assert!(!should_spawn(&[o.clone()], Viewport::REFERENCE, &tuning));
        o.x = 799.0;
        assert!(should_spawn(&[o], Viewport::REFERENCE, &tuning));
    }
}
