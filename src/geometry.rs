use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::config::GameConfig;

/// A grid-aligned point in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

/// Source of randomness for food placement.
pub trait GridRng {
    /// Uniform value in `[0, bound)`. `bound` is always positive.
    fn next_int(&mut self, bound: i32) -> i32;
}

impl GridRng for StdRng {
    fn next_int(&mut self, bound: i32) -> i32 {
        self.gen_range(0..bound)
    }
}

impl GridRng for ThreadRng {
    fn next_int(&mut self, bound: i32) -> i32 {
        self.gen_range(0..bound)
    }
}

pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Axis-aligned overlap test. Rectangles that only share an edge don't collide.
#[allow(clippy::too_many_arguments)]
pub fn rectangles_collide(x1: i32, y1: i32, w1: i32, h1: i32, x2: i32, y2: i32, w2: i32, h2: i32) -> bool {
    !(x1 + w1 <= x2 || x2 + w2 <= x1 || y1 + h1 <= y2 || y2 + h2 <= y1)
}

pub fn random_grid_position<R: GridRng + ?Sized>(config: &GameConfig, rng: &mut R) -> Position {
    let x = rng.next_int(config.columns());
    let y = rng.next_int(config.rows());
    Position::new(x * config.grid_size, y * config.grid_size)
}

pub fn positions_equal(a: Position, b: Position) -> bool {
    a.x == b.x && a.y == b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
        assert_eq!(clamp(0, 0, 0), 0);
    }

    #[test]
    fn overlapping_rectangles_collide() {
        assert!(rectangles_collide(0, 0, 20, 20, 10, 10, 20, 20));
        assert!(rectangles_collide(0, 0, 40, 40, 10, 10, 5, 5));
        assert!(rectangles_collide(0, 0, 20, 20, 0, 0, 20, 20));
    }

    #[test]
    fn touching_rectangles_do_not_collide() {
        assert!(!rectangles_collide(0, 0, 20, 20, 20, 0, 20, 20));
        assert!(!rectangles_collide(0, 0, 20, 20, 0, 20, 20, 20));
        assert!(!rectangles_collide(0, 0, 20, 20, 100, 100, 20, 20));
    }

    #[test]
    fn random_positions_are_grid_aligned_and_in_bounds() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let pos = random_grid_position(&config, &mut rng);
            assert_eq!(pos.x % config.grid_size, 0);
            assert_eq!(pos.y % config.grid_size, 0);
            assert!(config.contains(pos), "{:?} out of bounds", pos);
        }
    }

    #[test]
    fn positions_compare_exactly() {
        assert!(positions_equal(Position::new(20, 40), Position::new(20, 40)));
        assert!(!positions_equal(Position::new(20, 40), Position::new(40, 20)));
    }
}
