use crate::config::GameConfig;
use crate::geometry::{random_grid_position, GridRng, Position};
use crate::snake::Snake;

/// Picks a free cell for the next piece of food by rejection sampling.
///
/// Returns `None` only when the snake already covers the whole board, since no
/// sample could ever be accepted.
pub fn place_food<R: GridRng + ?Sized>(snake: &Snake, config: &GameConfig, rng: &mut R) -> Option<Position> {
    if snake.len() >= config.cell_count() {
        return None;
    }

    loop {
        let candidate = random_grid_position(config, rng);
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    struct Scripted(Vec<i32>);

    impl GridRng for Scripted {
        fn next_int(&mut self, _bound: i32) -> i32 {
            self.0.remove(0)
        }
    }

    #[test]
    fn skips_cells_on_the_snake() {
        let config = GameConfig::default();
        let snake = Snake::from_segments(vec![Position::new(0, 0), Position::new(20, 0)]).unwrap();
        let before = snake.clone();
        // (0,0) and (20,0) are rejected before (40,0) is accepted
        let mut rng = Scripted(vec![0, 0, 1, 0, 2, 0]);

        assert_eq!(place_food(&snake, &config, &mut rng), Some(Position::new(40, 0)));
        assert!(rng.0.is_empty());
        assert_eq!(snake, before);
    }

    #[test]
    fn never_lands_on_the_snake() {
        let config = GameConfig::default();
        let snake = Snake::new(config.start, 15, crate::snake::Direction::Up, config.grid_size);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            let food = place_food(&snake, &config, &mut rng).unwrap();
            assert!(!snake.contains(food));
            assert!(config.contains(food));
        }
    }

    #[test]
    fn full_board_has_no_place_for_food() {
        let config = GameConfig { window_width: 40, window_height: 40, start: Position::new(0, 20), initial_length: 2, ..GameConfig::default() };
        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(20, 0),
            Position::new(20, 20),
            Position::new(0, 20),
        ]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place_food(&snake, &config, &mut rng), None);
    }
}
