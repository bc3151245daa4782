use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::food::place_food;
use crate::geometry::{GridRng, Position};
use crate::snake::{Direction, Snake};

/// Authoritative snapshot of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Position,
    pub alive: bool,
}

impl GameState {
    /// Fresh game: the snake trails upward from `config.start`, heads right, and
    /// food sits somewhere off its body.
    pub fn new<R: GridRng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let snake = Snake::new(config.start, config.initial_length, Direction::Up, config.grid_size);
        // A valid config always leaves free cells unless the snake spans the board
        let food = place_food(&snake, config, rng).ok_or(ConfigError::StartOutOfBounds(config.start))?;

        Ok(GameState { snake, direction: Direction::Right, food, alive: true })
    }

    pub fn with_parts(snake: Snake, direction: Direction, food: Position) -> Self {
        GameState { snake, direction, food, alive: true }
    }

    pub fn is_over(&self) -> bool {
        !self.alive
    }
}
