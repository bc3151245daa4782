use std::time::Duration;

use crate::error::ConfigError;
use crate::geometry::Position;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const GRID_SIZE: i32 = 20;
pub const INITIAL_SNAKE_LENGTH: usize = 5;
pub const TICKS_PER_SECOND: u32 = 10;
pub const FRAMES_PER_SECOND: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub snake_head: Rgb,
    pub snake_body: Rgb,
    pub food: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Rgb::new(0, 0, 0),
            snake_head: Rgb::new(0, 200, 0),
            snake_body: Rgb::new(0, 255, 0),
            food: Rgb::new(255, 0, 0),
        }
    }
}

/// Everything a launch needs to know, handed to the engine and the loop driver
/// at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub grid_size: i32,
    pub initial_length: usize,
    /// Head of the snake at game start. The body trails upward from here.
    pub start: Position,
    pub ticks_per_second: u32,
    pub frames_per_second: u32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            grid_size: GRID_SIZE,
            initial_length: INITIAL_SNAKE_LENGTH,
            start: Position::new(200, 300),
            ticks_per_second: TICKS_PER_SECOND,
            frames_per_second: FRAMES_PER_SECOND,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::GridSize(self.grid_size));
        }

        if self.window_width < self.grid_size
            || self.window_height < self.grid_size
            || self.window_width % self.grid_size != 0
            || self.window_height % self.grid_size != 0
        {
            return Err(ConfigError::WindowNotGridAligned {
                width: self.window_width,
                height: self.window_height,
                grid: self.grid_size,
            });
        }

        if self.ticks_per_second == 0 || self.frames_per_second == 0 {
            return Err(ConfigError::ZeroRate);
        }

        if self.initial_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        let tail_y = self.start.y as i64 - (self.initial_length as i64 - 1) * self.grid_size as i64;
        let start_on_grid = self.start.x % self.grid_size == 0 && self.start.y % self.grid_size == 0;
        if !start_on_grid || !self.contains(self.start) || tail_y < 0 {
            return Err(ConfigError::StartOutOfBounds(self.start));
        }

        Ok(())
    }

    pub fn columns(&self) -> i32 {
        self.window_width / self.grid_size
    }

    pub fn rows(&self) -> i32 {
        self.window_height / self.grid_size
    }

    pub fn cell_count(&self) -> usize {
        self.columns().max(0) as usize * self.rows().max(0) as usize
    }

    /// Whether `pos` lies inside the window, upper bounds excluded.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.window_width && pos.y >= 0 && pos.y < self.window_height
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.ticks_per_second.max(1) as u64)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.frames_per_second.max(1) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.columns(), 40);
        assert_eq!(config.rows(), 30);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn rejects_misaligned_window() {
        let config = GameConfig { window_width: 810, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::WindowNotGridAligned { .. })));
    }

    #[test]
    fn rejects_start_that_does_not_fit() {
        let config = GameConfig { start: Position::new(200, 40), ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::StartOutOfBounds(Position::new(200, 40))));

        let config = GameConfig { start: Position::new(205, 300), ..GameConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_values() {
        let zero_grid = GameConfig { grid_size: 0, ..GameConfig::default() };
        assert_eq!(zero_grid.validate(), Err(ConfigError::GridSize(0)));

        let no_ticks = GameConfig { ticks_per_second: 0, ..GameConfig::default() };
        assert_eq!(no_ticks.validate(), Err(ConfigError::ZeroRate));

        let empty = GameConfig { initial_length: 0, ..GameConfig::default() };
        assert_eq!(empty.validate(), Err(ConfigError::EmptySnake));
    }
}
