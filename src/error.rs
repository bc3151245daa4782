use std::io;

use thiserror::Error;

use crate::geometry::Position;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be positive, got {0}")]
    GridSize(i32),
    #[error("window {width}x{height} is not a whole number of {grid}px cells")]
    WindowNotGridAligned { width: i32, height: i32, grid: i32 },
    #[error("tick and frame rates must be non-zero")]
    ZeroRate,
    #[error("initial snake length must be at least 1")]
    EmptySnake,
    #[error("starting snake at {0:?} does not fit inside the window")]
    StartOutOfBounds(Position),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("terminal is {}x{} but the board needs {}x{}", .actual.0, .actual.1, .needed.0, .needed.1)]
    TerminalTooSmall { needed: (u16, u16), actual: (u16, u16) },
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
