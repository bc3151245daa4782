//! Grid snake: a fixed-tick simulation of the classic arcade game, a loop driver
//! that decouples ticks from frames, and a crossterm front end.

pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod snake;
pub mod state;
pub mod term;

pub use config::{GameConfig, Palette, Rgb};
pub use engine::{CrashKind, Engine, TickOutcome};
pub use error::{ConfigError, GameError};
pub use game::{EndReason, GameSummary, Iteration, Platform, SnakeGame};
pub use geometry::{GridRng, Position};
pub use input::{InputEvent, InputState, KeyTracking};
pub use render::Renderer;
pub use snake::{Direction, Snake};
pub use state::GameState;
