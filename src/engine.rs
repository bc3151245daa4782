use tracing::debug;

use crate::config::GameConfig;
use crate::food::place_food;
use crate::geometry::{positions_equal, GridRng, Position};
use crate::state::GameState;
use TickOutcome::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashKind {
    Wall,
    SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved { new_head: Position, old_tail: Position },
    Ate { new_head: Position, new_food: Position },
    Crashed(CrashKind),
    /// The snake ate the last free cell.
    BoardFilled,
    /// The game was already over; nothing changed.
    Halted,
}

impl TickOutcome {
    pub fn ends_game(&self) -> bool {
        matches!(self, Crashed(_) | BoardFilled)
    }
}

/// Advances a [`GameState`] one tick at a time.
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
}

impl Engine {
    pub fn new(config: GameConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick<R: GridRng + ?Sized>(&self, state: &mut GameState, rng: &mut R) -> TickOutcome {
        if !state.alive {
            return Halted;
        }

        let new_head = state.snake.next_head(state.direction, self.config.grid_size);

        // Collision is judged against the body after the tail has moved on, so
        // stepping into the cell the tail is leaving is fine.
        let crash = if !self.config.contains(new_head) {
            Some(CrashKind::Wall)
        } else if state.snake.occupies_after_shift(new_head) {
            Some(CrashKind::SelfCollision)
        } else {
            None
        };

        if let Some(kind) = crash {
            state.alive = false;
            debug!(?new_head, ?kind, "snake crashed");
            return Crashed(kind);
        }

        if !positions_equal(new_head, state.food) {
            let old_tail = state.snake.tail();
            state.snake.advance(new_head, false);
            return Moved { new_head, old_tail };
        }

        state.snake.advance(new_head, true);
        match place_food(&state.snake, &self.config, rng) {
            Some(new_food) => {
                state.food = new_food;
                debug!(?new_head, ?new_food, length = state.snake.len(), "snake ate");
                Ate { new_head, new_food }
            }
            None => {
                state.alive = false;
                debug!(length = state.snake.len(), "board filled");
                BoardFilled
            }
        }
    }
}
