use std::io;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::{Engine, TickOutcome};
use crate::error::GameError;
use crate::geometry::GridRng;
use crate::input::{InputEvent, InputState, KeyTracking};
use crate::render::{draw_state, Renderer};
use crate::state::GameState;

/// Window and event system, as far as the loop driver needs it.
pub trait Platform {
    /// Drains every key event received since the last call. Never blocks.
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;
    /// Monotonic milliseconds.
    fn now_ms(&self) -> u64;
    fn sleep(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    GameOver,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub ended_by: EndReason,
    pub length: usize,
    pub ticks: u64,
}

/// What a single pass of the outer loop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iteration {
    pub ticked: bool,
    pub rendered: bool,
    pub outcome: Option<TickOutcome>,
}

/// Fixed-rate loop driver: ticks at `ticks_per_second`, renders every pass and
/// caps passes at `frames_per_second`.
pub struct SnakeGame<R: GridRng> {
    engine: Engine,
    state: GameState,
    input: InputState,
    rng: R,
    tick_interval_ms: u64,
    frame_interval: Duration,
    last_tick_ms: u64,
    ticks: u64,
}

impl<R: GridRng> SnakeGame<R> {
    pub fn new(config: GameConfig, tracking: KeyTracking, mut rng: R, now_ms: u64) -> Result<Self, GameError> {
        let state = GameState::new(&config, &mut rng)?;
        Ok(SnakeGame::with_state(config, state, tracking, rng, now_ms))
    }

    /// Starts from an arbitrary state. The first tick fires one interval after `now_ms`.
    pub fn with_state(config: GameConfig, state: GameState, tracking: KeyTracking, rng: R, now_ms: u64) -> Self {
        let tick_interval_ms = config.tick_interval().as_millis() as u64;
        let frame_interval = config.frame_interval();

        SnakeGame {
            engine: Engine::new(config),
            state,
            input: InputState::new(tracking),
            rng,
            tick_interval_ms,
            frame_interval,
            last_tick_ms: now_ms,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        if self.input.quit_requested() {
            Some(EndReason::Quit)
        } else if !self.state.alive {
            Some(EndReason::GameOver)
        } else {
            None
        }
    }

    /// One pass: sample input, tick if the interval has elapsed, then render.
    pub fn iterate<W: Platform + Renderer>(&mut self, window: &mut W) -> Result<Iteration, GameError> {
        for ev in window.poll_events()? {
            self.input.handle(ev);
        }

        if self.input.quit_requested() {
            return Ok(Iteration { ticked: false, rendered: false, outcome: None });
        }

        let now = window.now_ms();
        let mut outcome = None;

        if now.saturating_sub(self.last_tick_ms) >= self.tick_interval_ms {
            self.state.direction = self.input.take_direction(self.state.direction);
            let res = self.engine.tick(&mut self.state, &mut self.rng);
            self.last_tick_ms = now;
            self.ticks += 1;
            debug!(tick = self.ticks, ?res, "tick");
            outcome = Some(res);
        }

        draw_state(window, &self.state, self.engine.config())?;

        Ok(Iteration { ticked: outcome.is_some(), rendered: true, outcome })
    }

    pub fn run<W: Platform + Renderer>(&mut self, window: &mut W) -> Result<GameSummary, GameError> {
        info!(length = self.state.snake.len(), tracking = ?self.input.tracking(), "game started");

        let ended_by = loop {
            if let Some(reason) = self.end_reason() {
                break reason;
            }

            let started = window.now_ms();
            self.iterate(window)?;

            let spent = Duration::from_millis(window.now_ms().saturating_sub(started));
            window.sleep(self.frame_interval.saturating_sub(spent));
        };

        let summary = GameSummary { ended_by, length: self.state.snake.len(), ticks: self.ticks };
        info!(ended_by = ?summary.ended_by, length = summary.length, ticks = summary.ticks, "game finished");
        Ok(summary)
    }
}
