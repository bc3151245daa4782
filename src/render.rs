use std::io;

use crate::config::{GameConfig, Rgb};
use crate::state::GameState;

/// Drawing surface measured in window pixels.
pub trait Renderer {
    fn draw_filled_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) -> io::Result<()>;
    fn clear_screen(&mut self, color: Rgb) -> io::Result<()>;
    fn present(&mut self) -> io::Result<()>;
}

/// Paints one frame: background, food, then the snake from tail to head so the
/// head always ends up on top.
pub fn draw_state<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState, config: &GameConfig) -> io::Result<()> {
    let grid = config.grid_size;
    let palette = &config.palette;

    renderer.clear_screen(palette.background)?;
    renderer.draw_filled_rectangle(state.food.x, state.food.y, grid, grid, palette.food)?;

    let segments = state.snake.to_vec();
    for (i, seg) in segments.iter().enumerate().rev() {
        let color = if i == 0 { palette.snake_head } else { palette.snake_body };
        renderer.draw_filled_rectangle(seg.x, seg.y, grid, grid, color)?;
    }

    renderer.present()
}
