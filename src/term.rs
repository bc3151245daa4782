use std::io::{self, Stdout, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{
    poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{Color, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use tracing::{debug, warn};

use crate::config::{GameConfig, Rgb};
use crate::error::GameError;
use crate::game::Platform;
use crate::geometry::{clamp, rectangles_collide};
use crate::input::{InputEvent, KeyTracking};
use crate::render::Renderer;
use crate::snake::Direction;

// Upper half block: foreground paints the upper grid cell, background the lower one,
// so one character cell holds two square grid cells.
const HALF_BLOCK: char = '\u{2580}';

/// Terminal-backed window: renders grid cells with half blocks and reads keys
/// through crossterm.
pub struct TermManager {
    stdout: Stdout,
    grid: i32,
    cols: u16,
    rows: u16,
    origin: (u16, u16),
    back: Vec<Rgb>,
    front: Vec<Option<(Rgb, Rgb)>>,
    started: Instant,
    enhanced: bool,
    active: bool,
}

impl TermManager {
    pub fn new(config: &GameConfig) -> Self {
        let cols = config.columns().max(0) as u16;
        let rows = config.rows().max(0) as u16;
        let char_rows = (rows + 1) / 2;

        TermManager {
            stdout: stdout(),
            grid: config.grid_size,
            cols,
            rows,
            origin: (1, 1),
            back: vec![config.palette.background; cols as usize * rows as usize],
            front: vec![None; cols as usize * char_rows as usize],
            started: Instant::now(),
            enhanced: false,
            active: false,
        }
    }

    /// Characters needed to show the board with its border.
    pub fn required_size(&self) -> (u16, u16) {
        (self.cols + 2, (self.rows + 1) / 2 + 2)
    }

    pub fn setup(&mut self) -> Result<(), GameError> {
        let needed = self.required_size();
        let actual = terminal::size()?;
        if actual.0 < needed.0 || actual.1 < needed.1 {
            return Err(GameError::TerminalTooSmall { needed, actual });
        }

        // Center the board
        self.origin = ((actual.0 - needed.0) / 2 + 1, (actual.1 - needed.1) / 2 + 1);

        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;

        self.enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.enhanced {
            execute!(self.stdout, PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))?;
        }
        debug!(enhanced = self.enhanced, origin = ?self.origin, "terminal ready");

        self.draw_borders()?;
        Ok(())
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        if self.enhanced {
            execute!(self.stdout, PopKeyboardEnhancementFlags)?;
        }
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    /// Release events only arrive with the keyboard enhancement protocol, or
    /// natively on Windows.
    pub fn key_tracking(&self) -> KeyTracking {
        if self.enhanced || cfg!(windows) {
            KeyTracking::Held
        } else {
            KeyTracking::Latched
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self) -> io::Result<()> {
        let (left, top) = (self.origin.0 - 1, self.origin.1 - 1);
        let (width, height) = self.required_size();
        let (right, bottom) = (left + width - 1, top + height - 1);

        queue!(self.stdout, style::ResetColor)?;
        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, top), style::Print(ch), cursor::MoveTo(x, bottom), style::Print(ch))?;
        }

        for y in top + 1..bottom {
            queue!(self.stdout, cursor::MoveTo(left, y), style::Print('|'), cursor::MoveTo(right, y), style::Print('|'))?;
        }

        self.stdout.flush()
    }

    fn cell(&self, col: u16, row: u16) -> Rgb {
        self.back[row as usize * self.cols as usize + col as usize]
    }
}

impl Renderer for TermManager {
    fn draw_filled_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) -> io::Result<()> {
        let board_w = self.cols as i32 * self.grid;
        let board_h = self.rows as i32 * self.grid;
        if !rectangles_collide(x, y, width, height, 0, 0, board_w, board_h) {
            return Ok(());
        }

        let col_start = clamp(x / self.grid, 0, self.cols as i32);
        let col_end = clamp((x + width + self.grid - 1) / self.grid, 0, self.cols as i32);
        let row_start = clamp(y / self.grid, 0, self.rows as i32);
        let row_end = clamp((y + height + self.grid - 1) / self.grid, 0, self.rows as i32);

        for row in row_start..row_end {
            for col in col_start..col_end {
                self.back[row as usize * self.cols as usize + col as usize] = color;
            }
        }
        Ok(())
    }

    fn clear_screen(&mut self, color: Rgb) -> io::Result<()> {
        self.back.iter_mut().for_each(|cell| *cell = color);
        Ok(())
    }

    /// Writes only the characters that changed since the last frame.
    fn present(&mut self) -> io::Result<()> {
        let char_rows = (self.rows + 1) / 2;

        for char_row in 0..char_rows {
            for col in 0..self.cols {
                let upper = self.cell(col, char_row * 2);
                let lower = if char_row * 2 + 1 < self.rows {
                    self.cell(col, char_row * 2 + 1)
                } else {
                    upper
                };

                let idx = char_row as usize * self.cols as usize + col as usize;
                if self.front[idx] == Some((upper, lower)) {
                    continue;
                }
                self.front[idx] = Some((upper, lower));

                queue!(
                    self.stdout,
                    cursor::MoveTo(self.origin.0 + col, self.origin.1 + char_row),
                    SetForegroundColor(to_color(upper)),
                    SetBackgroundColor(to_color(lower)),
                    style::Print(HALF_BLOCK)
                )?;
            }
        }

        queue!(self.stdout, style::ResetColor)?;
        self.stdout.flush()
    }
}

impl Platform for TermManager {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO)? {
            if let Event::Key(ev) = read()? {
                events.extend(map_key(&ev));
            }
        }

        Ok(events)
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(?err, "failed to restore terminal");
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.r, g: rgb.g, b: rgb.b }
}

/// Arrow keys and WASD steer; Esc, q and Ctrl+C quit.
pub fn map_key(ev: &KeyEvent) -> Option<InputEvent> {
    if is_quit(ev) {
        return (ev.kind != KeyEventKind::Release).then_some(InputEvent::Quit);
    }

    let dir = match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Direction::Up,
        KeyCode::Char('a') | KeyCode::Left => Direction::Left,
        KeyCode::Char('s') | KeyCode::Down => Direction::Down,
        KeyCode::Char('d') | KeyCode::Right => Direction::Right,
        _ => return None,
    };

    match ev.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(InputEvent::Pressed(dir)),
        KeyEventKind::Release => Some(InputEvent::Released(dir)),
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    match ev.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => ev.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent { code, modifiers, kind, state: KeyEventState::NONE }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(map_key(&press(KeyCode::Up)), Some(InputEvent::Pressed(Direction::Up)));
        assert_eq!(map_key(&press(KeyCode::Char('a'))), Some(InputEvent::Pressed(Direction::Left)));
        assert_eq!(map_key(&press(KeyCode::Char('s'))), Some(InputEvent::Pressed(Direction::Down)));
        assert_eq!(
            map_key(&key(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Repeat)),
            Some(InputEvent::Pressed(Direction::Right))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('w'), KeyModifiers::NONE, KeyEventKind::Release)),
            Some(InputEvent::Released(Direction::Up))
        );
    }

    #[test]
    fn exit_keys() {
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(map_key(&press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press)), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Release)), None);
        assert_eq!(map_key(&press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(&press(KeyCode::Enter)), None);
    }
}
