use crate::snake::Direction::{self, *};

/// Raw input as seen by the loop driver, already translated from the window
/// system's key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Direction),
    Released(Direction),
    Quit,
}

/// How key releases reach us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTracking {
    /// Releases are reported, so the set mirrors the physically held keys.
    Held,
    /// Only presses are reported. A press replaces the set and each tick
    /// consumes it.
    Latched,
}

/// Set of currently held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        HeldKeys::default()
    }

    pub fn press(&mut self, dir: Direction) {
        *self.slot(dir) = true;
    }

    pub fn release(&mut self, dir: Direction) {
        *self.slot(dir) = false;
    }

    pub fn clear(&mut self) {
        *self = HeldKeys::default();
    }

    pub fn contains(&self, dir: Direction) -> bool {
        match dir {
            Up => self.up,
            Down => self.down,
            Left => self.left,
            Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    fn slot(&mut self, dir: Direction) -> &mut bool {
        match dir {
            Up => &mut self.up,
            Down => &mut self.down,
            Left => &mut self.left,
            Right => &mut self.right,
        }
    }
}

impl FromIterator<Direction> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut keys = HeldKeys::new();
        for dir in iter {
            keys.press(dir);
        }
        keys
    }
}

/// First held key in Up, Down, Left, Right order, or `fallback` when nothing is held.
pub fn resolve_direction(held: &HeldKeys, fallback: Direction) -> Direction {
    [Up, Down, Left, Right]
        .into_iter()
        .find(|dir| held.contains(*dir))
        .unwrap_or(fallback)
}

pub fn apply_no_reverse(current: Direction, proposed: Direction) -> Direction {
    if proposed == current.opposite() {
        current
    } else {
        proposed
    }
}

/// Held-key state owned by the loop driver.
#[derive(Debug, Clone)]
pub struct InputState {
    held: HeldKeys,
    tracking: KeyTracking,
    quit: bool,
}

impl InputState {
    pub fn new(tracking: KeyTracking) -> Self {
        InputState { held: HeldKeys::new(), tracking, quit: false }
    }

    pub fn handle(&mut self, event: InputEvent) {
        match (event, self.tracking) {
            (InputEvent::Quit, _) => self.quit = true,
            (InputEvent::Pressed(dir), KeyTracking::Held) => self.held.press(dir),
            (InputEvent::Pressed(dir), KeyTracking::Latched) => {
                self.held.clear();
                self.held.press(dir);
            }
            (InputEvent::Released(dir), _) => self.held.release(dir),
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    pub fn tracking(&self) -> KeyTracking {
        self.tracking
    }

    /// Direction for the upcoming tick, with reversals suppressed.
    pub fn take_direction(&mut self, current: Direction) -> Direction {
        let proposed = resolve_direction(&self.held, current);
        if self.tracking == KeyTracking::Latched {
            self.held.clear();
        }
        apply_no_reverse(current, proposed)
    }
}
