use std::collections::VecDeque;

use crate::geometry::Position;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Unit step in grid cells. Screen y grows downward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// Body segments, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Lays `length` segments in a straight line from `head`, each one grid unit
    /// further in `trailing`.
    pub fn new(head: Position, length: usize, trailing: Direction, grid: i32) -> Self {
        let (dx, dy) = trailing.offset();

        let body = (0..length.max(1) as i32)
            .map(|i| head.offset((dx * grid * i, dy * grid * i)))
            .collect();
        Snake { body }
    }

    /// Builds a snake from explicit segments, head first. `None` if there are none.
    pub fn from_segments<I: IntoIterator<Item = Position>>(segments: I) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Snake { body })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Whether `pos` is on the body that remains once the tail moves forward,
    /// i.e. every segment except the last one.
    pub fn occupies_after_shift(&self, pos: Position) -> bool {
        self.body.iter().take(self.body.len() - 1).any(|seg| *seg == pos)
    }

    /// Next head position one grid unit along `direction`.
    pub fn next_head(&self, direction: Direction, grid: i32) -> Position {
        let (dx, dy) = direction.offset();
        self.head().offset((dx * grid, dy * grid))
    }

    /// Puts `new_head` in front. The tail is dropped unless `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn opposites_pair_up() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn new_lays_out_a_line() {
        let snake = Snake::new(p(200, 300), 5, Up, 20);
        assert_eq!(snake.to_vec(), vec![p(200, 300), p(200, 280), p(200, 260), p(200, 240), p(200, 220)]);
        assert_eq!(snake.head(), p(200, 300));
        assert_eq!(snake.tail(), p(200, 220));
    }

    #[test]
    fn advance_shifts_or_grows() {
        let mut snake = Snake::new(p(40, 0), 3, Left, 20);
        let head = snake.next_head(Right, 20);
        assert_eq!(head, p(60, 0));

        snake.advance(head, false);
        assert_eq!(snake.to_vec(), vec![p(60, 0), p(40, 0), p(20, 0)]);

        snake.advance(snake.next_head(Down, 20), true);
        assert_eq!(snake.to_vec(), vec![p(60, 20), p(60, 0), p(40, 0), p(20, 0)]);
    }

    #[test]
    fn shifted_body_excludes_tail() {
        assert!(Snake::from_segments(Vec::<Position>::new()).is_none());

        let snake = Snake::from_segments(vec![p(0, 0), p(20, 0), p(40, 0)]).unwrap();
        assert!(snake.occupies_after_shift(p(20, 0)));
        assert!(!snake.occupies_after_shift(p(40, 0)));
    }
}
