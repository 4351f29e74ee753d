use crate::geometry::{Cell, Offset};
use Direction::*;

pub const START_BODY: [Cell; 3] = [Cell::new(7, 7), Cell::new(6, 7), Cell::new(5, 7)];
pub const START_DIRECTION: Direction = Right;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn offset(self) -> Offset {
        match self {
            Up => Offset::new(0, -1),
            Down => Offset::new(0, 1),
            Left => Offset::new(-1, 0),
            Right => Offset::new(1, 0),
        }
    }

    /// The direction whose unit offset is `off`, if it is one.
    pub fn from_offset(off: Offset) -> Option<Direction> {
        match (off.x, off.y) {
            (0, -1) => Some(Up),
            (0, 1) => Some(Down),
            (-1, 0) => Some(Left),
            (1, 0) => Some(Right),
            _ => None,
        }
    }
}

/// The snake's body, head first. Consecutive segments are always
/// grid-adjacent; walls are the game loop's business, not the chain's.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    grow_next_move: bool,
}

impl Snake {
    pub fn new() -> Self {
        Snake::with_body(START_BODY.to_vec(), START_DIRECTION)
    }

    pub fn with_body(body: Vec<Cell>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty(), "a snake needs at least a head");
        Snake { body, direction, grow_next_move: false }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn propose_next_head(&self) -> Cell {
        self.head() + self.direction
    }

    /// Moves the head to `new_head`. The tail is kept when `grow` is set or a
    /// growth is pending; either way the chain gains at most one segment.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if grow || self.grow_next_move {
            self.grow_next_move = false;
        } else {
            self.body.pop();
        }
    }

    /// Returns whether the direction was taken. Reversing into the neck is refused.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_opposite(self.direction) {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }

    // The neck is skipped along with the head
    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(2).any(|seg| *seg == head)
    }
}
