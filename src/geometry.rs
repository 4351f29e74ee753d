use std::ops::{Add, Sub};

use crate::error::{Error, Result};
use crate::snake::Direction;
use crate::TermInt;

// A tile is two columns wide so that it looks square in most terminal fonts
pub const TILE_WIDTH: TermInt = 2;
pub const TILE_HEIGHT: TermInt = 1;
pub const FRAME_THICKNESS: TermInt = 1;

// Rows reserved above the frame for the score line
const SCORE_ROWS: TermInt = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: TermInt,
    pub y: TermInt,
    pub width: TermInt,
    pub height: TermInt,
}

/// Maps grid cells onto terminal character rectangles. The arena is
/// centered in the window, with its frame drawn just outside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    grid_size: TermInt,
    window: (TermInt, TermInt),
    origin: (TermInt, TermInt),
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Offset { x, y }
    }
}

impl Add<Direction> for Cell {
    type Output = Cell;

    fn add(self, dir: Direction) -> Cell {
        let off = dir.offset();
        Cell::new(self.x + off.x, self.y + off.y)
    }
}

impl Sub for Cell {
    type Output = Offset;

    fn sub(self, other: Cell) -> Offset {
        Offset::new(self.x - other.x, self.y - other.y)
    }
}

impl Rect {
    pub fn new(x: TermInt, y: TermInt, width: TermInt, height: TermInt) -> Self {
        Rect { x, y, width, height }
    }
}

impl GridGeometry {
    pub fn centered(window: (TermInt, TermInt), grid_size: i32) -> Result<Self> {
        let (width, height) = window;
        let grid = grid_size.max(0) as TermInt;
        let (arena_w, arena_h) = (grid * TILE_WIDTH, grid * TILE_HEIGHT);

        let needed_width = arena_w + 2 * FRAME_THICKNESS;
        let needed_height = arena_h + 2 * FRAME_THICKNESS + 2 * SCORE_ROWS;

        if width < needed_width || height < needed_height {
            return Err(Error::TerminalTooSmall {
                needed_width,
                needed_height,
                actual_width: width,
                actual_height: height,
            });
        }

        let origin = ((width - arena_w) / 2, (height - arena_h) / 2);
        Ok(GridGeometry { grid_size: grid, window, origin })
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size as i32
    }

    pub fn contains(&self, cell: Cell) -> bool {
        on_grid(cell, self.grid_size())
    }

    /// Only meaningful for cells inside the arena.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.origin.0 + cell.x as TermInt * TILE_WIDTH,
            self.origin.1 + cell.y as TermInt * TILE_HEIGHT,
            TILE_WIDTH,
            TILE_HEIGHT,
        )
    }

    pub fn arena(&self) -> Rect {
        Rect::new(
            self.origin.0,
            self.origin.1,
            self.grid_size * TILE_WIDTH,
            self.grid_size * TILE_HEIGHT,
        )
    }

    pub fn frame(&self) -> Rect {
        let arena = self.arena();
        Rect::new(
            arena.x - FRAME_THICKNESS,
            arena.y - FRAME_THICKNESS,
            arena.width + 2 * FRAME_THICKNESS,
            arena.height + 2 * FRAME_THICKNESS,
        )
    }

    pub fn score_position(&self, text: &str) -> (TermInt, TermInt) {
        (self.centered_x(text), self.frame().y - 1)
    }

    pub fn banner_position(&self, text: &str) -> (TermInt, TermInt) {
        (self.centered_x(text), self.window.1 / 2)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn centered_x(&self, text: &str) -> TermInt {
        let len = text.chars().count() as TermInt;
        (self.window.0 / 2).saturating_sub(len / 2)
    }
}

pub fn on_grid(cell: Cell, grid_size: i32) -> bool {
    (0..grid_size).contains(&cell.x) && (0..grid_size).contains(&cell.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_plus_direction_steps_one_tile() {
        let cell = Cell::new(7, 7);
        assert_eq!(cell + Direction::Right, Cell::new(8, 7));
        assert_eq!(cell + Direction::Left, Cell::new(6, 7));
        assert_eq!(cell + Direction::Up, Cell::new(7, 6));
        assert_eq!(cell + Direction::Down, Cell::new(7, 8));
    }

    #[test]
    fn cell_difference_is_an_offset() {
        assert_eq!(Cell::new(6, 7) - Cell::new(7, 7), Offset::new(-1, 0));
        assert_eq!(Cell::new(0, 0) - Cell::new(3, 5), Offset::new(-3, -5));
    }

    #[test]
    fn arena_is_centered_in_the_window() {
        let geo = GridGeometry::centered((80, 24), 15).unwrap();

        assert_eq!(geo.arena(), Rect::new(25, 4, 30, 15));
        assert_eq!(geo.frame(), Rect::new(24, 3, 32, 17));
        assert_eq!(geo.cell_rect(Cell::new(0, 0)), Rect::new(25, 4, 2, 1));
        assert_eq!(geo.cell_rect(Cell::new(14, 14)), Rect::new(53, 18, 2, 1));
    }

    #[test]
    fn score_sits_above_the_frame() {
        let geo = GridGeometry::centered((80, 24), 15).unwrap();
        assert_eq!(geo.score_position("SCORE: 0"), (36, 2));
        assert_eq!(geo.banner_position("GAME OVER"), (36, 12));
    }

    #[test]
    fn smallest_window_that_fits() {
        let geo = GridGeometry::centered((32, 19), 15).unwrap();
        assert_eq!(geo.frame(), Rect::new(0, 1, 32, 17));
        assert_eq!(geo.score_position("x").1, 0);
    }

    #[test]
    fn contains_stops_at_every_edge() {
        let geo = GridGeometry::centered((80, 24), 15).unwrap();
        let table = [
            ((0, 0), true),
            ((14, 14), true),
            ((0, 7), true),
            ((14, 7), true),
            ((7, 0), true),
            ((7, 14), true),
            ((-1, 7), false),
            ((15, 7), false),
            ((7, -1), false),
            ((7, 15), false),
            ((-1, -1), false),
        ];

        for &((x, y), inside) in table.iter() {
            assert_eq!(geo.contains(Cell::new(x, y)), inside, "({}, {})", x, y);
        }
    }

    #[test]
    fn too_small_window_is_rejected() {
        match GridGeometry::centered((31, 24), 15) {
            Err(Error::TerminalTooSmall { needed_width: 32, needed_height: 19, .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(GridGeometry::centered((80, 18), 15).is_err());
    }
}
