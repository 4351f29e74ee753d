//! Picks the shape each snake segment is drawn with, using nothing but the
//! offsets to its neighbours in the chain.

use crate::geometry::{Cell, Offset};
use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    HeadUp,
    HeadDown,
    HeadLeft,
    HeadRight,
    TailUp,
    TailDown,
    TailLeft,
    TailRight,
    BodyVertical,
    BodyHorizontal,
    BodyTopLeft,
    BodyTopRight,
    BodyBottomLeft,
    BodyBottomRight,
}

impl Shape {
    #[cfg(test)]
    pub const ALL: [Shape; 14] = [
        Shape::HeadUp,
        Shape::HeadDown,
        Shape::HeadLeft,
        Shape::HeadRight,
        Shape::TailUp,
        Shape::TailDown,
        Shape::TailLeft,
        Shape::TailRight,
        Shape::BodyVertical,
        Shape::BodyHorizontal,
        Shape::BodyTopLeft,
        Shape::BodyTopRight,
        Shape::BodyBottomLeft,
        Shape::BodyBottomRight,
    ];
}

/// Shape of segment `index` in `body` (head first).
///
/// Panics if `index` is out of range.
pub fn shape_at(body: &[Cell], index: usize) -> Shape {
    let last = body.len() - 1;
    let cell = body[index];

    if index == 0 {
        let neck = body.get(1).map_or(Offset::new(0, 0), |next| *next - cell);
        head_shape(neck)
    } else if index == last {
        tail_shape(body[index - 1] - cell)
    } else {
        body_shape(body[index + 1] - cell, body[index - 1] - cell)
    }
}

/// `neck` is the offset from the head to the segment behind it. The head
/// faces away from its neck; anything that is not a unit step faces down.
pub fn head_shape(neck: Offset) -> Shape {
    match Direction::from_offset(neck) {
        Some(Right) => Shape::HeadLeft,
        Some(Left) => Shape::HeadRight,
        Some(Down) => Shape::HeadUp,
        Some(Up) | None => Shape::HeadDown,
    }
}

/// `relation` is the offset from the tail to the segment in front of it.
pub fn tail_shape(relation: Offset) -> Shape {
    match Direction::from_offset(relation) {
        Some(Right) => Shape::TailLeft,
        Some(Left) => Shape::TailRight,
        Some(Down) => Shape::TailUp,
        Some(Up) | None => Shape::TailDown,
    }
}

/// `prev` points towards the tail, `next` towards the head.
pub fn body_shape(prev: Offset, next: Offset) -> Shape {
    if prev.x == next.x {
        return Shape::BodyVertical;
    }
    if prev.y == next.y {
        return Shape::BodyHorizontal;
    }

    match (Direction::from_offset(prev), Direction::from_offset(next)) {
        (Some(Left), Some(Up)) | (Some(Up), Some(Left)) => Shape::BodyTopLeft,
        (Some(Left), Some(Down)) | (Some(Down), Some(Left)) => Shape::BodyBottomLeft,
        (Some(Right), Some(Up)) | (Some(Up), Some(Right)) => Shape::BodyTopRight,
        _ => Shape::BodyBottomRight,
    }
}
