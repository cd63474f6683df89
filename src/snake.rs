use crate::Cell;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// One-cell step in this direction, in (col, row) units.
    pub fn delta(self) -> Cell {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Left | Right)
    }
}

/// The snake's segments, head first.
pub struct SnakeBody {
    segments: Vec<Cell>,
}

impl SnakeBody {
    /// A body of `length` segments stacked on `start`. `length` must be at least 1.
    pub fn new(start: Cell, length: usize) -> Self {
        SnakeBody { segments: vec![start; length] }
    }

    #[cfg(test)]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        assert!(!segments.is_empty());
        SnakeBody { segments }
    }

    pub fn segments(&self) -> &[Cell] {
        &self.segments
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Shifts every segment onto its predecessor's cell, then steps the head.
    /// Bounds are not checked here.
    pub fn advance(&mut self, direction: Direction) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let (dx, dy) = direction.delta();
        let head = &mut self.segments[0];
        head.0 += dx;
        head.1 += dy;
    }

    /// Appends a segment one cell down-right of the old tail, which becomes
    /// the second-to-last segment. It is not necessarily adjacent to the body.
    pub fn grow(&mut self) {
        let (x, y) = self.segments[self.segments.len() - 1];
        self.segments.push((x + 1, y + 1));
    }
}
