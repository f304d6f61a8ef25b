use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Position one cell ahead of `pos` in this direction.
    pub fn next_position(self, pos: Position, cell_size: i32) -> Position {
        match self {
            Direction::Up => Position { x: pos.x, y: pos.y - cell_size },
            Direction::Down => Position { x: pos.x, y: pos.y + cell_size },
            Direction::Left => Position { x: pos.x - cell_size, y: pos.y },
            Direction::Right => Position { x: pos.x + cell_size, y: pos.y },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Snake body, head first, tail last. Length is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub body: VecDeque<Position>,
    pub direction: Direction,
}

impl Snake {
    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should not be empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("Snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.iter().any(|&p| p == pos)
    }
}
