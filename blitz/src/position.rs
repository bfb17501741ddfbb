use serde::{Deserialize, Serialize};

/// A cell on the board.
///
/// The top-left cell is `(0, 0)`. `x` is the column, growing to the right,
/// and `y` is the row, growing downwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// The heading of a player on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The action a bot sends for one tick.
///
/// Moves are relative to the player's current [`Direction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Move {
    Forward,
    TurnLeft,
    TurnRight,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Forward, Move::TurnLeft, Move::TurnRight];
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in the given direction.
    ///
    /// This does not check whether the result is still on the board, use
    /// [`Board::validate()`](crate::Board::validate) for that.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// A direction that brings you closer to `target`.
    ///
    /// The vertical axis is preferred over the horizontal one. Returns `None`
    /// if both positions are the same.
    pub fn direction_to(self, target: Position) -> Option<Direction> {
        if self.y > target.y {
            Some(Direction::Up)
        } else if self.y < target.y {
            Some(Direction::Down)
        } else if self.x > target.x {
            Some(Direction::Left)
        } else if self.x < target.x {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Whether the two cells share an edge.
    pub fn is_next_to(self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    /// The `(dx, dy)` offset of one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }

    /// The direction a player faces after performing `mv`.
    pub fn turn(self, mv: Move) -> Self {
        match (mv, self) {
            (Move::Forward, dir) => dir,
            (Move::TurnLeft, Direction::Up) => Direction::Left,
            (Move::TurnLeft, Direction::Left) => Direction::Down,
            (Move::TurnLeft, Direction::Down) => Direction::Right,
            (Move::TurnLeft, Direction::Right) => Direction::Up,
            (Move::TurnRight, Direction::Up) => Direction::Right,
            (Move::TurnRight, Direction::Right) => Direction::Down,
            (Move::TurnRight, Direction::Down) => Direction::Left,
            (Move::TurnRight, Direction::Left) => Direction::Up,
        }
    }
}
