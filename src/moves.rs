use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::position::{Direction, Position};

/// A request to step circle `circle` one cell in `direction`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Move {
    pub circle: usize,
    pub direction: Direction,
}

impl Move {
    pub fn new(circle: usize, direction: Direction) -> Self {
        Move { circle, direction }
    }

    /// Build a move from a pair of clicked cells.
    pub fn from_cells(circle: usize, from: Position, to: Position) -> Result<Move, BoardError> {
        Ok(Move::new(circle, Direction::between(from, to)?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.circle, self.direction)
    }
}

/// Emitted whenever a circle changes cell, so a view can move its sprite.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PositionChange {
    pub circle: usize,
    pub from: Position,
    pub to: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_resolves_direction() {
        let mv = Move::from_cells(4, Position::new(4, 1), Position::new(3, 1)).unwrap();
        assert_eq!(mv, Move::new(4, Direction::Up));
    }

    #[test]
    fn from_cells_rejects_jumps() {
        assert!(Move::from_cells(0, Position::new(0, 0), Position::new(2, 0)).is_err());
    }

    #[test]
    fn display_names_circle_and_direction() {
        assert_eq!(Move::new(2, Direction::Right).to_string(), "#2 right");
    }
}
