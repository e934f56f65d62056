use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Board height.
pub const ROWS: i32 = 5;
/// Board width.
pub const COLS: i32 = 4;

/// A cell coordinate. May lie off the board; callers check with
/// [`Position::is_on_board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn at(self, direction: Direction) -> Position {
        Position::new(self.row + direction.row_change(), self.col + direction.col_change())
    }

    pub fn is_on_board(self) -> bool {
        (0..ROWS).contains(&self.row) && (0..COLS).contains(&self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn row_change(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Right | Direction::Left => 0,
        }
    }

    pub fn col_change(self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::Up | Direction::Down => 0,
        }
    }

    /// Resolve a unit offset back to its direction.
    pub fn of(row_change: i32, col_change: i32) -> Result<Direction, BoardError> {
        Direction::ALL
            .into_iter()
            .find(|d| d.row_change() == row_change && d.col_change() == col_change)
            .ok_or(BoardError::InvalidDirection { row_change, col_change })
    }

    /// The direction leading from `from` to the adjacent cell `to`.
    pub fn between(from: Position, to: Position) -> Result<Direction, BoardError> {
        Direction::of(to.row - from.row, to.col - from.col)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_offsets_by_unit_vector() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.at(Direction::Up), Position::new(-1, 0));
        assert_eq!(origin.at(Direction::Right), Position::new(0, 1));
        assert_eq!(origin.at(Direction::Down), Position::new(1, 0));
        assert_eq!(origin.at(Direction::Left), Position::new(0, -1));
    }

    #[test]
    fn at_matches_offsets_everywhere_on_board() {
        for r in 0..ROWS {
            for c in 0..COLS {
                for d in Direction::ALL {
                    let p = Position::new(r, c).at(d);
                    assert_eq!(p, Position::new(r + d.row_change(), c + d.col_change()));
                }
            }
        }
    }

    #[test]
    fn of_inverts_each_direction() {
        for d in Direction::ALL {
            assert_eq!(Direction::of(d.row_change(), d.col_change()), Ok(d));
        }
    }

    #[test]
    fn of_rejects_non_unit_offsets() {
        for (dr, dc) in [(0, 0), (1, 1), (-1, 1), (2, 0), (0, -2), (5, 3)] {
            assert_eq!(
                Direction::of(dr, dc),
                Err(BoardError::InvalidDirection { row_change: dr, col_change: dc })
            );
        }
    }

    #[test]
    fn between_adjacent_cells() {
        let from = Position::new(2, 2);
        assert_eq!(Direction::between(from, Position::new(1, 2)), Ok(Direction::Up));
        assert_eq!(Direction::between(from, Position::new(2, 1)), Ok(Direction::Left));
        assert!(Direction::between(from, Position::new(3, 3)).is_err());
    }

    #[test]
    fn on_board_bounds() {
        assert!(!Position::new(5, 2).is_on_board());
        assert!(!Position::new(3, 4).is_on_board());
        assert!(!Position::new(-1, 0).is_on_board());
        assert!(Position::new(1, 3).is_on_board());
        assert!(Position::new(4, 0).is_on_board());
    }

    #[test]
    fn display_format() {
        assert_eq!(Position::new(0, 0).to_string(), "(0,0)");
        assert_eq!(Position::new(4, 3).to_string(), "(4,3)");
        assert_eq!(Position::new(2, 1).to_string(), "(2,1)");
    }
}
