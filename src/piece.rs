use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::{Direction, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Red => "Red",
        }
    }

    /// Even turn counts belong to blue, odd ones to red.
    pub fn for_turn(turn: u32) -> Color {
        if turn % 2 == 0 {
            Color::Blue
        } else {
            Color::Red
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single playing piece. The colour is fixed; only the position changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    color: Color,
    position: Position,
}

impl Circle {
    pub fn new(color: Color, position: Position) -> Self {
        Circle { color, position }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Step one cell in `direction` without any legality check.
    /// Returns the old and new positions so a view can follow the circle.
    pub fn move_to(&mut self, direction: Direction) -> (Position, Position) {
        let old = self.position;
        self.position = old.at(direction);
        (old, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_alternate_by_turn_parity() {
        assert_eq!(Color::for_turn(0), Color::Blue);
        assert_eq!(Color::for_turn(1), Color::Red);
        assert_eq!(Color::for_turn(2), Color::Blue);
        assert_eq!(Color::for_turn(3), Color::Red);
    }

    #[test]
    fn opposite_color() {
        assert_eq!(Color::Blue.opposite(), Color::Red);
        assert_eq!(Color::Red.opposite(), Color::Blue);
    }

    #[test]
    fn move_to_reports_old_and_new_position() {
        let mut circle = Circle::new(Color::Red, Position::new(0, 0));
        let (old, new) = circle.move_to(Direction::Down);
        assert_eq!(old, Position::new(0, 0));
        assert_eq!(new, Position::new(1, 0));
        assert_eq!(circle.position(), Position::new(1, 0));
        assert_eq!(circle.color(), Color::Red);
    }

    /// Circles do no bounds checking of their own.
    #[test]
    fn move_to_can_leave_the_board() {
        let mut circle = Circle::new(Color::Blue, Position::new(0, 0));
        circle.move_to(Direction::Up);
        assert_eq!(circle.position(), Position::new(-1, 0));
    }
}
