use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::BoardError;
use crate::moves::{Move, PositionChange};
use crate::piece::{Circle, Color};
use crate::position::{Direction, Position, COLS, ROWS};
use crate::rules::{self, WinLine};

/// Random starting parity (0 or 1).
/// Uses js_sys::Math::random() in WASM builds, rand crate natively.
fn random_parity() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() < 0.5) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use rand::Rng;
        rand::thread_rng().gen_range(0..2)
    }
}

#[derive(Clone, Serialize, Debug)]
pub struct Board {
    circles: Vec<Circle>,
    turn: u32,
    winning_line: Option<WinLine>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting layout with a random first turn.
    pub fn new() -> Self {
        Self::with_first_turn(random_parity())
    }

    /// The standard starting layout with a deterministic turn counter.
    pub fn with_first_turn(turn: u32) -> Self {
        let last = ROWS - 1;
        let circles = vec![
            Circle::new(Color::Blue, Position::new(0, 0)),
            Circle::new(Color::Red, Position::new(0, 1)),
            Circle::new(Color::Blue, Position::new(0, 2)),
            Circle::new(Color::Red, Position::new(0, 3)),
            Circle::new(Color::Blue, Position::new(last, 1)),
            Circle::new(Color::Red, Position::new(last, 0)),
            Circle::new(Color::Blue, Position::new(last, 3)),
            Circle::new(Color::Red, Position::new(last, 2)),
        ];
        Board {
            circles,
            turn,
            winning_line: None,
        }
    }

    /// The standard starting layout, with the first turn drawn from a seeded RNG.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn seeded(seed: u64) -> Self {
        use rand::{rngs::StdRng, Rng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_first_turn(rng.gen_range(0..2))
    }

    /// A custom layout. Every circle must be on the board and no two may share a cell.
    pub fn from_circles(circles: Vec<Circle>, turn: u32) -> Result<Self, BoardError> {
        let mut seen = HashSet::new();
        for circle in &circles {
            let pos = circle.position();
            if !pos.is_on_board() {
                return Err(BoardError::OffBoard(pos));
            }
            if !seen.insert(pos) {
                return Err(BoardError::Overlap(pos));
            }
        }
        Ok(Board {
            circles,
            turn,
            winning_line: None,
        })
    }

    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    fn circle(&self, id: usize) -> Result<&Circle, BoardError> {
        self.circles.get(id).ok_or(BoardError::UnknownCircle {
            id,
            count: self.circles.len(),
        })
    }

    pub fn color_of(&self, id: usize) -> Result<Color, BoardError> {
        Ok(self.circle(id)?.color())
    }

    pub fn position_of(&self, id: usize) -> Result<Position, BoardError> {
        Ok(self.circle(id)?.position())
    }

    /// Id of the circle occupying `position`, if any.
    pub fn circle_at(&self, position: Position) -> Option<usize> {
        self.circles.iter().position(|c| c.position() == position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.circle_at(position).is_some()
    }

    /// A move is valid when the destination is on the board and empty.
    pub fn is_valid_move(&self, id: usize, direction: Direction) -> Result<bool, BoardError> {
        let target = self.circle(id)?.position().at(direction);
        Ok(target.is_on_board() && !self.is_occupied(target))
    }

    pub fn valid_moves(&self, id: usize) -> Result<Vec<Direction>, BoardError> {
        let mut moves = Vec::new();
        for direction in Direction::ALL {
            if self.is_valid_move(id, direction)? {
                moves.push(direction);
            }
        }
        Ok(moves)
    }

    /// Cells the circle `id` could step into.
    pub fn destinations(&self, id: usize) -> Result<Vec<Position>, BoardError> {
        let from = self.position_of(id)?;
        Ok(self.valid_moves(id)?.into_iter().map(|d| from.at(d)).collect())
    }

    /// Step a circle without checking the destination. Leaving the board or
    /// landing on another circle is the caller's problem.
    pub fn move_unchecked(&mut self, id: usize, direction: Direction) -> Result<PositionChange, BoardError> {
        let count = self.circles.len();
        let circle = self
            .circles
            .get_mut(id)
            .ok_or(BoardError::UnknownCircle { id, count })?;
        let (from, to) = circle.move_to(direction);
        Ok(PositionChange { circle: id, from, to })
    }

    /// Step a circle after confirming the move is legal.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, id: usize, direction: Direction) -> Result<PositionChange, BoardError> {
        if !self.is_valid_move(id, direction)? {
            return Err(BoardError::IllegalMove { id, direction });
        }
        let change = self.move_unchecked(id, direction)?;
        debug!(from = %change.from, to = %change.to, "circle moved");
        Ok(change)
    }

    pub fn play(&mut self, mv: Move) -> Result<PositionChange, BoardError> {
        self.apply_move(mv.circle, mv.direction)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn advance_turn(&mut self) {
        self.turn = self.turn.wrapping_add(1);
    }

    pub fn active_color(&self) -> Color {
        Color::for_turn(self.turn)
    }

    /// Positions of the active colour's circles, in id order.
    pub fn active_positions(&self) -> Vec<Position> {
        let active = self.active_color();
        self.circles
            .iter()
            .filter(|c| c.color() == active)
            .map(|c| c.position())
            .collect()
    }

    /// Test `positions` for a win and remember the winning line.
    /// The stored line is replaced on every call, so repeated calls with the
    /// same input leave the same state behind.
    pub fn check_win(&mut self, positions: &[Position]) -> bool {
        self.winning_line = rules::find_win(positions);
        self.winning_line.is_some()
    }

    /// Whether the active colour currently has a winning line.
    pub fn check_active_win(&mut self) -> bool {
        let positions = self.active_positions();
        self.check_win(&positions)
    }

    pub fn winning_line(&self) -> Option<&WinLine> {
        self.winning_line.as_ref()
    }

    pub fn winning_positions(&self) -> Option<[Position; 3]> {
        self.winning_line.map(|line| line.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let ch = match self.circle_at(Position::new(row, col)).map(|id| self.circles[id].color()) {
                    Some(Color::Blue) => 'B',
                    Some(Color::Red) => 'R',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
