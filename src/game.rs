//! Click-driven turn handling on top of [`Board`].
//!
//! A turn has two selection phases. First the player picks one of their own
//! circles, then one of the empty neighbouring cells that circle may step
//! into. After the step the mover's circles are tested for a win; if there is
//! none the turn passes to the other colour. Clicks on anything that is not
//! currently selectable are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::Board;
use crate::moves::{Move, PositionChange};
use crate::piece::Color;
use crate::position::Position;
use crate::record::MatchRecord;
use crate::rules::WinLine;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    pub blue: String,
    pub red: String,
}

impl Players {
    pub fn new(blue: impl Into<String>, red: impl Into<String>) -> Self {
        Players {
            blue: blue.into(),
            red: red.into(),
        }
    }

    pub fn name(&self, color: Color) -> &str {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Players::new(Color::Blue.name(), Color::Red.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    SelectingSource,
    SelectingDestination { circle: usize, from: Position },
    GameOver { winner: Color },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ClickOutcome {
    /// Nothing selectable was clicked; state is unchanged.
    Ignored,
    Selected { circle: usize, from: Position },
    Moved { change: PositionChange, next: Color },
    Won { change: PositionChange, winner: Color, line: WinLine },
}

pub struct Game {
    board: Board,
    phase: Phase,
    selectable: Vec<Position>,
    players: Players,
}

impl Game {
    /// Start a game on the standard layout with a random first player.
    pub fn new(players: Players) -> Self {
        Self::with_board(Board::new(), players)
    }

    /// Start a game on an existing board. The board's turn counter is
    /// advanced once as the first source selection begins.
    pub fn with_board(board: Board, players: Players) -> Self {
        let mut game = Game {
            board,
            phase: Phase::SelectingSource,
            selectable: Vec::new(),
            players,
        };
        game.begin_turn();
        game
    }

    /// Throw the current game away and deal a fresh board.
    pub fn reset(&mut self) {
        self.reset_with(Board::new());
    }

    pub fn reset_with(&mut self, board: Board) {
        info!("game reset");
        self.board = board;
        self.begin_turn();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Cells that would currently react to a click.
    pub fn selectable(&self) -> &[Position] {
        &self.selectable
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn active_color(&self) -> Color {
        self.board.active_color()
    }

    pub fn active_player(&self) -> &str {
        self.players.name(self.active_color())
    }

    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::GameOver { winner } => format!("{} wins", self.players.name(winner)),
            _ => format!("{} turns", self.active_player()),
        }
    }

    /// Result of a finished game, dated `date`.
    pub fn record(&self, date: NaiveDate) -> Option<MatchRecord> {
        let winner = self.winner()?;
        Some(MatchRecord::new(
            self.players.name(winner),
            self.players.name(winner.opposite()),
            date,
        ))
    }

    /// Leave destination selection and pick a source again, same player.
    /// This is the way out after selecting a circle with no legal step.
    pub fn cancel_selection(&mut self) {
        if let Phase::SelectingDestination { .. } = self.phase {
            self.phase = Phase::SelectingSource;
            self.selectable = self.board.active_positions();
        }
    }

    /// Result of a finished game, dated with the local calendar day.
    pub fn record_today(&self) -> Option<MatchRecord> {
        let winner = self.winner()?;
        Some(MatchRecord::today(
            self.players.name(winner),
            self.players.name(winner.opposite()),
        ))
    }

    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) -> ClickOutcome {
        if self.is_over() || !self.selectable.contains(&position) {
            return ClickOutcome::Ignored;
        }
        match self.phase {
            Phase::SelectingSource => self.select_source(position),
            Phase::SelectingDestination { circle, from } => self.select_destination(circle, from, position),
            Phase::GameOver { .. } => ClickOutcome::Ignored,
        }
    }

    fn select_source(&mut self, from: Position) -> ClickOutcome {
        let Some(circle) = self.board.circle_at(from) else {
            return ClickOutcome::Ignored;
        };
        self.phase = Phase::SelectingDestination { circle, from };
        self.selectable = self.board.destinations(circle).unwrap_or_default();
        debug!(circle, %from, "source selected");
        ClickOutcome::Selected { circle, from }
    }

    fn select_destination(&mut self, circle: usize, from: Position, to: Position) -> ClickOutcome {
        let change = match Move::from_cells(circle, from, to).and_then(|mv| self.board.play(mv)) {
            Ok(change) => change,
            Err(err) => {
                warn!(%err, "rejected destination");
                return ClickOutcome::Ignored;
            }
        };

        self.board.check_active_win();
        if let Some(&line) = self.board.winning_line() {
            let winner = self.board.active_color();
            self.phase = Phase::GameOver { winner };
            self.selectable.clear();
            info!(winner = self.players.name(winner), cells = ?line.cells, "game over");
            return ClickOutcome::Won { change, winner, line };
        }

        self.begin_turn();
        ClickOutcome::Moved {
            change,
            next: self.board.active_color(),
        }
    }

    /// Hand the move to the next colour; all of its circles become selectable.
    fn begin_turn(&mut self) {
        self.board.advance_turn();
        self.phase = Phase::SelectingSource;
        self.selectable = self.board.active_positions();
        debug!(turn = self.board.turn(), color = %self.board.active_color(), "turn started");
    }
}
