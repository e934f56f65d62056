use crate::game::{ClickOutcome, Game, Phase, Players};
use crate::piece::Color;
use crate::position::{Position, COLS, ROWS};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BoardState {
    /// `cells[row][col]` holds "Blue", "Red" or null.
    cells: Vec<Vec<Option<String>>>,
    current_turn: String,
    status: String,
    game_over: bool,
    winner: Option<String>,
    selected: Option<[i32; 2]>,
    selectable: Vec<[i32; 2]>,
    winning_cells: Vec<[i32; 2]>,
}

#[derive(Serialize)]
struct ClickResult {
    #[serde(flatten)]
    board_state: BoardState,
    /// Cells whose circle moved this click: `[[from_row, from_col], [to_row, to_col]]`.
    moved: Option<[[i32; 2]; 2]>,
    accepted: bool,
}

fn color_to_string(c: Color) -> String {
    c.name().to_string()
}

fn cell(p: Position) -> [i32; 2] {
    [p.row, p.col]
}

fn build_board_state(game: &Game) -> BoardState {
    let board = game.board();
    let cells: Vec<Vec<Option<String>>> = (0..ROWS)
        .map(|r| {
            (0..COLS)
                .map(|c| {
                    board
                        .circle_at(Position::new(r, c))
                        .and_then(|id| board.color_of(id).ok())
                        .map(color_to_string)
                })
                .collect()
        })
        .collect();

    let selected = match game.phase() {
        Phase::SelectingDestination { from, .. } => Some(cell(from)),
        _ => None,
    };

    let winning_cells: Vec<[i32; 2]> = if game.is_over() {
        board.winning_positions().map(|ps| ps.iter().copied().map(cell).collect()).unwrap_or_default()
    } else {
        Vec::new()
    };

    BoardState {
        cells,
        current_turn: color_to_string(game.active_color()),
        status: game.status_line(),
        game_over: game.is_over(),
        winner: game.winner().map(color_to_string),
        selected,
        selectable: game.selectable().iter().copied().map(cell).collect(),
        winning_cells,
    }
}

#[wasm_bindgen]
pub struct CirclesGame {
    game: Game,
}

#[wasm_bindgen]
impl CirclesGame {
    #[wasm_bindgen(constructor)]
    pub fn new(blue_name: Option<String>, red_name: Option<String>) -> CirclesGame {
        let defaults = Players::default();
        let players = Players::new(
            blue_name.unwrap_or(defaults.blue),
            red_name.unwrap_or(defaults.red),
        );
        CirclesGame {
            game: Game::new(players),
        }
    }

    pub fn get_board_state(&self) -> JsValue {
        let state = build_board_state(&self.game);
        serde_wasm_bindgen::to_value(&state).unwrap_or(JsValue::NULL)
    }

    /// Handle a click on grid cell (row, col).
    pub fn click(&mut self, row: i32, col: i32) -> JsValue {
        let outcome = self.game.click(Position::new(row, col));
        let moved = match outcome {
            ClickOutcome::Moved { change, .. } | ClickOutcome::Won { change, .. } => {
                Some([cell(change.from), cell(change.to)])
            }
            _ => None,
        };
        let result = ClickResult {
            board_state: build_board_state(&self.game),
            moved,
            accepted: outcome != ClickOutcome::Ignored,
        };
        serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
    }

    pub fn cancel_selection(&mut self) -> JsValue {
        self.game.cancel_selection();
        self.get_board_state()
    }

    pub fn reset(&mut self) -> JsValue {
        self.game.reset();
        self.get_board_state()
    }

    /// The finished game's result as pretty JSON, dated `date` (YYYY-MM-DD),
    /// or null while the game is still running.
    pub fn result_json(&self, date: &str) -> JsValue {
        let Ok(date) = date.parse() else {
            return JsValue::NULL;
        };
        match self.game.record(date).map(|r| r.to_json_pretty()) {
            Some(Ok(json)) => JsValue::from_str(&json),
            _ => JsValue::NULL,
        }
    }
}
