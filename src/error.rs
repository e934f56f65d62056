use crate::position::{Direction, Position};

/// Errors raised by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("no circle with id {id} (board holds {count})")]
    UnknownCircle { id: usize, count: usize },

    #[error("offset ({row_change},{col_change}) is not a unit direction")]
    InvalidDirection { row_change: i32, col_change: i32 },

    #[error("circle at {0} is off the board")]
    OffBoard(Position),

    #[error("more than one circle at {0}")]
    Overlap(Position),

    #[error("circle {id} cannot move {direction}")]
    IllegalMove { id: usize, direction: Direction },
}

/// Errors that can occur while exporting or reading back a match record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
