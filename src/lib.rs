//! Circles: a sliding-piece tic-tac-toe variant on a 5x4 board.
//!
//! Each side has four circles. On a turn the active side steps one circle to
//! an empty orthogonal neighbour; three of its circles in a row, column or
//! short diagonal win.
//!
//! - [`position`] - coordinates, directions, board size
//! - [`piece`] - colours and circles
//! - [`moves`] - move requests and position-change notifications
//! - [`rules`] - win detection
//! - [`board`] - the board engine
//! - [`game`] - click-driven turn handling
//! - [`record`] - match result export

pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod piece;
pub mod position;
pub mod record;
pub mod rules;

#[cfg(target_arch = "wasm32")]
mod wasm_api;
