//! Error types shared across the engine.

use thiserror::Error;

use crate::disc::Side;
use crate::move_list::Move;

/// Error returned when a move cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid move: {0}")]
    InvalidMove(Move),
}

/// Error returned when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("Invalid board character '{0}'")]
    InvalidChar(char),
    #[error("Board must describe 64 squares, found {0}")]
    WrongLength(usize),
}

/// Error ending a game before it reaches a terminal position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0} withdrew from the game")]
    Aborted(Side),
}
