//! Global constants

use crate::types::{Depth, Score};

/// Number of squares along one edge of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the Reversi board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Upper bound on the number of moves in a `MoveList`.
pub const MAX_MOVES: usize = BOARD_SQUARES;

/// Infinity score for search algorithms.
pub const SCORE_INF: Score = 30000;

/// Search depth used by the computer player unless configured otherwise.
pub const DEFAULT_DEPTH: Depth = 5;
