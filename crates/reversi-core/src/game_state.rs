//! Game state management for Reversi.
//!
//! This module provides the `GameState` struct which maintains the canonical
//! game position, validates moves against the side to move, records the move
//! history and detects the end of the game.

use std::cmp::Ordering;

use crate::board::Board;
use crate::disc::Side;
use crate::error::MoveError;
use crate::move_list::Move;

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The side with strictly more discs, or `None` for a draw.
    pub winner: Option<Side>,
    /// Number of black discs on the final board.
    pub black_count: u32,
    /// Number of white discs on the final board.
    pub white_count: u32,
}

impl Outcome {
    /// Scores a finished board.
    pub fn from_board(board: &Board) -> Outcome {
        let winner = match board.score_differential(Side::Black).cmp(&0) {
            Ordering::Greater => Some(Side::Black),
            Ordering::Less => Some(Side::White),
            Ordering::Equal => None,
        };
        Outcome {
            winner,
            black_count: board.count(Side::Black),
            white_count: board.count(Side::White),
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Turn status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// `Side` is to move. It may still be forced to pass.
    ToMove(Side),
    /// Neither side can place a disc. Absorbing.
    Terminal(Outcome),
}

/// Represents the state of a Reversi game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Side,
    /// Every move applied so far, passes included.
    history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Side::Black,
            history: Vec::new(),
        }
    }

    /// Creates a new game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns the turn status of the current position.
    pub fn status(&self) -> GameStatus {
        if self.board.is_game_over() {
            GameStatus::Terminal(Outcome::from_board(&self.board))
        } else {
            GameStatus::ToMove(self.side_to_move)
        }
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        matches!(self.status(), GameStatus::Terminal(_))
    }

    /// Returns `true` if the side to move has no placement and must pass.
    pub fn must_pass(&self) -> bool {
        !self.is_game_over() && !self.board.has_legal_placement(self.side_to_move)
    }

    /// Applies a move for the side to move and hands the turn over.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::InvalidMove` if the move belongs to the other side
    /// or is not legal on the current board. The state is left unchanged.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        if mv.side() != self.side_to_move {
            return Err(MoveError::InvalidMove(*mv));
        }

        self.board.apply_move(mv)?;
        self.history.push(*mv);
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Returns the disc count for both players as `(black, white)`.
    pub fn get_score(&self) -> (u32, u32) {
        (self.board.count(Side::Black), self.board.count(Side::White))
    }

    /// Returns the last move played, pass or placement.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Returns every move applied so far, passes included.
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game record as concatenated squares, e.g. `"d3c5f6"`.
    /// Passes are omitted as they are implied by the position.
    pub fn transcript(&self) -> String {
        self.history
            .iter()
            .filter_map(Move::square)
            .map(|sq| sq.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.status(), GameStatus::ToMove(Side::Black));
        assert!(!game.is_game_over());
        assert_eq!(game.get_score(), (2, 2));
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_play() {
        let mut game = GameState::new();
        game.play(&Move::new(Square::D3, Side::Black)).unwrap();
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.get_score(), (4, 1));
        assert_eq!(
            game.last_move(),
            Some(&Move::new(Square::D3, Side::Black))
        );
    }

    #[test]
    fn test_illegal_move() {
        let mut game = GameState::new();
        let before = *game.board();
        assert!(game.play(&Move::new(Square::A1, Side::Black)).is_err());
        assert_eq!(*game.board(), before);
        assert_eq!(game.side_to_move(), Side::Black);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_wrong_side_is_rejected() {
        let mut game = GameState::new();
        let mv = Move::new(Square::E3, Side::White);
        assert_eq!(game.play(&mv), Err(MoveError::InvalidMove(mv)));
        assert_eq!(game.side_to_move(), Side::Black);
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut game = GameState::new();
        game.play(&Move::new(Square::D3, Side::Black)).unwrap();
        game.play(&Move::new(Square::C3, Side::White)).unwrap();
        assert_eq!(game.side_to_move(), Side::Black);
        game.play(&Move::new(Square::C4, Side::Black)).unwrap();
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.transcript(), "d3c3c4");
    }

    #[test]
    fn test_forced_pass() {
        let board = Board::from_string(
            "XXXXXXXX
             XXXXXXXX
             XXXXXXXX
             XXXXXXXX
             XXXXXXXX
             XXXXXXXX
             XXXXXXOO
             XXXXXX--",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Side::White);
        assert!(game.must_pass());
        game.play(&Move::pass(Side::White)).unwrap();
        assert_eq!(game.side_to_move(), Side::Black);
        assert!(!game.must_pass());
        assert_eq!(game.transcript(), "");
        assert_eq!(game.move_history().len(), 1);
    }

    #[test]
    fn test_outcome() {
        let board = Board::from_string(
            "XXXXXXXX
             XXXXXXXX
             XXXXXXXX
             XXXXXXXX
             OOOOOOOO
             OOOOOOOO
             OOOOOOOO
             OOOOOOOO",
        )
        .unwrap();
        let game = GameState::from_board(board, Side::Black);
        let outcome = Outcome {
            winner: None,
            black_count: 32,
            white_count: 32,
        };
        assert_eq!(game.status(), GameStatus::Terminal(outcome));
        assert!(outcome.is_draw());

        let mut board = board;
        board.set_disc(Square::A8, crate::disc::Disc::Black);
        assert_eq!(Outcome::from_board(&board).winner, Some(Side::Black));
    }

    #[test]
    fn test_game_record_black_57_white_7() {
        // A complete game ending with Black: 57, White: 7.
        let moves_str = "e6f4c3c4d3d6e3d2f3f5c1c2b4b3a3e2c5c6f6g5g4a2a1a4f2h5g3f7h6h3f8f1e1d1h4h7a5g7h8g6g1g8b6e8b5g2d8b7a6h2e7d7c8a8a7b8c7h1b2b1";
        let mut game = GameState::new();

        for (i, chunk) in moves_str.as_bytes().chunks(2).enumerate() {
            let move_str = std::str::from_utf8(chunk).unwrap();
            let sq = move_str
                .parse::<Square>()
                .unwrap_or_else(|_| panic!("Failed to parse move #{}: {}", i + 1, move_str));
            if game.must_pass() {
                let side = game.side_to_move();
                game.play(&Move::pass(side)).unwrap();
            }
            let side = game.side_to_move();
            game.play(&Move::new(sq, side)).unwrap_or_else(|e| {
                panic!("Failed to make move #{} ({}): {}", i + 1, move_str, e);
            });
        }

        assert!(game.is_game_over());
        assert_eq!(game.get_score(), (57, 7));
        assert_eq!(game.transcript(), moves_str);
        assert_eq!(
            game.status(),
            GameStatus::Terminal(Outcome {
                winner: Some(Side::Black),
                black_count: 57,
                white_count: 7,
            })
        );
    }
}
