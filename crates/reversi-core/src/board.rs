//! Reversi board representation as an 8x8 grid of cells.

use std::fmt;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::disc::{Disc, Side};
use crate::error::{BoardParseError, MoveError};
use crate::flip;
use crate::move_list::{Move, MoveList};
use crate::square::Square;
use crate::types::Score;

/// Represents a Reversi board as 64 cells in square index order.
///
/// `Board` is `Copy`: copying yields an independent grid, so hypothetical
/// positions can be explored without touching the original.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Disc; BOARD_SQUARES],
}

impl Default for Board {
    /// Creates a board with the standard Reversi starting position.
    ///
    /// The initial position has:
    /// - Black discs on D5 and E4
    /// - White discs on D4 and E5
    fn default() -> Self {
        let mut board = Board::empty();
        board.set_disc(Square::D4, Disc::White);
        board.set_disc(Square::E5, Disc::White);
        board.set_disc(Square::D5, Disc::Black);
        board.set_disc(Square::E4, Disc::Black);
        board
    }
}

impl Board {
    /// Creates a new `Board` with the initial Reversi setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with every cell empty.
    pub fn empty() -> Board {
        Board {
            cells: [Disc::Empty; BOARD_SQUARES],
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string lists the 64 squares from A1 to H8. `X` is a black disc,
    /// `O` a white disc and `-` an empty square. Whitespace is ignored, so
    /// the board may be written one rank per line.
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown character or when the string does not
    /// describe exactly 64 squares.
    pub fn from_string(board_string: &str) -> Result<Board, BoardParseError> {
        let mut board = Board::empty();
        let mut n = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let disc = Disc::from_char(c).ok_or(BoardParseError::InvalidChar(c))?;
            if let Some(sq) = Square::from_usize(n) {
                board.set_disc(sq, disc);
            }
            n += 1;
        }
        if n != BOARD_SQUARES {
            return Err(BoardParseError::WrongLength(n));
        }
        Ok(board)
    }

    /// Gets the content of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`.
    pub fn cell(&self, x: usize, y: usize) -> Disc {
        assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "Cell ({x}, {y}) is off the board"
        );
        self.cells[y * BOARD_SIZE + x]
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[Disc; BOARD_SQUARES] {
        &self.cells
    }

    /// Gets the disc at a specific square.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        self.cells[sq.index()]
    }

    /// Overwrites the content of a square without any rule checks.
    #[inline]
    pub fn set_disc(&mut self, sq: Square, disc: Disc) {
        self.cells[sq.index()] = disc;
    }

    /// Returns `true` if `side` may place a disc on `sq`.
    #[inline]
    fn is_placement(&self, sq: Square, side: Side) -> bool {
        self.disc_at(sq).is_empty() && flip::forms_sandwich(&self.cells, sq, side)
    }

    /// Checks if `side` has at least one legal placement.
    ///
    /// Returns `false` when `side` must pass or the board is full.
    pub fn has_legal_placement(&self, side: Side) -> bool {
        Square::iter().any(|sq| self.is_placement(sq, side))
    }

    /// Generates the legal moves of `side`.
    ///
    /// # Returns
    ///
    /// * every legal placement in square index order, if there is any;
    /// * otherwise a single pass, if the opponent has a placement;
    /// * otherwise an empty list, as neither side can move.
    pub fn legal_moves(&self, side: Side) -> MoveList {
        let mut moves = MoveList::new();
        for sq in Square::iter().filter(|&sq| self.is_placement(sq, side)) {
            moves.push(Move::new(sq, side));
        }

        if moves.is_empty() && self.has_legal_placement(side.opposite()) {
            moves.push(Move::pass(side));
        }
        moves
    }

    /// Checks whether `mv` may be played on this board.
    ///
    /// A pass is legal only when the passing side has no placement and the
    /// opponent has one; passing in a deadlock is rejected.
    pub fn is_legal(&self, mv: &Move) -> bool {
        match *mv {
            Move::Pass { side } => {
                !self.has_legal_placement(side) && self.has_legal_placement(side.opposite())
            }
            Move::Place { sq, side } => self.is_placement(sq, side),
        }
    }

    /// Applies `mv` in place, flipping every captured disc.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::InvalidMove` and leaves the board untouched if the
    /// move is not legal.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if !self.is_legal(mv) {
            return Err(MoveError::InvalidMove(*mv));
        }

        if let Move::Place { sq, side } = *mv {
            // Each direction is resolved against the grid before any flip.
            let flipped = flip::flips(&self.cells, sq, side);
            self.set_disc(sq, side.into());
            for f in flipped {
                self.set_disc(f, side.into());
            }
        }
        Ok(())
    }

    /// Returns a copy of this board with `mv` applied.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::InvalidMove` if the move is not legal.
    pub fn make_move(&self, mv: &Move) -> Result<Board, MoveError> {
        let mut next = *self;
        next.apply_move(mv)?;
        Ok(next)
    }

    /// Returns the discs a placement of `side` on `sq` would flip.
    ///
    /// The result is empty if `sq` is occupied or nothing is captured.
    pub fn flips(&self, sq: Square, side: Side) -> Vec<Square> {
        if !self.disc_at(sq).is_empty() {
            return Vec::new();
        }
        flip::flips(&self.cells, sq, side)
    }

    /// Returns the number of discs `side` has on the board.
    pub fn count(&self, side: Side) -> u32 {
        let disc = Disc::from(side);
        self.cells.iter().filter(|&&d| d == disc).count() as u32
    }

    /// Returns the number of empty squares on the board.
    pub fn empty_count(&self) -> u32 {
        self.cells.iter().filter(|d| d.is_empty()).count() as u32
    }

    /// Returns the number of discs of `side` minus those of its opponent.
    pub fn score_differential(&self, side: Side) -> Score {
        self.count(side) as Score - self.count(side.opposite()) as Score
    }

    /// Checks if the game is over (neither side can place a disc).
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_placement(Side::Black) && !self.has_legal_placement(Side::White)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for y in 0..BOARD_SIZE {
            write!(f, "{}", y + 1)?;
            for x in 0..BOARD_SIZE {
                write!(f, " {}", self.cell(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
