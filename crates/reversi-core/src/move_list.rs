//! Move values and the fixed-capacity list the board generates them into.

use std::fmt;
use std::slice;

use arrayvec::ArrayVec;

use crate::constants::MAX_MOVES;
use crate::disc::Side;
use crate::square::Square;

/// A single move: a disc placement or a pass.
///
/// Moves are plain values; search scores travel alongside them in
/// [`SearchResult`](crate::search::search_result::SearchResult) instead of
/// being stored on the move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Places a disc of `side` on `sq`.
    Place { sq: Square, side: Side },
    /// `side` passes without placing a disc.
    Pass { side: Side },
}

impl Move {
    /// Creates a placement move.
    #[inline]
    pub fn new(sq: Square, side: Side) -> Move {
        Move::Place { sq, side }
    }

    /// Creates a pass move.
    #[inline]
    pub fn pass(side: Side) -> Move {
        Move::Pass { side }
    }

    /// Creates a placement from `(x, y)` coordinates.
    ///
    /// # Returns
    ///
    /// `None` if the coordinates are off the board.
    pub fn from_xy(x: i32, y: i32, side: Side) -> Option<Move> {
        Square::from_xy(x, y).map(|sq| Move::new(sq, side))
    }

    /// Returns the side making this move.
    #[inline]
    pub fn side(&self) -> Side {
        match *self {
            Move::Place { side, .. } | Move::Pass { side } => side,
        }
    }

    /// Returns the target square, or `None` for a pass.
    #[inline]
    pub fn square(&self) -> Option<Square> {
        match *self {
            Move::Place { sq, .. } => Some(sq),
            Move::Pass { .. } => None,
        }
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { sq, .. } => write!(f, "{sq}"),
            Move::Pass { .. } => write!(f, "pass"),
        }
    }
}

/// Container for the legal moves of one side in a position.
///
/// Moves are kept in generation order, which is square index order for
/// placements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Creates an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: ArrayVec::new(),
        }
    }

    /// Appends a move to the list.
    ///
    /// # Panics
    ///
    /// Panics if the list already holds `MAX_MOVES` moves.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Returns the number of moves in the list.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns `true` if the list consists of a single pass.
    pub fn is_pass(&self) -> bool {
        self.moves.len() == 1 && self.moves[0].is_pass()
    }

    /// Returns the first move, if any.
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Returns an iterator over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the target squares of all placements in the list.
    pub fn squares(&self) -> Vec<Square> {
        self.moves.iter().filter_map(Move::square).collect()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accessors() {
        let mv = Move::new(Square::D3, Side::Black);
        assert_eq!(mv.side(), Side::Black);
        assert_eq!(mv.square(), Some(Square::D3));
        assert!(!mv.is_pass());

        let pass = Move::pass(Side::White);
        assert_eq!(pass.side(), Side::White);
        assert_eq!(pass.square(), None);
        assert!(pass.is_pass());
    }

    #[test]
    fn test_from_xy() {
        assert_eq!(
            Move::from_xy(3, 2, Side::White),
            Some(Move::new(Square::D3, Side::White))
        );
        assert_eq!(Move::from_xy(8, 0, Side::White), None);
        assert_eq!(Move::from_xy(0, -1, Side::Black), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(Square::F5, Side::Black).to_string(), "f5");
        assert_eq!(Move::pass(Side::Black).to_string(), "pass");
    }

    #[test]
    fn test_move_list() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        assert!(!list.is_pass());

        list.push(Move::new(Square::D3, Side::Black));
        list.push(Move::new(Square::C4, Side::Black));
        assert_eq!(list.count(), 2);
        assert!(list.contains(&Move::new(Square::C4, Side::Black)));
        assert!(!list.contains(&Move::new(Square::C4, Side::White)));
        assert_eq!(list.squares(), vec![Square::D3, Square::C4]);
        assert_eq!(list.first(), Some(&Move::new(Square::D3, Side::Black)));

        let mut pass = MoveList::new();
        pass.push(Move::pass(Side::White));
        assert!(pass.is_pass());
        assert!(pass.squares().is_empty());
    }
}
