//! Disc flip calculation by ray casting.
//!
//! A placement captures along a direction when the neighboring cells form a
//! contiguous run of opponent discs that is closed off by a disc of the mover.

use crate::constants::BOARD_SQUARES;
use crate::disc::{Disc, Side};
use crate::square::Square;

/// The eight ray directions as `(dx, dy)` steps.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Returns the length of the opponent run bracketed by `side` when casting a
/// ray from `sq` in direction `(dx, dy)`.
///
/// Returns 0 when the neighbor is not an opponent disc, or when the run
/// reaches an empty cell or the board edge before a disc of `side`.
#[inline]
pub fn bracketed_run(
    cells: &[Disc; BOARD_SQUARES],
    sq: Square,
    side: Side,
    dx: i32,
    dy: i32,
) -> usize {
    let own = Disc::from(side);
    let opponent = Disc::from(side.opposite());

    let mut len = 0;
    let mut cursor = sq.offset(dx, dy);
    while let Some(cur) = cursor {
        match cells[cur.index()] {
            d if d == opponent => len += 1,
            d if d == own => return len,
            _ => return 0,
        }
        cursor = cur.offset(dx, dy);
    }
    0
}

/// Returns `true` if placing `side` at `sq` captures in at least one direction.
///
/// The occupancy of `sq` itself is not examined.
#[inline]
pub fn forms_sandwich(cells: &[Disc; BOARD_SQUARES], sq: Square, side: Side) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| bracketed_run(cells, sq, side, dx, dy) > 0)
}

/// Calculates which opponent discs would be flipped by placing `side` at `sq`.
///
/// Squares are grouped by direction, nearest first within each direction.
/// Returns an empty vector if the placement captures nothing.
pub fn flips(cells: &[Disc; BOARD_SQUARES], sq: Square, side: Side) -> Vec<Square> {
    let mut flipped = Vec::new();
    for &(dx, dy) in DIRECTIONS.iter() {
        let len = bracketed_run(cells, sq, side, dx, dy);
        let mut cursor = sq;
        for _ in 0..len {
            let Some(next) = cursor.offset(dx, dy) else {
                break;
            };
            flipped.push(next);
            cursor = next;
        }
    }
    flipped
}
