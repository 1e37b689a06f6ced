//! Game tree search engine.
//!
//! The engine is a plain negamax over the legal move lists of [`Board`]. Each
//! recursive call works on its own copy of the board, and the static
//! evaluation is the disc differential of the side to move.

pub mod options;
pub mod search_result;

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::disc::Side;
use crate::move_list::Move;
use crate::types::{Depth, Score};

pub use options::SearchOptions;
pub use search_result::SearchResult;

/// Main search engine structure.
#[derive(Clone, Debug, Default)]
pub struct Search {
    options: SearchOptions,
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        Search {
            options: options.clone(),
        }
    }

    /// Runs a search for `side` on the given board position.
    ///
    /// The root always looks at least one ply ahead, so a depth of 0 plays
    /// the greedy move instead of returning the terminal marker.
    pub fn run(&self, board: &Board, side: Side) -> SearchResult {
        let depth = self.options.depth.max(1);
        let mut n_nodes = 0;
        let (best_move, score) = if self.options.alpha_beta {
            alpha_beta(board, side, depth, -SCORE_INF, SCORE_INF, &mut n_nodes)
        } else {
            negamax(board, side, depth, &mut n_nodes)
        };

        SearchResult {
            best_move,
            score,
            n_nodes,
            depth,
        }
    }
}

/// Finds the best move for `side` searching `depth` plies with negamax.
///
/// When `depth` is 0 or the game is over, the returned move is a pass for
/// `side` scored with the current disc differential. Otherwise it is the
/// first legal move, in generation order, reaching the highest score.
pub fn best_move(board: &Board, side: Side, depth: Depth) -> (Move, Score) {
    let mut n_nodes = 0;
    negamax(board, side, depth, &mut n_nodes)
}

#[inline]
fn evaluate(board: &Board, side: Side) -> (Move, Score) {
    (Move::pass(side), board.score_differential(side))
}

/// Applies a move generated by `legal_moves` to a copy of `board`.
///
/// # Panics
///
/// Panics if the move is rejected, which means move generation and move
/// validation disagree.
#[inline]
fn play(board: &Board, mv: &Move) -> Board {
    board
        .make_move(mv)
        .unwrap_or_else(|err| panic!("search generated an unplayable move: {err}"))
}

fn negamax(board: &Board, side: Side, depth: Depth, n_nodes: &mut u64) -> (Move, Score) {
    *n_nodes += 1;
    if depth == 0 {
        return evaluate(board, side);
    }

    let moves = board.legal_moves(side);
    let Some(&first) = moves.first() else {
        return evaluate(board, side);
    };

    let mut best = (first, -SCORE_INF);
    for mv in &moves {
        let next = play(board, mv);
        let (_, reply) = negamax(&next, side.opposite(), depth - 1, n_nodes);
        let score = -reply;
        if score > best.1 {
            best = (*mv, score);
        }
    }
    best
}

/// Fail-soft alpha-beta. With the root window `(-INF, INF)` it selects the
/// same move and score as [`negamax`]: a later move that only ties the best
/// score can never exceed alpha, so the first-seen move is kept.
fn alpha_beta(
    board: &Board,
    side: Side,
    depth: Depth,
    mut alpha: Score,
    beta: Score,
    n_nodes: &mut u64,
) -> (Move, Score) {
    *n_nodes += 1;
    if depth == 0 {
        return evaluate(board, side);
    }

    let moves = board.legal_moves(side);
    let Some(&first) = moves.first() else {
        return evaluate(board, side);
    };

    let mut best = (first, -SCORE_INF);
    for mv in &moves {
        let next = play(board, mv);
        let (_, reply) = alpha_beta(&next, side.opposite(), depth - 1, -beta, -alpha, n_nodes);
        let score = -reply;
        if score > best.1 {
            best = (*mv, score);
            if score > alpha {
                alpha = score;
                if alpha >= beta {
                    break;
                }
            }
        }
    }
    best
}
