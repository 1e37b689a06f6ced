use crate::board::Board;
use crate::disc::Side;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Side::Black, depth)
}

/// Counts the leaves of the legal move tree below `board`.
///
/// Passes do not consume depth, and a finished game counts as one leaf.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return 1;
    }
    if moves.is_pass() {
        return perft(board, side.opposite(), depth);
    }
    if depth <= 1 {
        return moves.count() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        let next = board
            .make_move(mv)
            .unwrap_or_else(|err| panic!("perft generated an unplayable move: {err}"));
        nodes += perft(&next, side.opposite(), depth - 1);
    }
    nodes
}
