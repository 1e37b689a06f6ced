use reversi_core::board::Board;
use reversi_core::disc::Side;
use reversi_core::perft::{perft, perft_root};

#[test]
fn test_perft() {
    let expected = [4, 12, 56, 244, 1_396, 8_200, 55_092];
    for (depth, &nodes) in (1..).zip(expected.iter()) {
        assert_eq!(perft_root(depth), nodes, "perft mismatch at depth {depth}");
    }
}

#[test]
fn test_perft_is_symmetric_for_white() {
    // Swapping colors in the initial position mirrors it left to right.
    let board = Board::new();
    for depth in 1..=4 {
        assert_eq!(perft(&board, Side::White, depth), perft_root(depth));
    }
}

#[test]
fn test_perft_finished_game_is_one_leaf() {
    let board = Board::from_string(&"X".repeat(64)).unwrap();
    assert_eq!(perft(&board, Side::Black, 5), 1);
}
