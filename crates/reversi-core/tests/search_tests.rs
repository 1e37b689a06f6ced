use reversi_core::board::Board;
use reversi_core::disc::Side;
use reversi_core::move_list::Move;
use reversi_core::search::{Search, SearchOptions, best_move};
use reversi_core::square::Square;

#[test]
fn test_search_is_deterministic() {
    let board = Board::new()
        .make_move(&Move::new(Square::D3, Side::Black))
        .unwrap();
    let options = SearchOptions::with_depth(4);
    let first = Search::new(&options).run(&board, Side::White);
    let second = Search::new(&options).run(&board, Side::White);
    assert_eq!(first, second);
}

#[test]
fn test_depth_zero_symmetry() {
    let board = Board::from_string(
        "--------
         --------
         --------
         ---OX---
         ---XXX--
         --------
         --------
         --------",
    )
    .unwrap();
    let (black_move, black_score) = best_move(&board, Side::Black, 0);
    let (white_move, white_score) = best_move(&board, Side::White, 0);
    assert_eq!(black_move, Move::pass(Side::Black));
    assert_eq!(white_move, Move::pass(Side::White));
    assert_eq!(black_score, 3);
    assert_eq!(white_score, -black_score);
}

#[test]
fn test_search_move_is_legal() {
    let mut board = Board::new();
    let mut side = Side::Black;
    let search = Search::new(&SearchOptions {
        depth: 3,
        alpha_beta: true,
    });
    while !board.is_game_over() {
        let result = search.run(&board, side);
        assert_eq!(result.best_move.side(), side);
        assert!(board.legal_moves(side).contains(&result.best_move));
        board.apply_move(&result.best_move).unwrap();
        side = side.opposite();
    }
}
