//! Console rendering of the game.

use std::time::Duration;

use colored::Colorize;
use num_format::{Locale, ToFormattedString};
use reversi_core::board::Board;
use reversi_core::disc::{Disc, Side};
use reversi_core::game::GameEvent;
use reversi_core::game_state::Outcome;
use reversi_core::move_list::Move;
use reversi_core::search::SearchResult;
use reversi_core::square::Square;

/// Prints game events as they are reported by the game driver.
#[derive(Default)]
pub struct Console {
    last_move: Option<Move>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observer for [`reversi_core::game::Game::run`].
    pub fn on_event(&mut self, event: &GameEvent, board: &Board) {
        match event {
            GameEvent::TurnStarted(side) => {
                print_board(board, Some(*side), self.last_move.as_ref());
                println!();
                println!("It is {}'s turn", side_label(*side));
            }
            GameEvent::Played(mv) => {
                self.last_move = Some(*mv);
                println!("{} plays {}", side_label(mv.side()), mv.to_string().bold());
                println!();
            }
            GameEvent::Passed(side) => {
                self.last_move = None;
                println!("{} has no legal move and passes", side_label(*side));
                println!();
            }
            GameEvent::Rejected(err) => {
                eprintln!("{}", err.to_string().bright_red());
            }
            GameEvent::Finished(outcome) => {
                print_board(board, None, self.last_move.as_ref());
                println!();
                print_outcome(outcome);
            }
        }
    }
}

fn side_label(side: Side) -> colored::ColoredString {
    let label = format!("{side} ({})", side.to_char());
    match side {
        Side::Black => label.bright_green(),
        Side::White => label.bright_yellow(),
    }
}

/// Prints a colored representation of the board to the terminal.
///
/// Legal placements of `side_to_move` are marked with a dot and the last
/// placement is highlighted.
pub fn print_board(board: &Board, side_to_move: Option<Side>, last_move: Option<&Move>) {
    let last_sq = last_move.and_then(Move::square);
    let black_count = board.count(Side::Black);
    let white_count = board.count(Side::White);

    println!("      a   b   c   d   e   f   g   h");
    println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

    for y in 0..8 {
        print!("  {} │", y + 1);

        for x in 0..8 {
            let sq = Square::from_usize_unchecked(y * 8 + x);
            let is_last_move = Some(sq) == last_sq;
            let is_legal = side_to_move.is_some_and(|side| !board.flips(sq, side).is_empty());

            let symbol = match board.disc_at(sq) {
                Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                Disc::Black => " X ".bright_green(),
                Disc::White => " O ".bright_yellow(),
                Disc::Empty if is_legal => " · ".bright_cyan(),
                Disc::Empty => "   ".normal(),
            };
            print!("{symbol}│");
        }

        match y {
            3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
            4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
            _ => println!(),
        }

        if y < 7 {
            println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
        }
    }

    println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
}

fn print_outcome(outcome: &Outcome) {
    println!("{}", "*** Game Over ***".bright_red());
    println!(
        "Black: {}  White: {}",
        outcome.black_count.to_string().bright_green(),
        outcome.white_count.to_string().bright_yellow()
    );
    match outcome.winner {
        Some(side) => println!("The winner is {}", side_label(side)),
        None => println!("{}", "It's a tie game!".bright_cyan()),
    }
}

/// Prints the statistics of one computer move.
pub fn print_search_stats(side: Side, result: &SearchResult, elapsed: Duration) {
    let secs = elapsed.as_secs_f64();
    let nps = if secs > 0.0 {
        (result.n_nodes as f64 / secs) as u64
    } else {
        0
    };
    println!(
        "{} {} | score {:+} | depth {} | nodes {} | {:.3}s | {} nps",
        side_label(side),
        result.best_move.to_string().bold(),
        result.score,
        result.depth,
        result.n_nodes.to_formatted_string(&Locale::en),
        secs,
        nps.to_formatted_string(&Locale::en),
    );
}

/// Prints the legal moves of `side`.
pub fn print_moves(board: &Board, side: Side) {
    let moves = board.legal_moves(side);
    let list = moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Legal moves: {}", list.bright_cyan());
}

pub fn print_help() {
    println!("Enter a move as a square (e.g. {}) or as column and row", "d3".bold());
    println!("counted from zero (e.g. {}).", "3 2".bold());
    println!("  {}   list the legal moves", "moves".bold());
    println!("  {}    show this help", "help".bold());
    println!("  {}    resign and leave the game", "quit".bold());
}

/// Prints the game record.
pub fn print_transcript(transcript: &str) {
    if !transcript.is_empty() {
        println!("Transcript: {transcript}");
    }
}
