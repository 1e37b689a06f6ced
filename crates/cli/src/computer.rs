//! Computer player wired to the console.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use reversi_core::board::Board;
use reversi_core::disc::Side;
use reversi_core::move_list::Move;
use reversi_core::player::{Player, SearchPlayer};
use reversi_core::search::SearchOptions;

use crate::display;

/// Creates a computer player. With `verbose`, the statistics of every search
/// are printed.
pub fn computer_player(side: Side, options: &SearchOptions, verbose: bool) -> Box<dyn Player> {
    let player = SearchPlayer::new(side, options);
    if !verbose {
        return Box::new(player);
    }

    let started = Rc::new(Cell::new(Instant::now()));
    let clock = Rc::clone(&started);
    let inner = player.with_callback(move |result| {
        display::print_search_stats(side, result, clock.get().elapsed());
    });
    Box::new(Timed { inner, started })
}

/// Records when each search starts so the callback can report its duration.
struct Timed {
    inner: SearchPlayer,
    started: Rc<Cell<Instant>>,
}

impl Player for Timed {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.started.set(Instant::now());
        self.inner.choose_move(board)
    }

    fn acknowledge_turn(&mut self, mv: &Move, board: &Board) {
        self.inner.acknowledge_turn(mv, board);
    }
}
