//! Move sources driven by [`Game`](crate::game::Game).

use crate::board::Board;
use crate::disc::Side;
use crate::move_list::Move;
use crate::search::{Search, SearchOptions, SearchResult};

/// Something that can take part in a game.
///
/// Players only ever see shared references to board snapshots, so they cannot
/// modify the game in progress, and they are never handed their opponent.
pub trait Player {
    /// Chooses the next move on `board`.
    ///
    /// Returns `None` if the player withdraws from the game.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;

    /// Called for both players after every applied move or pass, with the
    /// board as it is after the move.
    fn acknowledge_turn(&mut self, mv: &Move, board: &Board);
}

/// Type alias for the callback receiving each completed search.
pub type SearchCallback = dyn FnMut(&SearchResult);

/// Computer player choosing moves with [`Search`].
pub struct SearchPlayer {
    side: Side,
    search: Search,
    callback: Option<Box<SearchCallback>>,
}

impl SearchPlayer {
    /// Creates a computer player for `side`.
    pub fn new(side: Side, options: &SearchOptions) -> Self {
        SearchPlayer {
            side,
            search: Search::new(options),
            callback: None,
        }
    }

    /// Registers a callback invoked with the result of every search.
    pub fn with_callback(mut self, callback: impl FnMut(&SearchResult) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

impl Player for SearchPlayer {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let result = self.search.run(board, self.side);
        if let Some(callback) = self.callback.as_mut() {
            callback(&result);
        }
        Some(result.best_move)
    }

    fn acknowledge_turn(&mut self, _mv: &Move, _board: &Board) {}
}
