//! Search result types.

use crate::move_list::Move;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The selected move. A pass when the searching side cannot place a disc.
    pub best_move: Move,
    /// Negamax score of `best_move` from the searching side's point of view.
    pub score: Score,
    /// Number of positions visited.
    pub n_nodes: u64,
    /// Depth the search was run to.
    pub depth: Depth,
}
