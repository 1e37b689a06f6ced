//! Search configuration.

use crate::constants::DEFAULT_DEPTH;
use crate::types::Depth;

/// Options controlling a [`Search`](crate::search::Search).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Number of plies to look ahead. A pass consumes a ply like a placement.
    pub depth: Depth,
    /// Prune with alpha-beta bounds. The chosen move and its score are the
    /// same as without pruning; only the node count shrinks.
    pub alpha_beta: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth: DEFAULT_DEPTH,
            alpha_beta: false,
        }
    }
}

impl SearchOptions {
    /// Creates options searching `depth` plies without pruning.
    pub fn with_depth(depth: Depth) -> Self {
        SearchOptions {
            depth,
            ..Default::default()
        }
    }
}
