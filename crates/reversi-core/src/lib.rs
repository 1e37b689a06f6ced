pub mod board;
pub mod constants;
pub mod disc;
pub mod error;
mod flip;
pub mod game;
pub mod game_state;
pub mod move_list;
pub mod perft;
pub mod player;
pub mod search;
pub mod square;
pub mod types;
