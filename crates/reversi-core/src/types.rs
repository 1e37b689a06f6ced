//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Score (disc difference: -64 to +64).
pub type Score = i32;
