//! Parsing of human player input.

use reversi_core::square::Square;

/// A line typed by a human player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place a disc on the square.
    Play(Square),
    /// List the legal moves.
    Moves,
    Help,
    /// Withdraw from the game.
    Quit,
    /// Blank line.
    Empty,
}

/// Parses one input line.
///
/// A move is written either in algebraic notation (`d3`) or as two
/// space-separated zero-based coordinates `x y`, where `x` is the column and
/// `y` the row.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(first) = parts.next() else {
        return Ok(Command::Empty);
    };

    let command = match (first.to_ascii_lowercase().as_str(), parts.next()) {
        ("moves" | "m", None) => Command::Moves,
        ("help" | "h" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        (_, None) => Command::Play(
            first
                .parse::<Square>()
                .map_err(|e| format!("Cannot read '{first}' as a move: {e}"))?,
        ),
        (_, Some(second)) => Command::Play(parse_xy(first, second)?),
    };

    if parts.next().is_some() {
        return Err("A move is two space-separated integers, e.g. '3 2'".to_string());
    }
    Ok(command)
}

fn parse_xy(x: &str, y: &str) -> Result<Square, String> {
    let x = x
        .parse::<i32>()
        .map_err(|e| format!("Invalid column '{x}': {e}"))?;
    let y = y
        .parse::<i32>()
        .map_err(|e| format!("Invalid row '{y}': {e}"))?;
    Square::from_xy(x, y).ok_or_else(|| format!("({x}, {y}) is off the board"))
}
