use std::fmt;

/// One of the two competing sides. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Returns the other side.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Converts the side to the character used for its discs.
    ///
    /// # Returns
    ///
    /// * `'X'` for `Side::Black`
    /// * `'O'` for `Side::White`
    pub fn to_char(self) -> char {
        Disc::from(self).to_char()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Represents the content of a cell on the board.
///
/// The `Disc` enum has three variants:
///
/// * `Empty` - Represents an empty cell.
/// * `Black` - Represents a black disc.
/// * `White` - Represents a white disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disc {
    #[default]
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses a disc from its character representation.
    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            '-' | '.' => Some(Disc::Empty),
            'X' | 'x' | '*' => Some(Disc::Black),
            'O' | 'o' => Some(Disc::White),
            _ => None,
        }
    }

    /// Returns the side owning this disc, or `None` for an empty cell.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Disc::Empty => None,
            Disc::Black => Some(Side::Black),
            Disc::White => Some(Side::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Disc::Empty
    }
}

impl From<Side> for Disc {
    #[inline]
    fn from(side: Side) -> Disc {
        match side {
            Side::Black => Disc::Black,
            Side::White => Disc::White,
        }
    }
}
