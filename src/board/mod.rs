//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::{Board, Placement, Rejection};

/// Default board size (17x17)
pub const DEFAULT_BOARD_SIZE: usize = 17;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stone::Empty => "Empty",
            Stone::Black => "Black",
            Stone::White => "White",
        };
        f.write_str(name)
    }
}

/// Position on the board
///
/// A `Pos` carries no board size; use [`Board::pos`] to build one that is
/// known to be in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    /// Step by a signed offset, or `None` if the result would be outside `size`
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Pos> {
        let row = self.row as i64 + dr as i64;
        let col = self.col as i64 + dc as i64;
        if Self::is_valid(row, col, size) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i64, col: i64, size: usize) -> bool {
        let size = size as i64;
        row >= 0 && row < size && col >= 0 && col < size
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
