//! Board structure with turn and end-of-game tracking

use super::{Pos, Stone};
use crate::error::BoardError;

/// Reason a placement attempt was turned down.
///
/// These are ordinary outcomes of user interaction, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("position is outside the board")]
    OutOfBounds,
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("game has already ended")]
    GameAlreadyEnded,
}

/// Result of [`Board::attempt_place`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Accepted { stone: Stone, pos: Pos },
    Rejected(Rejection),
}

impl Placement {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Placement::Accepted { .. })
    }
}

/// Square game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Cells indexed `[row][col]`
    cells: Vec<Vec<Stone>>,
    /// Side to move; never `Stone::Empty`
    turn: Stone,
    ended: bool,
}

impl Board {
    /// Create an empty `size` x `size` board with Black to move.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![vec![Stone::Empty; size]; size],
            turn: Stone::Black,
            ended: false,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bounds-checked position from signed coordinates
    #[inline]
    pub fn pos(&self, row: i32, col: i32) -> Option<Pos> {
        if Pos::is_valid(row as i64, col as i64, self.size) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Get stone at position
    ///
    /// Panics if `pos` is outside the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row][pos.col]
    }

    /// Stone at signed coordinates, `None` when out of bounds
    pub fn current_occupant(&self, row: i32, col: i32) -> Option<Stone> {
        self.pos(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Freeze the board. Idempotent.
    pub fn mark_ended(&mut self) {
        self.ended = true;
    }

    /// Place a stone for the side to move and pass the turn.
    ///
    /// Checks, in order: game ended, bounds, occupancy. A rejected attempt
    /// leaves the board untouched.
    pub fn attempt_place(&mut self, row: i32, col: i32) -> Placement {
        if self.ended {
            return Placement::Rejected(Rejection::GameAlreadyEnded);
        }
        let Some(pos) = self.pos(row, col) else {
            return Placement::Rejected(Rejection::OutOfBounds);
        };
        if !self.is_empty(pos) {
            return Placement::Rejected(Rejection::CellOccupied);
        }

        let stone = self.turn;
        self.cells[pos.row][pos.col] = stone;
        self.turn = stone.opponent();

        Placement::Accepted { stone, pos }
    }

    /// Put a stone on an empty cell without touching the turn.
    ///
    /// Meant for setting up positions directly. Occupied cells and
    /// `Stone::Empty` are ignored; returns whether the cell changed.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> bool {
        if stone.is_empty() || !self.is_empty(pos) {
            return false;
        }
        self.cells[pos.row][pos.col] = stone;
        true
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &stone)| (Pos::new(row, col), stone))
        })
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.iter().filter(|(_, stone)| !stone.is_empty()).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }
}
