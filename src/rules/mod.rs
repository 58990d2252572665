//! Game rules for Gomoku
//!
//! Free-style five in a row: no captures, no forbidden moves, overlines win.

pub mod win;

// Re-exports for convenient access
pub use win::{find_win_line, find_win_line_at, winner, Direction, WinLine, WIN_LENGTH};
