//! Two-player Gomoku (five in a row)
//!
//! Black and White take turns placing stones on a square board (17x17 by
//! default). The first player with five or more stones in an unbroken line,
//! horizontally, vertically or diagonally, wins and the board freezes.
//!
//! # Architecture
//!
//! - [`board`]: Board state, placement rules and turn order
//! - [`rules`]: Win detection
//! - [`game`]: Game session tying clicks, moves, wins and render requests
//! - [`input`]: Key and mouse bindings
//! - [`config`]: Board size, cell size and title
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{find_win_line, Board, Placement, Stone};
//!
//! let mut board = Board::new(17).unwrap();
//! for col in 0..4 {
//!     board.attempt_place(7, col); // Black
//!     board.attempt_place(8, col); // White
//! }
//! assert!(matches!(
//!     board.attempt_place(7, 4),
//!     Placement::Accepted { stone: Stone::Black, .. }
//! ));
//!
//! let line = find_win_line(&board).unwrap();
//! assert_eq!(line.winner(), Stone::Black);
//! assert_eq!(line.len(), 5);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Placement, Pos, Rejection, Stone, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use error::{BoardError, ConfigError};
pub use game::{GameSession, PieceColor, RenderRequest, TurnOutcome};
pub use rules::{find_win_line, find_win_line_at, WinLine};
