//! GUI module for the Gomoku game
//!
//! A thin eframe/egui shell around [`crate::game::GameSession`].

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
pub use board_view::BoardView;
