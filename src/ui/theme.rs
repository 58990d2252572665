//! Theme constants for the Gomoku GUI

use egui::Color32;

use crate::game::PieceColor;

// Board colors - walnut
pub const BOARD_BG: Color32 = Color32::from_rgb(139, 87, 66);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);
pub const CENTER_POINT: Color32 = Color32::from_rgb(0, 0, 0);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(100, 255, 255);

// Functions for colors that can't be const
pub fn hover_black() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

pub fn hover_white() -> Color32 {
    Color32::from_rgba_unmultiplied(240, 240, 240, 80)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub fn piece_fill(color: PieceColor) -> Color32 {
    match color {
        PieceColor::Black => BLACK_STONE,
        PieceColor::White => WHITE_STONE,
        PieceColor::Highlight => WIN_HIGHLIGHT,
    }
}

// Sizes
/// Gap between a stone's edge and its cell border
pub const STONE_INSET: f32 = 2.0;
pub const CENTER_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
