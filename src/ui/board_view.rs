//! Board rendering for the Gomoku GUI
//!
//! The view keeps its own canvas of painted cells. That canvas changes only
//! through [`RenderRequest`]s, the way a retained drawing surface would; the
//! live board is read only for the hover preview.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Pos, Stone};
use crate::game::{GameSession, PieceColor, RenderRequest};

use super::theme::*;

/// Board view handles rendering for the game board
pub struct BoardView {
    board_size: usize,
    cell_size: f32,
    /// Board drawing area from the last frame
    board_rect: Rect,
    /// Painted cells, row-major
    canvas: Vec<Option<PieceColor>>,
}

impl BoardView {
    pub fn new(board_size: usize, cell_size: u32) -> Self {
        Self {
            board_size,
            cell_size: cell_size as f32,
            board_rect: Rect::NOTHING,
            canvas: vec![None; board_size * board_size],
        }
    }

    /// Apply a drawing request. Window-level requests are not handled here.
    pub fn apply(&mut self, request: &RenderRequest) {
        match request {
            RenderRequest::ClearBoard => self.canvas.fill(None),
            RenderRequest::DrawPiece { color, pos } => {
                if let Some(idx) = self.index(*pos) {
                    self.canvas[idx] = Some(*color);
                }
            }
            RenderRequest::SetTitle(_) | RenderRequest::SetFullscreen(_) => {}
        }
    }

    /// What is painted at `pos`
    pub fn piece(&self, pos: Pos) -> Option<PieceColor> {
        self.index(pos).and_then(|idx| self.canvas[idx])
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        (pos.row < self.board_size && pos.col < self.board_size)
            .then(|| pos.to_index(self.board_size))
    }

    /// Render the board
    pub fn show(&mut self, ui: &mut egui::Ui, session: &GameSession) {
        let side = self.cell_size * self.board_size as f32;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(0), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_center_point(&painter);
        self.draw_canvas(&painter);

        if !session.board().is_ended() {
            if let Some(pointer) = response.hover_pos() {
                self.draw_hover_preview(&painter, session, pointer);
            }
        }
    }

    /// Lines run through cell centers
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let half = self.cell_size / 2.0;
        let far = self.cell_size * self.board_size as f32 - half;

        for i in 0..self.board_size {
            let offset = i as f32 * self.cell_size + half;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, half);
            let end = self.board_rect.min + Vec2::new(offset, far);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(half, offset);
            let end = self.board_rect.min + Vec2::new(far, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_center_point(&self, painter: &Painter) {
        let mid = self.board_size / 2;
        let center = self.board_to_screen(Pos::new(mid, mid));
        painter.circle_filled(center, CENTER_POINT_RADIUS, CENTER_POINT);
    }

    fn draw_canvas(&self, painter: &Painter) {
        for (idx, cell) in self.canvas.iter().enumerate() {
            if let Some(color) = cell {
                self.draw_piece(painter, Pos::from_index(idx, self.board_size), *color);
            }
        }
    }

    fn stone_radius(&self) -> f32 {
        (self.cell_size / 2.0 - STONE_INSET).max(1.0)
    }

    /// Draw a single piece with visual polish
    fn draw_piece(&self, painter: &Painter, pos: Pos, color: PieceColor) {
        let center = self.board_to_screen(pos);
        let radius = self.stone_radius();

        match color {
            PieceColor::Black => {
                painter.circle_filled(center, radius, piece_fill(color));

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(
                    center + highlight_offset,
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            PieceColor::White => {
                painter.circle_filled(center, radius, piece_fill(color));

                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            PieceColor::Highlight => {
                painter.circle_filled(center, radius, piece_fill(color));
            }
        }
    }

    /// Translucent stone for the side to move, red over occupied cells
    fn draw_hover_preview(&self, painter: &Painter, session: &GameSession, pointer: Pos2) {
        let board = session.board();
        let (x, y) = self.to_canvas(pointer);
        let (row, col) = session.pixel_to_cell(x, y);
        let Some(pos) = board.pos(row, col) else {
            return;
        };

        let color: Color32 = match board.get(pos) {
            Stone::Empty => match board.current_turn() {
                Stone::White => hover_white(),
                _ => hover_black(),
            },
            _ => hover_invalid(),
        };
        painter.circle_filled(self.board_to_screen(pos), self.stone_radius(), color);
    }

    /// Convert screen coordinates to whole pixels relative to the board origin
    pub fn to_canvas(&self, screen_pos: Pos2) -> (i32, i32) {
        let relative = screen_pos - self.board_rect.min;
        // `as` saturates, so a not-yet-laid-out rect maps far off the board
        (relative.x.floor() as i32, relative.y.floor() as i32)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let half = self.cell_size / 2.0;
        let x = self.board_rect.min.x + pos.col as f32 * self.cell_size + half;
        let y = self.board_rect.min.y + pos.row as f32 * self.cell_size + half;
        Pos2::new(x, y)
    }
}
