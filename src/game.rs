//! Game session: turns clicks into moves and moves into render requests
//!
//! The session owns the single [`Board`] of a game. Each click runs to
//! completion (placement, then the win check) before the next one is looked
//! at. Presentation is driven entirely through the queued
//! [`RenderRequest`]s.

use tracing::{debug, info, trace};

use crate::board::{Board, Placement, Pos, Rejection, Stone};
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::rules::{find_win_line_at, WinLine};

/// Paint used for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Black,
    White,
    /// Stones of the winning line
    Highlight,
}

impl PieceColor {
    /// Paint for a placed stone; `None` for `Stone::Empty`
    pub fn for_stone(stone: Stone) -> Option<PieceColor> {
        match stone {
            Stone::Black => Some(PieceColor::Black),
            Stone::White => Some(PieceColor::White),
            Stone::Empty => None,
        }
    }
}

/// Outbound request to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest {
    /// Wipe every piece from the canvas
    ClearBoard,
    DrawPiece { color: PieceColor, pos: Pos },
    SetTitle(String),
    SetFullscreen(bool),
}

/// What a placement attempt led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Rejected(Rejection),
    Placed { stone: Stone, pos: Pos },
    Won { stone: Stone, pos: Pos, line: WinLine },
}

/// One game in progress plus its pending render requests
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    last_move: Option<Pos>,
    winning_line: Option<WinLine>,
    fullscreen: bool,
    pending: Vec<RenderRequest>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.board_size)?;
        info!(
            size = config.board_size,
            cell_size = config.cell_size,
            "new game, Black to move"
        );
        Ok(Self {
            config: config.clone(),
            board,
            last_move: None,
            winning_line: None,
            fullscreen: false,
            pending: vec![
                RenderRequest::ClearBoard,
                RenderRequest::SetTitle(config.title.clone()),
            ],
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn winning_line(&self) -> Option<&WinLine> {
        self.winning_line.as_ref()
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winning_line.as_ref().map(WinLine::winner)
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Map a canvas pixel to a cell and try to play there.
    ///
    /// Uses floor division, so pixels left of or above the canvas land on
    /// negative cells and are rejected as out of bounds.
    pub fn on_board_click(&mut self, x: i32, y: i32) -> TurnOutcome {
        let (row, col) = self.pixel_to_cell(x, y);
        self.place(row, col)
    }

    /// Cell (row, col) under a canvas pixel
    pub fn pixel_to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let side = i32::try_from(self.config.cell_size).unwrap_or(i32::MAX).max(1);
        (y.div_euclid(side), x.div_euclid(side))
    }

    /// Play at (row, col) for the side to move, then check for a win
    pub fn place(&mut self, row: i32, col: i32) -> TurnOutcome {
        let (stone, pos) = match self.board.attempt_place(row, col) {
            Placement::Accepted { stone, pos } => (stone, pos),
            Placement::Rejected(reason) => {
                trace!(row, col, %reason, "placement ignored");
                return TurnOutcome::Rejected(reason);
            }
        };

        debug!(row = pos.row, col = pos.col, %stone, "stone placed");
        self.last_move = Some(pos);
        if let Some(color) = PieceColor::for_stone(stone) {
            self.pending.push(RenderRequest::DrawPiece { color, pos });
        }

        match find_win_line_at(&self.board, pos) {
            Some(line) => {
                self.finish(&line);
                TurnOutcome::Won { stone, pos, line }
            }
            None => TurnOutcome::Placed { stone, pos },
        }
    }

    fn finish(&mut self, line: &WinLine) {
        let winner = line.winner();
        info!(%winner, length = line.len(), direction = ?line.direction(), "game won");

        self.board.mark_ended();
        self.pending.extend(line.cells().iter().map(|&pos| RenderRequest::DrawPiece {
            color: PieceColor::Highlight,
            pos,
        }));
        self.pending.push(RenderRequest::SetTitle(format!(
            "{} ---- {} won!",
            self.config.title, winner
        )));
        self.winning_line = Some(line.clone());
    }

    /// Throw the board away and start a new game at the same size.
    ///
    /// Queued board drawing and titles are dropped; window mode requests
    /// still go out.
    pub fn restart(&mut self) -> Result<(), BoardError> {
        self.board = Board::new(self.board.size())?;
        self.last_move = None;
        self.winning_line = None;
        self.pending
            .retain(|request| matches!(request, RenderRequest::SetFullscreen(_)));
        self.pending.push(RenderRequest::ClearBoard);
        self.pending.push(RenderRequest::SetTitle(self.config.title.clone()));
        info!("game restarted, Black to move");
        Ok(())
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.pending.push(RenderRequest::SetFullscreen(self.fullscreen));
    }

    /// Take all queued render requests, oldest first
    pub fn drain_render_requests(&mut self) -> Vec<RenderRequest> {
        std::mem::take(&mut self.pending)
    }
}
