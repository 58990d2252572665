//! Main application for the Gomoku GUI

use egui::{CentralPanel, Context, Event, Frame, ViewportCommand};

use super::board_view::BoardView;
use super::theme::BOARD_BG;
use crate::game::{GameSession, RenderRequest};
use crate::input::{session_bindings, InputBindings, InputEvent};

/// Main Gomoku application
pub struct GomokuApp {
    session: GameSession,
    bindings: InputBindings<GameSession>,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: GameSession) -> Self {
        let config = session.config();
        let board_view = BoardView::new(config.board_size, config.cell_size);
        Self {
            session,
            bindings: session_bindings(),
            board_view,
        }
    }

    /// Translate this frame's raw egui events into board input events
    fn collect_input(&self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match *event {
                    Event::Key {
                        key,
                        pressed,
                        repeat: false,
                        ..
                    } => Some(if pressed {
                        InputEvent::KeyDown(key)
                    } else {
                        InputEvent::KeyUp(key)
                    }),
                    Event::PointerButton {
                        pos,
                        button,
                        pressed: true,
                        ..
                    } => {
                        let (x, y) = self.board_view.to_canvas(pos);
                        Some(InputEvent::Click { button, x, y })
                    }
                    _ => None,
                })
                .collect()
        })
    }

    /// Forward queued render requests to the canvas and the window
    fn apply_render_requests(&mut self, ctx: &Context) {
        for request in self.session.drain_render_requests() {
            match &request {
                RenderRequest::SetTitle(title) => {
                    ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
                }
                RenderRequest::SetFullscreen(on) => {
                    ctx.send_viewport_cmd(ViewportCommand::Fullscreen(*on));
                }
                RenderRequest::ClearBoard | RenderRequest::DrawPiece { .. } => {
                    self.board_view.apply(&request);
                }
            }
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Each event runs to completion before the next is dispatched
        for event in self.collect_input(ctx) {
            self.bindings.dispatch(&mut self.session, event);
        }

        self.apply_render_requests(ctx);

        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                self.board_view.show(ui, &self.session);
            });
    }
}
