//! Input dispatch
//!
//! Keys and mouse buttons are bound to plain function handlers up front; an
//! incoming event is a table lookup followed by a call.

use std::collections::HashMap;

use egui::{Key, PointerButton};
use tracing::{trace, warn};

use crate::game::GameSession;

/// Input event in board canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Button press at pixel (x, y) relative to the canvas origin
    Click { button: PointerButton, x: i32, y: i32 },
}

pub type KeyHandler<S> = fn(&mut S, Key);
pub type ClickHandler<S> = fn(&mut S, i32, i32);

/// Event-to-handler tables for a state of type `S`
pub struct InputBindings<S> {
    keys: HashMap<Key, KeyHandler<S>>,
    keys_up: HashMap<Key, KeyHandler<S>>,
    /// `PointerButton` is not `Hash`; there are only a handful of buttons
    clicks: Vec<(PointerButton, ClickHandler<S>)>,
}

impl<S> Default for InputBindings<S> {
    fn default() -> Self {
        Self {
            keys: HashMap::new(),
            keys_up: HashMap::new(),
            clicks: Vec::new(),
        }
    }
}

impl<S> InputBindings<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key press. Rebinding replaces the previous handler.
    pub fn bind_key(&mut self, key: Key, handler: KeyHandler<S>) -> &mut Self {
        self.keys.insert(key, handler);
        self
    }

    /// Bind several keys to one handler
    pub fn bind_keys(&mut self, keys: &[Key], handler: KeyHandler<S>) -> &mut Self {
        for &key in keys {
            self.keys.insert(key, handler);
        }
        self
    }

    pub fn bind_key_up(&mut self, key: Key, handler: KeyHandler<S>) -> &mut Self {
        self.keys_up.insert(key, handler);
        self
    }

    /// Bind a button press. Rebinding replaces the previous handler.
    pub fn bind_click(&mut self, button: PointerButton, handler: ClickHandler<S>) -> &mut Self {
        match self.clicks.iter_mut().find(|(bound, _)| *bound == button) {
            Some(entry) => entry.1 = handler,
            None => self.clicks.push((button, handler)),
        }
        self
    }

    /// Run the handler bound to `event`, if any. Returns whether one ran.
    pub fn dispatch(&self, state: &mut S, event: InputEvent) -> bool {
        let handled = match event {
            InputEvent::KeyDown(key) => self.keys.get(&key).map(|handler| handler(state, key)),
            InputEvent::KeyUp(key) => self.keys_up.get(&key).map(|handler| handler(state, key)),
            InputEvent::Click { button, x, y } => {
                self.clicks
                    .iter()
                    .find(|(bound, _)| *bound == button)
                    .map(|(_, handler)| handler(state, x, y))
            }
        }
        .is_some();

        if !handled {
            trace!(?event, "unbound input");
        }
        handled
    }
}

/// Default Gomoku controls: left click plays, `N` restarts, `F11` toggles
/// fullscreen.
pub fn session_bindings() -> InputBindings<GameSession> {
    let mut bindings = InputBindings::<GameSession>::new();
    bindings
        .bind_click(PointerButton::Primary, |session, x, y| {
            session.on_board_click(x, y);
        })
        .bind_key(Key::N, |session, _| {
            if let Err(err) = session.restart() {
                warn!(%err, "restart failed");
            }
        })
        .bind_key(Key::F11, |session, _| session.toggle_fullscreen());
    bindings
}
