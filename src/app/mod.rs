mod state;

use crossterm::event::{KeyCode, MouseEvent};

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
    Mouse(MouseEvent),
    Resize(u16, u16),
}
