use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, error, info};

use crate::clipboard::Clipboard;
use crate::palette::{PALETTE_SIZE, PaletteGenerator};
use crate::slots::Slots;
use crate::ui::layout::{ClickTarget, PaletteLayout};

use super::AppEvent;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub slots: Slots,
    pub selected_slot: usize,
    pub show_help: bool,
    pub terminal_size: (u16, u16),
    generator: Box<dyn PaletteGenerator>,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Wires the generator and clipboard together and renders the first palette.
    pub fn new(
        mut generator: Box<dyn PaletteGenerator>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let palette = generator.generate();
        debug!(?palette, "initial palette");
        Self {
            running: true,
            slots: Slots::new(&palette),
            selected_slot: 0,
            show_help: false,
            terminal_size: (0, 0),
            generator,
            clipboard,
        }
    }

    pub fn with_terminal_size(mut self, width: u16, height: u16) -> Self {
        self.terminal_size = (width, height);
        self
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        self.update_at(event, Instant::now());
    }

    pub fn update_at(&mut self, event: AppEvent, now: Instant) {
        self.slots.expire(now);

        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key, now),
            AppEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
            AppEvent::Resize(width, height) => self.terminal_size = (width, height),
        }
    }

    /// How long the event loop may block before a pending reversion is due.
    pub fn poll_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        match self.slots.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(tick_rate),
            None => tick_rate,
        }
    }

    pub fn layout(&self) -> PaletteLayout {
        let (width, height) = self.terminal_size;
        PaletteLayout::new(Rect::new(0, 0, width, height))
    }

    /// Replaces the whole palette with a freshly generated one.
    pub fn generate(&mut self) {
        let palette = self.generator.generate();
        debug!(?palette, "generated palette");
        self.slots.render(&palette);
    }

    /// Writes the slot's hex value to the clipboard and confirms it on success.
    pub fn copy_slot(&mut self, index: usize, now: Instant) {
        let Some(color) = self.slots.color(index).cloned() else {
            return;
        };
        match self.clipboard.write_text(color.as_str()) {
            Ok(()) => {
                info!(slot = index, %color, "copied color to clipboard");
                self.slots.confirm(index, now);
            }
            Err(err) => {
                error!(slot = index, %color, error = %err, "could not copy color");
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if self.show_help {
            match key {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('g') | KeyCode::Char(' ') => self.generate(),
            KeyCode::Char(digit @ '1'..='5') => {
                let index = digit as usize - '1' as usize;
                self.selected_slot = index;
                self.copy_slot(index, now);
            }
            KeyCode::Left => {
                self.selected_slot = if self.selected_slot == 0 {
                    PALETTE_SIZE - 1
                } else {
                    self.selected_slot - 1
                };
            }
            KeyCode::Right => self.selected_slot = (self.selected_slot + 1) % PALETTE_SIZE,
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => {
                self.copy_slot(self.selected_slot, now)
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.layout().hit_test(mouse.column, mouse.row) {
            Some(ClickTarget::Generate) => self.generate(),
            Some(ClickTarget::Swatch(index)) | Some(ClickTarget::CopyButton(index)) => {
                self.selected_slot = index;
                self.copy_slot(index, now);
            }
            None => {}
        }
    }
}
