use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::{Block, Borders},
};

use crate::palette::PALETTE_SIZE;

const BUTTON_WIDTH: u16 = 16;

/// What a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Generate,
    Swatch(usize),
    CopyButton(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotAreas {
    pub swatch: Rect,
    pub label: Rect,
    pub copy: Rect,
}

/// Screen regions shared by the renderer and click handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub generate: Rect,
    pub slots: [SlotAreas; PALETTE_SIZE],
}

impl PaletteLayout {
    pub fn new(area: Rect) -> Self {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);
        let (header, body, footer) = (outer[0], outer[1], outer[2]);

        let inner = Block::default().borders(Borders::ALL).inner(body);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .split(inner);

        let generate = Rect {
            x: rows[0].x.saturating_add(1),
            y: rows[0].y,
            width: BUTTON_WIDTH.min(rows[0].width.saturating_sub(1)),
            height: rows[0].height,
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, PALETTE_SIZE as u32); PALETTE_SIZE])
            .split(rows[2]);
        let slots = std::array::from_fn(|index| slot_areas(columns[index]));

        Self {
            header,
            body,
            footer,
            generate,
            slots,
        }
    }

    /// Classifies a click; anything that is not a control yields `None`.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        if self.generate.contains(position) {
            return Some(ClickTarget::Generate);
        }
        self.slots.iter().enumerate().find_map(|(index, slot)| {
            if slot.swatch.contains(position) {
                Some(ClickTarget::Swatch(index))
            } else if slot.copy.contains(position) {
                Some(ClickTarget::CopyButton(index))
            } else {
                None
            }
        })
    }
}

fn slot_areas(column: Rect) -> SlotAreas {
    // One column of gap between neighbouring slots.
    let column = Rect {
        x: column.x.saturating_add(1),
        width: column.width.saturating_sub(2),
        ..column
    };
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(column);
    SlotAreas {
        swatch: parts[0],
        label: parts[1],
        copy: parts[2],
    }
}
