mod help;
mod helpers;
pub mod layout;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::slots::Slot;
use layout::{PaletteLayout, SlotAreas};
use theme::Theme;

use helpers::{contrast_color, swatch_color};

const COPY_GLYPH: &str = "[copy]";
const CONFIRMED_GLYPH: &str = "[ok]";

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = PaletteLayout::new(frame.area());

    let header = Paragraph::new(Text::from(Line::from(vec![
        Span::styled(
            "  Swatch  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palette generator",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])))
    .alignment(Alignment::Left)
    .block(rounded_block());
    frame.render_widget(header, layout.header);

    frame.render_widget(rounded_block().title(" Palette "), layout.body);

    let button = Paragraph::new(Line::from(Span::styled(
        "Generate",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(rounded_block());
    frame.render_widget(button, layout.generate);

    for (index, (slot, areas)) in app.slots.iter().zip(layout.slots.iter()).enumerate() {
        render_slot(frame, index, slot, areas, index == app.selected_slot);
    }

    let footer = Paragraph::new(Text::from(keybinds_line()))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout.footer);

    if app.show_help {
        let area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, area);
        let popup = Paragraph::new(help::build_help_text())
            .alignment(Alignment::Left)
            .block(rounded_block().title(" Help "));
        frame.render_widget(popup, area);
    }
}

fn render_slot(frame: &mut Frame, index: usize, slot: &Slot, areas: &SlotAreas, selected: bool) {
    let fill = swatch_color(&slot.color);
    let number_style = Style::default()
        .fg(contrast_color(&slot.color))
        .bg(fill)
        .add_modifier(Modifier::BOLD);
    let swatch = Paragraph::new(Line::from(Span::styled(
        format!("{}", index + 1),
        number_style,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().style(Style::default().bg(fill)));
    frame.render_widget(swatch, areas.swatch);

    let marker_style = Style::default()
        .fg(Theme::selection_marker())
        .add_modifier(Modifier::BOLD);
    let mut label_style = Style::default().fg(Theme::text());
    if selected {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let label = Paragraph::new(Line::from(vec![
        Span::styled(if selected { "> " } else { "  " }, marker_style),
        Span::styled(slot.color.as_str(), label_style),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(label, areas.label);

    let copy = if slot.is_confirmed() {
        Span::styled(
            CONFIRMED_GLYPH,
            Style::default()
                .fg(Theme::success())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(COPY_GLYPH, Style::default().fg(Theme::dim()))
    };
    frame.render_widget(
        Paragraph::new(Line::from(copy)).alignment(Alignment::Center),
        areas.copy,
    );
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn keybinds_line() -> Line<'static> {
    Line::from(Span::styled(
        "g: Generate  1-5: Copy  ←/→: Select  Enter: Copy selected  ?: Help  q: Quit",
        Style::default().fg(Theme::dim()),
    ))
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::app::AppEvent;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::palette::RandomGenerator;

    fn row_text(buffer: &Buffer, area: Rect) -> String {
        (area.x..area.right())
            .filter_map(|x| buffer.cell((x, area.y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    fn render(app: &App) -> Buffer {
        let (width, height) = app.terminal_size;
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn app() -> App {
        App::new(
            Box::new(RandomGenerator),
            Box::new(RecordingClipboard::default()),
        )
        .with_terminal_size(100, 30)
    }

    #[test]
    fn labels_match_swatch_fill() {
        let mut app = app();
        app.update_at(AppEvent::KeyPress(crossterm::event::KeyCode::Char('g')), Instant::now());
        let buffer = render(&app);
        let layout = app.layout();

        for (slot, areas) in app.slots.iter().zip(layout.slots.iter()) {
            let label = row_text(&buffer, areas.label);
            assert!(label.contains(slot.color.as_str()), "{label:?}");
            let cell = buffer.cell((areas.swatch.x, areas.swatch.y)).unwrap();
            assert_eq!(cell.bg, swatch_color(&slot.color));
        }
    }

    #[test]
    fn copy_glyph_swaps_while_confirmed() {
        let mut app = app();
        let copy = app.layout().slots[2].copy;
        assert!(row_text(&render(&app), copy).contains(COPY_GLYPH));

        app.copy_slot(2, Instant::now());
        let buffer = render(&app);
        assert!(row_text(&buffer, copy).contains(CONFIRMED_GLYPH));
        let other = app.layout().slots[1].copy;
        assert!(row_text(&buffer, other).contains(COPY_GLYPH));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_copy_only_logs_an_error() {
        let clipboard = RecordingClipboard::default();
        clipboard.fail.set(true);
        let mut app = App::new(Box::new(RandomGenerator), Box::new(clipboard.clone()))
            .with_terminal_size(100, 30);
        let hex = app.slots.color(3).unwrap().to_string();
        let before = render(&app);

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || app.copy_slot(3, Instant::now()));

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        let errors: Vec<&str> = output.lines().filter(|line| line.contains("ERROR")).collect();
        assert_eq!(errors.len(), 1, "{output}");
        assert!(errors[0].contains(&hex), "{output}");
        assert_eq!(clipboard.writes.borrow().len(), 1);

        let after = render(&app);
        let copy = app.layout().slots[3].copy;
        assert!(row_text(&after, copy).contains(COPY_GLYPH));
        assert_eq!(before, after);
    }

    #[test]
    fn generate_button_is_drawn_where_clicks_land() {
        let app = app();
        let buffer = render(&app);
        let button = app.layout().generate;
        let middle = Rect { y: button.y + 1, ..button };
        assert!(row_text(&buffer, middle).contains("Generate"));
    }
}
