use ratatui::style::Color;

use crate::color;

pub fn swatch_color(color: &color::Color) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Black or white, whichever reads better on top of `color`.
pub fn contrast_color(color: &color::Color) -> Color {
    let (r, g, b) = color.rgb();
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    if luma >= 128_000 {
        Color::Black
    } else {
        Color::White
    }
}
