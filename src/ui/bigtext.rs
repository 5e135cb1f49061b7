//! Block-glyph font for card faces.
//!
//! Five rows tall, four cells wide per glyph, covering the digits and the
//! question mark. Filled cells are drawn as full blocks so the labels read
//! at a distance the way the original deck's oversized text does.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Glyph height in rows.
pub const GLYPH_HEIGHT: u16 = 5;

/// Glyph width in columns.
pub const GLYPH_WIDTH: u16 = 4;

/// Columns between adjacent glyphs.
pub const GLYPH_GAP: u16 = 1;

type Glyph = [&'static str; GLYPH_HEIGHT as usize];

/// Seven-segment style shapes. A '#' is a filled cell.
fn glyph(c: char) -> Option<&'static Glyph> {
    const ZERO: Glyph = ["####", "#  #", "#  #", "#  #", "####"];
    const ONE: Glyph = ["  # ", " ## ", "  # ", "  # ", " ###"];
    const TWO: Glyph = ["####", "   #", "####", "#   ", "####"];
    const THREE: Glyph = ["####", "   #", " ###", "   #", "####"];
    const FOUR: Glyph = ["#  #", "#  #", "####", "   #", "   #"];
    const FIVE: Glyph = ["####", "#   ", "####", "   #", "####"];
    const SIX: Glyph = ["####", "#   ", "####", "#  #", "####"];
    const SEVEN: Glyph = ["####", "   #", "  # ", " #  ", " #  "];
    const EIGHT: Glyph = ["####", "#  #", "####", "#  #", "####"];
    const NINE: Glyph = ["####", "#  #", "####", "   #", "####"];
    const QUESTION: Glyph = ["####", "   #", " ## ", "    ", " #  "];

    match c {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        '?' => Some(&QUESTION),
        _ => None,
    }
}

/// Whether every character of `text` has a block glyph.
pub fn supports(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| glyph(c).is_some())
}

/// Total (width, height) in cells of `text` rendered in the block font.
pub fn text_size(text: &str) -> (u16, u16) {
    let n = text.chars().count() as u16;
    if n == 0 {
        return (0, 0);
    }
    (n * GLYPH_WIDTH + (n - 1) * GLYPH_GAP, GLYPH_HEIGHT)
}

/// Draw `text` centered in `area`. Cells outside the buffer are skipped.
/// Callers check [`supports`] and [`text_size`] first; unglyphed characters
/// are silently skipped here.
pub fn render_centered(text: &str, area: Rect, buf: &mut Buffer, style: Style) {
    let (width, _) = text_size(text);
    if width == 0 || area.width == 0 || area.height == 0 {
        return;
    }

    let x0 = area.x + area.width.saturating_sub(width) / 2;
    let y0 = area.y + area.height.saturating_sub(GLYPH_HEIGHT) / 2;

    let mut x = x0;
    for c in text.chars() {
        let Some(rows) = glyph(c) else {
            continue;
        };
        for (dy, row) in rows.iter().enumerate() {
            let y = y0 + dy as u16;
            for (dx, cell) in row.chars().enumerate() {
                if cell == ' ' {
                    continue;
                }
                let cx = x + dx as u16;
                if cx < area.right()
                    && y < area.bottom()
                    && cx < buf.area().right()
                    && y < buf.area().bottom()
                {
                    buf[(cx, y)].set_symbol("█").set_style(style);
                }
            }
        }
        x += GLYPH_WIDTH + GLYPH_GAP;
    }
}
