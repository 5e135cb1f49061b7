//! Single card face renderer.
//!
//! Pure function of the label: everything except "coffee" renders as large
//! centered block text, the coffee card renders the bundled mug glyph. The
//! alpha from the pager transform dims the whole face toward the screen
//! background.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Widget},
};

use crate::deck;
use crate::theme::{blend_toward, Theme};
use crate::ui::bigtext;

// The original app ships a vector mug icon; here it is an ASCII asset.
const MUG: &str = include_str!("../../assets/mug.txt");

/// One card face at a given opacity.
pub struct Card<'a> {
    label: &'a str,
    theme: &'a Theme,
    alpha: f32,
}

impl<'a> Card<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            theme,
            alpha: 1.0,
        }
    }

    /// Opacity in `[0, 1]`; 1.0 is fully opaque.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let background = blend_toward(
            self.theme.card_background,
            self.theme.background,
            self.alpha,
        );
        let border = blend_toward(self.theme.card_border, self.theme.background, self.alpha);
        let text = blend_toward(self.theme.card_text, self.theme.background, self.alpha);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border).bg(background))
            .style(Style::default().bg(background));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text_style = Style::default().fg(text).bg(background);

        if deck::is_coffee(self.label) {
            if !render_mug(inner, buf, text_style) {
                render_plain(self.label, inner, buf, text_style);
            }
            return;
        }

        let (w, h) = bigtext::text_size(self.label);
        if bigtext::supports(self.label) && w <= inner.width && h <= inner.height {
            bigtext::render_centered(self.label, inner, buf, text_style);
        } else {
            render_plain(self.label, inner, buf, text_style);
        }
    }
}

/// Draw the mug art centered in `area`. Returns false if it does not fit.
fn render_mug(area: Rect, buf: &mut Buffer, style: Style) -> bool {
    let lines: Vec<&str> = MUG.lines().collect();
    let height = lines.len() as u16;
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;

    if width == 0 || width > area.width || height > area.height {
        return false;
    }

    let x0 = area.x + (area.width - width) / 2;
    let y0 = area.y + (area.height - height) / 2;

    for (dy, line) in lines.iter().enumerate() {
        let y = y0 + dy as u16;
        for (dx, c) in line.chars().enumerate() {
            if c == ' ' {
                continue;
            }
            let x = x0 + dx as u16;
            if x < buf.area().right() && y < buf.area().bottom() {
                buf[(x, y)].set_char(c).set_style(style);
            }
        }
    }
    true
}

/// One-row fallback when the area is too small for block text or the mug.
fn render_plain(label: &str, area: Rect, buf: &mut Buffer, style: Style) {
    let width = (label.chars().count() as u16).min(area.width);
    let x0 = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;

    for (dx, c) in label.chars().take(width as usize).enumerate() {
        let x = x0 + dx as u16;
        if x < buf.area().right() && y < buf.area().bottom() {
            buf[(x, y)].set_char(c).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn symbols(buf: &Buffer) -> String {
        buf.area()
            .positions()
            .map(|pos| buf[(pos.x, pos.y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_numeric_card_renders_block_text() {
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);
        Card::new("8", &Theme::dark()).render(area, &mut buf);
        assert!(symbols(&buf).contains('█'));
    }

    #[test]
    fn test_coffee_card_renders_mug() {
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        Card::new("coffee", &Theme::dark()).render(area, &mut buf);
        let rendered = symbols(&buf);
        // Mug outline, not block text and not the literal label.
        assert!(rendered.contains("___"));
        assert!(!rendered.contains('█'));
        assert!(!rendered.contains("coffee"));
    }

    #[test]
    fn test_small_area_falls_back_to_plain_label() {
        let area = Rect::new(0, 0, 8, 5);
        let mut buf = Buffer::empty(area);
        Card::new("100", &Theme::dark()).render(area, &mut buf);
        assert!(symbols(&buf).contains("100"));
    }

    #[test]
    fn test_tiny_area_renders_nothing() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        Card::new("5", &Theme::dark()).render(area, &mut buf);
        assert!(!symbols(&buf).contains('5'));
    }

    #[test]
    fn test_alpha_dims_toward_background() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 20, 10);

        let mut full = Buffer::empty(area);
        Card::new("8", &theme).alpha(1.0).render(area, &mut full);
        let mut dim = Buffer::empty(area);
        Card::new("8", &theme).alpha(0.5).render(area, &mut dim);

        // Border corner carries the blended color.
        let full_fg = full[(0, 0)].style().fg;
        let dim_fg = dim[(0, 0)].style().fg;
        assert_eq!(
            full_fg,
            Some(blend_toward(theme.card_border, theme.background, 1.0))
        );
        assert_ne!(full_fg, dim_fg);
        assert_eq!(
            dim_fg,
            Some(blend_toward(theme.card_border, theme.background, 0.5))
        );
    }

    #[test]
    fn test_mug_fit_detection() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 3));
        assert!(!render_mug(
            Rect::new(0, 0, 5, 3),
            &mut buf,
            Style::default().fg(Color::White)
        ));
    }
}
