//! Page indicator row.
//!
//! One small dot per card, wrapped to multiple rows when the terminal is
//! narrow, every row centered. Exactly one dot is active, matching the
//! pager's current page, and dots are click targets: `dot_at` maps a mouse
//! position back to a page index for the jump-to-page request.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::deck;
use crate::theme::Theme;

/// Height of one dot in rows, padding included.
pub const DOT_HEIGHT: u16 = 3;

pub struct IndicatorRow<'a> {
    labels: &'a [&'static str],
    active: usize,
    dot_width: u16,
    theme: &'a Theme,
}

impl<'a> IndicatorRow<'a> {
    pub fn new(labels: &'a [&'static str], active: usize, dot_width: u16, theme: &'a Theme) -> Self {
        Self {
            labels,
            active,
            dot_width: dot_width.max(3),
            theme,
        }
    }

    /// Rows needed to fit `count` dots of `dot_width` into `width` columns.
    pub fn rows_for_width(count: usize, dot_width: u16, width: u16) -> u16 {
        let per_row = (width / dot_width.max(3)).max(1) as usize;
        count.div_ceil(per_row) as u16
    }

    /// Total indicator height for the given terminal width.
    pub fn height_for_width(count: usize, dot_width: u16, width: u16) -> u16 {
        Self::rows_for_width(count, dot_width, width) * DOT_HEIGHT
    }

    /// Screen rectangle of every dot, indexed by page, wrapped and centered.
    pub fn dot_rects(&self, area: Rect) -> Vec<Rect> {
        let count = self.labels.len();
        let per_row = (area.width / self.dot_width).max(1) as usize;
        let rows = count.div_ceil(per_row) as u16;
        let y0 = area.y + area.height.saturating_sub(rows * DOT_HEIGHT) / 2;

        let mut rects = Vec::with_capacity(count);
        for row in 0..rows as usize {
            let in_row = per_row.min(count - row * per_row);
            let row_width = in_row as u16 * self.dot_width;
            let x0 = area.x + area.width.saturating_sub(row_width) / 2;
            for col in 0..in_row {
                rects.push(Rect::new(
                    x0 + col as u16 * self.dot_width,
                    y0 + row as u16 * DOT_HEIGHT,
                    self.dot_width,
                    DOT_HEIGHT,
                ));
            }
        }
        rects
    }

    /// Page index of the dot under (x, y), if any.
    pub fn dot_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        self.dot_rects(area)
            .iter()
            .position(|rect| rect.contains(ratatui::layout::Position { x, y }))
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for (index, rect) in self.dot_rects(area).into_iter().enumerate() {
            // The visible dot sits inside one cell of padding.
            let inner = Rect::new(
                rect.x + 1,
                rect.y + 1,
                rect.width.saturating_sub(2),
                rect.height.saturating_sub(2),
            );
            if inner.width == 0 || inner.height == 0 {
                continue;
            }

            let background = if index == self.active {
                self.theme.indicator_active
            } else {
                self.theme.indicator_inactive
            };
            let style = Style::default().fg(self.theme.indicator_text).bg(background);

            for pos in inner.positions() {
                if pos.x < buf.area().right() && pos.y < buf.area().bottom() {
                    buf[(pos.x, pos.y)].set_char(' ').set_style(style);
                }
            }

            let label = short_label(self.labels[index]);
            let label_width = (label.chars().count() as u16).min(inner.width);
            let lx = inner.x + (inner.width - label_width) / 2;
            let ly = inner.y + inner.height / 2;
            for (dx, c) in label.chars().take(label_width as usize).enumerate() {
                let x = lx + dx as u16;
                if x < buf.area().right() && ly < buf.area().bottom() {
                    buf[(x, ly)].set_char(c).set_style(style);
                }
            }
        }
    }
}

/// Dot caption: card label, except the coffee card which gets a mug mark.
fn short_label(label: &str) -> &str {
    if deck::is_coffee(label) {
        "C"
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::CARDS;

    fn indicator<'a>(theme: &'a Theme, active: usize) -> IndicatorRow<'a> {
        IndicatorRow::new(&CARDS, active, 5, theme)
    }

    #[test]
    fn test_one_dot_per_card() {
        let theme = Theme::dark();
        let row = indicator(&theme, 0);
        let rects = row.dot_rects(Rect::new(0, 0, 80, 5));
        assert_eq!(rects.len(), CARDS.len());
    }

    #[test]
    fn test_single_row_is_centered() {
        let theme = Theme::dark();
        let row = indicator(&theme, 0);
        let rects = row.dot_rects(Rect::new(0, 0, 64, 3));
        // 12 dots x 5 cells = 60, centered in 64.
        assert_eq!(rects[0].x, 2);
        assert_eq!(rects[11].x, 2 + 11 * 5);
        assert!(rects.iter().all(|r| r.y == rects[0].y));
    }

    #[test]
    fn test_narrow_terminal_wraps_rows() {
        let theme = Theme::dark();
        let row = indicator(&theme, 0);
        let rects = row.dot_rects(Rect::new(0, 0, 30, 6));
        // 6 dots fit per 30-column row.
        assert_eq!(rects[5].y, rects[0].y);
        assert_eq!(rects[6].y, rects[0].y + DOT_HEIGHT);
        assert_eq!(IndicatorRow::rows_for_width(CARDS.len(), 5, 30), 2);
        assert_eq!(IndicatorRow::height_for_width(CARDS.len(), 5, 30), 6);
    }

    #[test]
    fn test_last_wrapped_row_is_centered() {
        let theme = Theme::dark();
        let row = indicator(&theme, 0);
        // 5 per row: rows of 5, 5, 2. The short row re-centers.
        let rects = row.dot_rects(Rect::new(0, 0, 27, 9));
        assert_eq!(rects.len(), 12);
        assert_eq!(rects[10].y, rects[0].y + 2 * DOT_HEIGHT);
        assert_eq!(rects[10].x, (27 - 10) / 2);
    }

    #[test]
    fn test_exactly_one_active_dot() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 80, 3);
        for active in 0..CARDS.len() {
            let mut buf = Buffer::empty(area);
            indicator(&theme, active).render(area, &mut buf);
            let active_cells = area
                .positions()
                .filter(|pos| buf[(pos.x, pos.y)].style().bg == Some(theme.indicator_active))
                .count();
            // One dot interior: (5-2) x (3-2) cells.
            assert_eq!(active_cells, 3, "active page {active}");
        }
    }

    #[test]
    fn test_dot_hit_testing() {
        let theme = Theme::dark();
        let row = indicator(&theme, 0);
        let area = Rect::new(0, 0, 64, 3);
        let rects = row.dot_rects(area);

        for (i, rect) in rects.iter().enumerate() {
            assert_eq!(row.dot_at(area, rect.x + 2, rect.y + 1), Some(i));
        }
        // Left margin is not a dot.
        assert_eq!(row.dot_at(area, 0, 1), None);
    }

    #[test]
    fn test_coffee_dot_shows_mug_mark() {
        assert_eq!(short_label("coffee"), "C");
        assert_eq!(short_label("100"), "100");
        assert_eq!(short_label("?"), "?");
    }
}
