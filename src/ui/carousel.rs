//! Paged card carousel.
//!
//! Draws every page that intersects the viewport. Each page's rectangle is
//! the padded card area scaled around its center by the pager's scale
//! transform and shifted horizontally by its fractional offset, so a scroll
//! in progress shows the outgoing card shrinking and dimming while the
//! incoming one grows. The centered page paints last.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::deck;
use crate::pager::{alpha_for_offset, scale_for_offset, PagerState};
use crate::theme::Theme;
use crate::ui::card::Card;

// Padding between the screen edge and a resting card.
const H_PADDING: u16 = 4;
const V_PADDING: u16 = 1;

// Pages farther out than this cannot intersect the viewport.
const VISIBLE_RANGE: f32 = 1.5;

pub struct Carousel<'a> {
    pager: &'a PagerState,
    theme: &'a Theme,
}

impl<'a> Carousel<'a> {
    pub fn new(pager: &'a PagerState, theme: &'a Theme) -> Self {
        Self { pager, theme }
    }

    /// Columns per page, for converting mouse drag deltas to page units.
    pub fn page_width(area: Rect) -> f32 {
        area.width.max(1) as f32
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let background = Style::default().bg(self.theme.background);
        for pos in area.positions() {
            if pos.x < buf.area().right() && pos.y < buf.area().bottom() {
                buf[(pos.x, pos.y)].set_char(' ').set_style(background);
            }
        }

        let mut visible: Vec<(usize, f32)> = (0..self.pager.page_count())
            .map(|page| (page, self.pager.offset_for_page(page)))
            .filter(|(_, offset)| offset.abs() < VISIBLE_RANGE)
            .collect();
        // Paint outermost pages first so the centered card draws on top.
        visible.sort_by(|a, b| b.1.abs().partial_cmp(&a.1.abs()).unwrap_or(std::cmp::Ordering::Equal));

        for (page, offset) in visible {
            let Some(label) = deck::label(page) else {
                continue;
            };
            let scale = scale_for_offset(offset);
            let alpha = alpha_for_offset(offset);
            if let Some(rect) = card_rect(area, offset, scale) {
                Card::new(label, self.theme).alpha(alpha).render(rect, buf);
            }
        }
    }
}

/// Card rectangle for a page at `offset`, scaled around its center and
/// clipped to `area`. None when the page is entirely off screen.
pub fn card_rect(area: Rect, offset: f32, scale: f32) -> Option<Rect> {
    let base_width = area.width.saturating_sub(H_PADDING * 2).max(1) as f32;
    let base_height = area.height.saturating_sub(V_PADDING * 2).max(1) as f32;

    let width = (base_width * scale).round().max(1.0) as i32;
    let height = (base_height * scale).round().max(1.0) as i32;

    let center_x = area.x as f32 + area.width as f32 / 2.0 + offset * area.width as f32;
    let center_y = area.y as f32 + area.height as f32 / 2.0;

    let x0 = (center_x - width as f32 / 2.0).round() as i32;
    let y0 = (center_y - height as f32 / 2.0).round() as i32;

    // Clip to the viewport.
    let left = x0.max(area.x as i32);
    let top = y0.max(area.y as i32);
    let right = (x0 + width).min(area.right() as i32);
    let bottom = (y0 + height).min(area.bottom() as i32);

    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}
