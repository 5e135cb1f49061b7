//! Widgets and screen layout.
//!
//! One screen: the card carousel on top, the indicator dot rows beneath it,
//! a one-line key hint at the bottom. Layout is a pure function of the
//! terminal size so event handling and rendering always agree on where
//! things are.

pub mod bigtext;
pub mod card;
pub mod carousel;
pub mod indicator;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::deck::CARDS;
use carousel::Carousel;
use indicator::IndicatorRow;

/// Screen regions for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub carousel: Rect,
    pub indicator: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect, card_count: usize, dot_width: u16) -> ScreenLayout {
        let status_height = if area.height >= 10 { 1 } else { 0 };
        let indicator_height = IndicatorRow::height_for_width(card_count, dot_width, area.width)
            .min(area.height / 2);

        let [carousel, indicator, status] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(indicator_height),
            Constraint::Length(status_height),
        ])
        .areas(area);

        ScreenLayout {
            carousel,
            indicator,
            status,
        }
    }
}

/// Render the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(
        frame.area(),
        CARDS.len(),
        app.config.ui.indicator_width,
    );

    let background = Style::default().bg(app.theme.background);
    let buf = frame.buffer_mut();
    for pos in buf.area().positions() {
        buf[(pos.x, pos.y)].set_char(' ').set_style(background);
    }

    Carousel::new(&app.pager, &app.theme).render(layout.carousel, buf);

    IndicatorRow::new(
        &CARDS,
        app.pager.current_page(),
        app.config.ui.indicator_width,
        &app.theme,
    )
    .render(layout.indicator, buf);

    if layout.status.height > 0 {
        let hint = Line::raw("arrows/drag swipe | click a dot to jump | t theme | q quit")
            .centered()
            .style(Style::default().fg(app.theme.status_text).bg(app.theme.background));
        frame.render_widget(Paragraph::new(hint), layout.status);
    }
}
