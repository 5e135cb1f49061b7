//! Application core: all state and input handling, no rendering.
//!
//! The frontend converts raw terminal events into `FrontendEvent`s and
//! hands them here together with the current terminal size; the core maps
//! them onto pager operations. Widgets read this state every frame.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

use crate::config::Config;
use crate::deck;
use crate::frontend::FrontendEvent;
use crate::pager::PagerState;
use crate::theme::Theme;
use crate::ui::{carousel::Carousel, indicator::IndicatorRow, ScreenLayout};

/// An in-progress swipe gesture.
#[derive(Debug, Clone, Copy)]
struct DragState {
    last_x: u16,
}

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub pager: PagerState,
    pub running: bool,
    pub needs_render: bool,
    /// Set when a setting changed at runtime (theme cycling); the main
    /// loop persists the config on exit.
    pub config_dirty: bool,
    drag: Option<DragState>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::by_name(&config.ui.theme);
        let pager = PagerState::new(deck::card_count(), config.animation_duration());
        Self {
            config,
            theme,
            pager,
            running: true,
            needs_render: true,
            config_dirty: false,
            drag: None,
        }
    }

    /// Advance animations; returns true if the scroll position moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.pager.tick(now)
    }

    /// Switch to the next built-in theme.
    pub fn cycle_theme(&mut self) {
        let next = Theme::next_name(&self.config.ui.theme);
        self.config.ui.theme = next.to_string();
        self.theme = Theme::by_name(next);
        tracing::info!("Switched theme to {}", self.theme.name);
        self.config_dirty = true;
        self.needs_render = true;
    }

    /// Apply one frontend event. `size` is the current terminal size,
    /// needed to resolve mouse positions against the screen layout.
    pub fn handle_event(&mut self, event: FrontendEvent, size: (u16, u16), now: Instant) {
        match event {
            FrontendEvent::Key { code, modifiers } => self.handle_key(code, modifiers, now),
            FrontendEvent::Mouse { kind, x, y } => self.handle_mouse(kind, x, y, size, now),
            FrontendEvent::Resize { width, height } => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.needs_render = true;
            }
            FrontendEvent::Quit => {
                self.running = false;
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.pager.step(-1, now);
                self.needs_render = true;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.pager.step(1, now);
                self.needs_render = true;
            }
            KeyCode::Home => {
                self.pager.animate_to(0, now);
                self.needs_render = true;
            }
            KeyCode::End => {
                self.pager.animate_to(self.pager.page_count() - 1, now);
                self.needs_render = true;
            }
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            _ => {}
        }
    }

    fn handle_mouse(
        &mut self,
        kind: MouseEventKind,
        x: u16,
        y: u16,
        size: (u16, u16),
        now: Instant,
    ) {
        let area = ratatui::layout::Rect::new(0, 0, size.0, size.1);
        let layout = ScreenLayout::compute(area, deck::card_count(), self.config.ui.indicator_width);
        let position = ratatui::layout::Position { x, y };

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.indicator.contains(position) {
                    let row = IndicatorRow::new(
                        &deck::CARDS,
                        self.pager.current_page(),
                        self.config.ui.indicator_width,
                        &self.theme,
                    );
                    if let Some(page) = row.dot_at(layout.indicator, x, y) {
                        tracing::debug!("Indicator dot {} clicked", page);
                        self.pager.animate_to(page, now);
                        self.needs_render = true;
                    }
                } else if layout.carousel.contains(position) {
                    self.pager.drag_start();
                    self.drag = Some(DragState { last_x: x });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = self.drag {
                    // Content follows the pointer: dragging left pulls the
                    // next card in, so the position moves opposite the delta.
                    let delta_cols = drag.last_x as f32 - x as f32;
                    let delta_pages = delta_cols / Carousel::page_width(layout.carousel);
                    self.pager.drag_by(delta_pages);
                    self.drag = Some(DragState { last_x: x });
                    self.needs_render = true;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag.take().is_some() && self.pager.is_dragging() {
                    self.pager.drag_end(now);
                    self.needs_render = true;
                }
            }
            MouseEventKind::ScrollUp => {
                self.pager.step(-1, now);
                self.needs_render = true;
            }
            MouseEventKind::ScrollDown => {
                self.pager.step(1, now);
                self.needs_render = true;
            }
            _ => {}
        }
    }
}
