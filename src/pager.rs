//! Carousel scroll state (rendering-agnostic).
//!
//! Position is continuous, measured in page units (1.0 = one full page
//! width), so the visual transforms animate smoothly mid-gesture. The
//! widgets read this state every frame; they never mutate it.

use std::time::{Duration, Instant};

/// Scale applied to a page one or more pages away from center.
pub const MIN_SCALE: f32 = 0.85;

/// Alpha applied to a page one or more pages away from center.
pub const MIN_ALPHA: f32 = 0.5;

/// Scale for a page at signed fractional `offset` from the centered page.
///
/// Linear between 1.0 (centered) and [`MIN_SCALE`] (one page away); pages
/// farther than one away hold at the minimum rather than shrinking further.
pub fn scale_for_offset(offset: f32) -> f32 {
    let o = offset.abs().clamp(0.0, 1.0);
    MIN_SCALE + (1.0 - MIN_SCALE) * (1.0 - o)
}

/// Alpha for a page at signed fractional `offset` from the centered page.
///
/// Same mapping as [`scale_for_offset`] but between 1.0 and [`MIN_ALPHA`].
pub fn alpha_for_offset(offset: f32) -> f32 {
    let o = offset.abs().clamp(0.0, 1.0);
    MIN_ALPHA + (1.0 - MIN_ALPHA) * (1.0 - o)
}

/// What is currently driving the scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    /// At rest on a whole page.
    Idle,
    /// User gesture in progress; position follows the pointer.
    Dragging,
    /// Eased scroll toward a whole page (indicator tap, key, or snap).
    Animating {
        from: f32,
        target: f32,
        started: Instant,
    },
}

/// Pager scroll state for a fixed number of pages.
#[derive(Debug, Clone)]
pub struct PagerState {
    position: f32,
    page_count: usize,
    motion: Motion,
    animation_duration: Duration,
}

impl PagerState {
    /// Create a pager resting on page 0.
    ///
    /// `page_count` must be at least 1.
    pub fn new(page_count: usize, animation_duration: Duration) -> Self {
        assert!(page_count >= 1, "pager needs at least one page");
        Self {
            position: 0.0,
            page_count,
            motion: Motion::Idle,
            animation_duration,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Continuous scroll position in page units, always in `[0, count-1]`.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Nearest whole page; always a valid index into the deck.
    pub fn current_page(&self) -> usize {
        (self.position.round() as usize).min(self.page_count - 1)
    }

    /// Signed fractional distance of `page` from the current scroll position.
    pub fn offset_for_page(&self, page: usize) -> f32 {
        page as f32 - self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.motion == Motion::Dragging
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Animating { .. })
    }

    fn max_position(&self) -> f32 {
        (self.page_count - 1) as f32
    }

    fn clamp(&self, position: f32) -> f32 {
        position.clamp(0.0, self.max_position())
    }

    /// Begin a swipe gesture. Cancels any in-flight animation where it stands.
    pub fn drag_start(&mut self) {
        self.motion = Motion::Dragging;
    }

    /// Move the scroll position by `delta` pages during a drag.
    pub fn drag_by(&mut self, delta: f32) {
        if self.motion != Motion::Dragging {
            return;
        }
        self.position = self.clamp(self.position + delta);
    }

    /// End the gesture: snap to the nearest whole page with an animation.
    pub fn drag_end(&mut self, now: Instant) {
        if self.motion != Motion::Dragging {
            return;
        }
        let nearest = self.current_page();
        self.start_animation(nearest, now);
    }

    /// Animated scroll to `page` (clamped). Replaces any active motion.
    pub fn animate_to(&mut self, page: usize, now: Instant) {
        let page = page.min(self.page_count - 1);
        self.start_animation(page, now);
    }

    /// Animated scroll `delta` pages from the current page.
    pub fn step(&mut self, delta: i32, now: Instant) {
        let target = (self.current_page() as i32 + delta)
            .clamp(0, self.page_count as i32 - 1) as usize;
        self.start_animation(target, now);
    }

    /// Immediate, non-animated move to `page` (clamped).
    pub fn jump_to(&mut self, page: usize) {
        self.position = self.clamp(page.min(self.page_count - 1) as f32);
        self.motion = Motion::Idle;
    }

    fn start_animation(&mut self, target: usize, now: Instant) {
        let target = target as f32;
        if (self.position - target).abs() < f32::EPSILON {
            self.position = target;
            self.motion = Motion::Idle;
            return;
        }
        self.motion = Motion::Animating {
            from: self.position,
            target,
            started: now,
        };
    }

    /// Advance an active animation. Returns true if the position changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Motion::Animating {
            from,
            target,
            started,
        } = self.motion
        else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started);
        let duration = self.animation_duration.max(Duration::from_millis(1));
        let t = (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0);

        // Ease-out cubic: fast start, settles into the target page.
        let eased = 1.0 - (1.0 - t).powi(3);
        let previous = self.position;
        self.position = self.clamp(from + (target - from) * eased);

        if t >= 1.0 {
            self.position = self.clamp(target);
            self.motion = Motion::Idle;
        }

        (self.position - previous).abs() > f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager() -> PagerState {
        PagerState::new(12, Duration::from_millis(350))
    }

    #[test]
    fn test_transform_endpoints() {
        assert_eq!(scale_for_offset(0.0), 1.0);
        assert_eq!(alpha_for_offset(0.0), 1.0);
        assert_eq!(scale_for_offset(1.0), MIN_SCALE);
        assert_eq!(alpha_for_offset(1.0), MIN_ALPHA);
        // Pages beyond one away hold at the minimum.
        assert_eq!(scale_for_offset(3.5), MIN_SCALE);
        assert_eq!(alpha_for_offset(-2.0), MIN_ALPHA);
    }

    #[test]
    fn test_transforms_linear_and_symmetric() {
        let scale = scale_for_offset(0.5);
        assert!((scale - 0.925).abs() < 1e-6);
        let alpha = alpha_for_offset(0.5);
        assert!((alpha - 0.75).abs() < 1e-6);
        assert_eq!(scale_for_offset(-0.5), scale_for_offset(0.5));
        assert_eq!(alpha_for_offset(-0.25), alpha_for_offset(0.25));
    }

    #[test]
    fn test_starts_at_page_zero() {
        let p = pager();
        assert_eq!(p.position(), 0.0);
        assert_eq!(p.current_page(), 0);
        assert!(!p.is_animating());
    }

    #[test]
    fn test_animate_to_reaches_target() {
        let now = Instant::now();
        for target in 0..12 {
            let mut p = pager();
            p.animate_to(target, now);
            // Mid-animation the position must stay in range.
            p.tick(now + Duration::from_millis(100));
            assert!(p.position() >= 0.0 && p.position() <= 11.0);
            p.tick(now + Duration::from_millis(400));
            assert_eq!(p.current_page(), target);
            assert_eq!(p.position(), target as f32);
            assert!(!p.is_animating());
        }
    }

    #[test]
    fn test_animate_to_clamps_target() {
        let now = Instant::now();
        let mut p = pager();
        p.animate_to(99, now);
        p.tick(now + Duration::from_secs(1));
        assert_eq!(p.current_page(), 11);
    }

    #[test]
    fn test_drag_moves_continuously_and_snaps() {
        let now = Instant::now();
        let mut p = pager();
        p.drag_start();
        p.drag_by(0.6);
        assert!((p.position() - 0.6).abs() < 1e-6);
        // Mid-gesture the rounded page already reflects the nearer card.
        assert_eq!(p.current_page(), 1);
        p.drag_end(now);
        assert!(p.is_animating());
        p.tick(now + Duration::from_millis(400));
        assert_eq!(p.position(), 1.0);
    }

    #[test]
    fn test_drag_is_clamped() {
        let mut p = pager();
        p.drag_start();
        p.drag_by(-50.0);
        assert_eq!(p.position(), 0.0);
        p.drag_by(500.0);
        assert_eq!(p.position(), 11.0);
    }

    #[test]
    fn test_drag_ignored_when_not_dragging() {
        let mut p = pager();
        p.drag_by(2.0);
        assert_eq!(p.position(), 0.0);
    }

    #[test]
    fn test_new_drag_cancels_animation() {
        let now = Instant::now();
        let mut p = pager();
        p.animate_to(5, now);
        p.tick(now + Duration::from_millis(100));
        let mid = p.position();
        p.drag_start();
        assert!(!p.is_animating());
        // Position stays wherever the last tick left it.
        assert_eq!(p.position(), mid);
    }

    #[test]
    fn test_step_clamps_at_edges() {
        let now = Instant::now();
        let mut p = pager();
        p.step(-1, now);
        p.tick(now + Duration::from_secs(1));
        assert_eq!(p.current_page(), 0);
        p.jump_to(11);
        p.step(1, now);
        p.tick(now + Duration::from_secs(1));
        assert_eq!(p.current_page(), 11);
    }

    #[test]
    fn test_offset_for_page() {
        let mut p = pager();
        p.jump_to(3);
        assert_eq!(p.offset_for_page(3), 0.0);
        assert_eq!(p.offset_for_page(4), 1.0);
        assert_eq!(p.offset_for_page(1), -2.0);
    }

    #[test]
    fn test_tick_idle_reports_no_change() {
        let mut p = pager();
        assert!(!p.tick(Instant::now()));
    }
}
