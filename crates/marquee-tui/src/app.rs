use std::sync::Arc;
use std::time::{Duration, Instant};

use marquee_core::{AppConfig, AutoAdvance, Carousel, Deck, Slide};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::motion::{SlideAnimator, SlideDirection};
use crate::theme::Theme;

/// Hit-test rectangles recorded by the widgets on each draw, used to
/// resolve mouse events. Zero-sized rects match nothing, so affordances
/// that didn't fit on screen simply can't be clicked.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// The carousel's containing region; hovering it pauses auto-advance
    pub region: Rect,
    /// Previous control
    pub prev: Rect,
    /// Next control
    pub next: Rect,
    /// One rect per pagination dot, in slide order
    pub dots: Vec<Rect>,
}

impl HitAreas {
    /// Index of the dot under the pointer, if any.
    pub fn dot_at(&self, pos: Position) -> Option<usize> {
        self.dots.iter().position(|rect| rect.contains(pos))
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The loaded slide deck (immutable for the app's lifetime)
    pub deck: Deck,
    /// Carousel state; `None` for an empty deck (widget disabled)
    pub carousel: Option<Carousel>,
    /// Auto-advance schedule
    pub auto: AutoAdvance,
    /// Track position animator
    pub animator: SlideAnimator,
    /// Color theme
    pub theme: Theme,
    /// Pointer is currently over the carousel region
    pub hovering: bool,
    /// Manual pause toggled from the keyboard
    pub pinned_pause: bool,
    /// Hit rects from the last draw
    pub layout: HitAreas,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Build the app state. For an empty deck the carousel stays
    /// disabled: no schedule is started and navigation is a no-op.
    pub fn new(deck: Deck, config: Arc<AppConfig>, theme: Theme, now: Instant) -> Self {
        let carousel = Carousel::new(deck.len());
        let mut auto = AutoAdvance::new(Duration::from_millis(config.carousel.interval_ms));
        if carousel.is_some() && config.carousel.autoplay {
            auto.start(now);
        }
        let animator = SlideAnimator::new(config.ui.motion.clone());

        Self {
            config,
            deck,
            carousel,
            auto,
            animator,
            theme,
            hovering: false,
            pinned_pause: false,
            layout: HitAreas::default(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Whether the widget is disabled (empty deck).
    pub fn is_disabled(&self) -> bool {
        self.carousel.is_none()
    }

    /// Index of the active slide.
    pub fn current(&self) -> Option<usize> {
        self.carousel.as_ref().map(|c| c.current())
    }

    /// The active slide.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.slide(self.current()?)
    }

    /// The active slide's link, if it has one.
    pub fn current_link(&self) -> Option<&str> {
        self.current_slide()?.link.as_deref()
    }

    /// Whether automatic advance is suppressed right now. The schedule
    /// keeps running regardless; paused ticks are skipped.
    pub fn is_paused(&self) -> bool {
        let hover_paused = self
            .carousel
            .as_ref()
            .map(|c| c.is_paused())
            .unwrap_or(false);
        hover_paused || self.pinned_pause
    }

    /// Periodic tick: advance on a fired schedule unless paused. An
    /// automatic advance does not reset the schedule; only user
    /// navigation does.
    pub fn on_tick(&mut self, now: Instant) {
        if self.auto.poll(now) && !self.is_paused() {
            if let Some(ref mut carousel) = self.carousel {
                carousel.next();
                let target = carousel.current();
                let total = carousel.total();
                self.animator
                    .go_to(target, total, SlideDirection::Forward, now);
            }
        }
    }

    /// User navigation: next slide. Resets the schedule so the next
    /// automatic advance is a full interval away.
    pub fn next_slide(&mut self, now: Instant) {
        if let Some(ref mut carousel) = self.carousel {
            carousel.next();
            let target = carousel.current();
            let total = carousel.total();
            self.animator
                .go_to(target, total, SlideDirection::Forward, now);
            self.auto.reset(now);
        }
    }

    /// User navigation: previous slide.
    pub fn prev_slide(&mut self, now: Instant) {
        if let Some(ref mut carousel) = self.carousel {
            carousel.prev();
            let target = carousel.current();
            let total = carousel.total();
            self.animator
                .go_to(target, total, SlideDirection::Backward, now);
            self.auto.reset(now);
        }
    }

    /// User navigation: jump to a dot index. Indices without a dot
    /// (digit keys past the deck length) are ignored, keeping the
    /// trusted-caller contract of `Carousel::jump_to`.
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        if let Some(ref mut carousel) = self.carousel {
            if index >= carousel.total() {
                return;
            }
            carousel.jump_to(index);
            let total = carousel.total();
            self.animator
                .go_to(index, total, SlideDirection::Nearest, now);
            self.auto.reset(now);
        }
    }

    /// Pointer entered or left the carousel region.
    pub fn set_hover(&mut self, inside: bool) {
        if !self.config.carousel.pause_on_hover {
            return;
        }
        if inside != self.hovering {
            self.hovering = inside;
            if let Some(ref mut carousel) = self.carousel {
                carousel.set_paused(inside);
            }
            debug!("hover {}", if inside { "enter" } else { "leave" });
        }
    }

    /// Toggle the manual pause.
    pub fn toggle_pause(&mut self) {
        self.pinned_pause = !self.pinned_pause;
        self.set_status(if self.pinned_pause { "Paused" } else { "Playing" });
    }

    /// Advance the slide animation and return the track position.
    pub fn update_motion(&mut self, now: Instant) -> f64 {
        self.animator.update(now, self.deck.len())
    }

    /// Whether the next frame should render at the animation tick rate.
    pub fn needs_motion_update(&self) -> bool {
        self.animator.is_animating()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::config::MotionConfig;

    const INTERVAL: Duration = Duration::from_millis(4000);

    fn deck(n: usize) -> Deck {
        Deck {
            title: "Test".to_string(),
            slides: (0..n)
                .map(|i| Slide {
                    title: format!("Slide {}", i + 1),
                    body: Vec::new(),
                    link: None,
                    accent: None,
                })
                .collect(),
        }
    }

    fn app(n: usize, now: Instant) -> App {
        let mut config = AppConfig::default();
        // Index logic under test; keep translations instantaneous
        config.ui.motion = MotionConfig {
            enabled: false,
            ..Default::default()
        };
        App::new(deck(n), Arc::new(config), Theme::default(), now)
    }

    #[test]
    fn test_empty_deck_disables_widget() {
        let t0 = Instant::now();
        let mut app = app(0, t0);
        assert!(app.is_disabled());
        assert!(!app.auto.is_running());
        app.next_slide(t0);
        app.prev_slide(t0);
        app.jump_to(2, t0);
        app.on_tick(t0 + INTERVAL * 3);
        assert_eq!(app.current(), None);
        assert!(!app.auto.is_running());
    }

    #[test]
    fn test_auto_advance_on_fired_tick() {
        let t0 = Instant::now();
        let mut app = app(3, t0);
        app.on_tick(t0 + INTERVAL / 2);
        assert_eq!(app.current(), Some(0));
        app.on_tick(t0 + INTERVAL);
        assert_eq!(app.current(), Some(1));
    }

    #[test]
    fn test_hover_pause_skips_ticks_but_schedule_runs() {
        let t0 = Instant::now();
        let mut app = app(3, t0);
        app.set_hover(true);
        assert!(app.is_paused());

        // Two full intervals elapse while hovering; index unchanged
        app.on_tick(t0 + INTERVAL);
        app.on_tick(t0 + INTERVAL * 2);
        assert_eq!(app.current(), Some(0));
        assert!(app.auto.is_running());

        // After leaving, the next fired tick advances
        app.set_hover(false);
        assert!(!app.is_paused());
        app.on_tick(t0 + INTERVAL * 3);
        assert_eq!(app.current(), Some(1));
    }

    #[test]
    fn test_manual_navigation_resets_schedule() {
        let t0 = Instant::now();
        let mut app = app(3, t0);

        // Click "next" just before the automatic fire
        let click = t0 + INTERVAL - Duration::from_millis(100);
        app.next_slide(click);
        assert_eq!(app.current(), Some(1));

        // The old deadline is gone; the next fire is measured from the
        // click, not from startup
        app.on_tick(t0 + INTERVAL);
        assert_eq!(app.current(), Some(1));
        app.on_tick(click + INTERVAL);
        assert_eq!(app.current(), Some(2));
    }

    #[test]
    fn test_polling_every_iteration_keeps_cadence() {
        // The event loop calls on_tick every iteration, however fast the
        // iterations come; the deadline gates advances to one per
        // interval
        let t0 = Instant::now();
        let mut app = app(5, t0);
        let step = Duration::from_millis(100);
        let mut now = t0;
        while now <= t0 + INTERVAL * 2 + INTERVAL / 2 {
            app.on_tick(now);
            now += step;
        }
        assert_eq!(app.current(), Some(2));
    }

    #[test]
    fn test_automatic_tick_does_not_reset_schedule() {
        let t0 = Instant::now();
        let mut app = app(3, t0);
        app.on_tick(t0 + INTERVAL);
        // The re-armed deadline runs from the fire, one interval out
        assert_eq!(app.auto.remaining(t0 + INTERVAL), Some(INTERVAL));
    }

    #[test]
    fn test_jump_to_ignores_missing_dot() {
        let t0 = Instant::now();
        let mut app = app(3, t0);
        app.jump_to(7, t0);
        assert_eq!(app.current(), Some(0));
        app.jump_to(2, t0);
        assert_eq!(app.current(), Some(2));
    }

    #[test]
    fn test_manual_pause_toggle() {
        let t0 = Instant::now();
        let mut app = app(2, t0);
        app.toggle_pause();
        assert!(app.is_paused());
        app.on_tick(t0 + INTERVAL);
        assert_eq!(app.current(), Some(0));
        app.toggle_pause();
        app.on_tick(t0 + INTERVAL * 2);
        assert_eq!(app.current(), Some(1));
    }

    #[test]
    fn test_autoplay_disabled_by_config() {
        let t0 = Instant::now();
        let mut config = AppConfig::default();
        config.carousel.autoplay = false;
        let app = App::new(deck(3), Arc::new(config), Theme::default(), t0);
        assert!(!app.auto.is_running());
    }
}
