//! Slide animation controller
//!
//! Eases the track position between slide indices. Positions are measured
//! in slide widths; the track renders at offset `-(position * width)`, so
//! a resting animator sits exactly on the current index and exactly one
//! slide is visible.
//!
//! Wrap-around animates across the seam: advancing from the last slide
//! eases to a virtual index one past the end, then normalizes back into
//! range on completion.

use std::time::{Duration, Instant};

use marquee_core::MotionConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Direction to travel when animating to a target index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Always travel forward (next / auto-advance)
    Forward,
    /// Always travel backward (prev)
    Backward,
    /// Shortest path (dot clicks, digit jumps)
    Nearest,
}

/// Active slide animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    /// Starting track position
    from: f64,
    /// Target track position, possibly outside `[0, total)` while
    /// crossing the wrap seam
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Track position animator.
///
/// Call `go_to()` on navigation, then `update()` each frame for the
/// interpolated position. With motion disabled every transition is an
/// instant jump, matching the plain index translation.
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    animation: Option<ActiveAnimation>,
    /// Raw track position; may leave `[0, total)` mid-flight
    position: f64,
    config: MotionConfig,
}

impl SlideAnimator {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            animation: None,
            position: 0.0,
            config,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current track position normalized into `[0, total)`.
    pub fn position(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.position.rem_euclid(total as f64)
    }

    /// Jump to an index immediately, cancelling any animation.
    pub fn snap_to(&mut self, index: usize) {
        self.animation = None;
        self.position = index as f64;
    }

    /// Animate the track to `target`, travelling in `direction`.
    ///
    /// A navigation arriving mid-animation chains from the current
    /// interpolated position, so rapid key presses stay smooth.
    pub fn go_to(
        &mut self,
        target: usize,
        total: usize,
        direction: SlideDirection,
        now: Instant,
    ) {
        if total == 0 {
            return;
        }

        if !self.config.enabled || self.config.duration_ms == 0 {
            self.snap_to(target);
            return;
        }

        let from = self.position;
        let to = from + travel_delta(from, target, total, direction);
        if (to - from).abs() < f64::EPSILON {
            self.animation = None;
            self.position = target as f64;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from,
            to,
            duration: Duration::from_millis(self.config.duration_ms),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the normalized track position.
    pub fn update(&mut self, now: Instant, total: usize) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, now, anim.duration) {
                self.position = anim.to.rem_euclid(total.max(1) as f64);
                self.animation = None;
            } else {
                let t = progress(anim.start, now, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.position = lerp(anim.from, anim.to, eased_t);
            }
        }
        self.position(total)
    }
}

/// Signed travel distance from `from` to slide `target` in the requested
/// direction, in slide widths.
fn travel_delta(from: f64, target: usize, total: usize, direction: SlideDirection) -> f64 {
    let total = total as f64;
    let target = target as f64;
    match direction {
        SlideDirection::Forward => (target - from).rem_euclid(total),
        SlideDirection::Backward => -((from - target).rem_euclid(total)),
        SlideDirection::Nearest => {
            let half = total / 2.0;
            (target - from + half).rem_euclid(total) - half
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_config() -> MotionConfig {
        MotionConfig {
            enabled: false,
            ..Default::default()
        }
    }

    fn smooth_config() -> MotionConfig {
        MotionConfig {
            enabled: true,
            duration_ms: 100,
            easing: EasingType::Linear,
            animation_fps: 60,
        }
    }

    #[test]
    fn test_instant_jump_when_disabled() {
        let mut animator = SlideAnimator::new(instant_config());
        let now = Instant::now();
        animator.go_to(2, 5, SlideDirection::Forward, now);
        assert!(!animator.is_animating());
        assert!((animator.position(5) - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = SlideAnimator::new(smooth_config());
        let t0 = Instant::now();
        animator.go_to(1, 3, SlideDirection::Forward, t0);
        assert!(animator.is_animating());

        let mid = animator.update(t0 + Duration::from_millis(50), 3);
        assert!(mid > 0.0 && mid < 1.0, "mid = {}", mid);

        let done = animator.update(t0 + Duration::from_millis(150), 3);
        assert!((done - 1.0).abs() < 0.001);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_forward_wrap_normalizes() {
        let mut animator = SlideAnimator::new(smooth_config());
        animator.snap_to(2);
        let t0 = Instant::now();
        // Last slide of three, advancing to the first: travels to the
        // virtual index 3, lands at 0.
        animator.go_to(0, 3, SlideDirection::Forward, t0);
        let mid = animator.update(t0 + Duration::from_millis(50), 3);
        assert!(mid > 2.0, "keeps sliding forward, got {}", mid);
        let done = animator.update(t0 + Duration::from_millis(150), 3);
        assert!((done - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_backward_wrap() {
        let mut animator = SlideAnimator::new(smooth_config());
        let t0 = Instant::now();
        animator.go_to(2, 3, SlideDirection::Backward, t0);
        // From 0 backward to 2 travels to the virtual index -1.
        let mid = animator.update(t0 + Duration::from_millis(50), 3);
        assert!(mid > 2.0 && mid < 3.0, "mid = {}", mid);
        let done = animator.update(t0 + Duration::from_millis(150), 3);
        assert!((done - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_nearest_picks_short_path() {
        assert!((travel_delta(0.0, 4, 5, SlideDirection::Nearest) - (-1.0)).abs() < 0.001);
        assert!((travel_delta(0.0, 1, 5, SlideDirection::Nearest) - 1.0).abs() < 0.001);
        assert!((travel_delta(4.0, 0, 5, SlideDirection::Nearest) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_noop_when_already_at_target() {
        let mut animator = SlideAnimator::new(smooth_config());
        animator.snap_to(1);
        animator.go_to(1, 4, SlideDirection::Nearest, Instant::now());
        assert!(!animator.is_animating());
    }
}
