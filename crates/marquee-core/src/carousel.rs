//! Carousel state machine
//!
//! A single mutable index over a fixed slide count, wrapped at both ends,
//! plus the hover-pause flag. One instance per widget; the surrounding app
//! owns it for the widget's lifetime.

/// Carousel navigation state.
///
/// The index is always in `[0, total)`. `next`/`prev` wrap with modular
/// arithmetic; `jump_to` trusts the caller (dot click handlers and digit
/// keys derive the index from an indicator position, so it is valid by
/// construction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    total: usize,
    current: usize,
    paused: bool,
}

impl Carousel {
    /// Create a carousel over `total` slides, starting at index 0.
    ///
    /// Returns `None` for an empty slide list: the widget is disabled
    /// entirely in that case (no schedule, no input handling).
    pub fn new(total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self {
            total,
            current: 0,
            paused: false,
        })
    }

    /// Number of slides (fixed at construction).
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Index of the active slide.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance to the following slide, wrapping past the last.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.total;
    }

    /// Step back to the preceding slide, wrapping before the first.
    /// Adding `total` before the modulus keeps the operand non-negative.
    pub fn prev(&mut self) {
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jump straight to `index`. No bounds check; see the type docs for
    /// the caller contract.
    pub fn jump_to(&mut self, index: usize) {
        self.current = index;
    }

    /// Whether automatic advance is currently suppressed.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the hover-pause flag. The auto-advance schedule keeps running
    /// while paused; fired ticks are simply skipped.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_disabled() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_starts_at_zero() {
        let c = Carousel::new(5).unwrap();
        assert_eq!(c.current(), 0);
        assert_eq!(c.total(), 5);
        assert!(!c.is_paused());
    }

    #[test]
    fn test_next_wraps_forward() {
        let mut c = Carousel::new(3).unwrap();
        c.next();
        assert_eq!(c.current(), 1);
        c.next();
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_prev_wraps_backward() {
        let mut c = Carousel::new(3).unwrap();
        c.prev();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_cyclic_law() {
        for total in 2..8 {
            let mut c = Carousel::new(total).unwrap();
            c.jump_to(total / 2);
            let start = c.current();
            for _ in 0..total {
                c.next();
            }
            assert_eq!(c.current(), start, "total={}", total);
        }
    }

    #[test]
    fn test_prev_next_inverse() {
        let mut c = Carousel::new(4).unwrap();
        for start in 0..4 {
            c.jump_to(start);
            c.prev();
            c.next();
            assert_eq!(c.current(), start);
            c.next();
            c.prev();
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn test_index_stays_in_range() {
        for total in 1..6 {
            let mut c = Carousel::new(total).unwrap();
            for i in 0..50 {
                if i % 3 == 0 {
                    c.prev();
                } else {
                    c.next();
                }
                assert!(c.current() < total, "total={} i={}", total, i);
            }
        }
    }

    #[test]
    fn test_jump_to_is_exact() {
        let mut c = Carousel::new(6).unwrap();
        c.next();
        c.next();
        c.jump_to(4);
        assert_eq!(c.current(), 4);
        c.jump_to(0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_single_slide_is_fixed_point() {
        let mut c = Carousel::new(1).unwrap();
        c.next();
        assert_eq!(c.current(), 0);
        c.prev();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_pause_flag() {
        let mut c = Carousel::new(2).unwrap();
        c.set_paused(true);
        assert!(c.is_paused());
        c.set_paused(false);
        assert!(!c.is_paused());
    }
}
