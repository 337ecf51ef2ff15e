//! Slide motion system
//!
//! Animates the track's horizontal translation between slide positions
//! with configurable easing. Positions are measured in slide widths, so a
//! resting position is exactly the current slide index and the rendered
//! offset is `-(position * width)`.
//!
//! - `easing` - pure easing functions
//! - `timing` - progress and interpolation helpers
//! - `animation` - the `SlideAnimator` controller

pub mod animation;
pub mod easing;
pub mod timing;

pub use animation::{SlideAnimator, SlideDirection};
