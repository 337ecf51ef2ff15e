pub mod carousel;
pub mod config;
pub mod deck;
pub mod error;
pub mod schedule;

pub use carousel::Carousel;
pub use config::{AppConfig, EasingType, MotionConfig};
pub use deck::{Deck, Slide};
pub use error::{Error, Result};
pub use schedule::AutoAdvance;
