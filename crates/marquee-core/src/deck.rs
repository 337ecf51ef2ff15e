//! Deck model and loader
//!
//! A deck is the ordered, fixed list of banner slides the carousel cycles
//! through, read once at startup from a TOML file. A deck with zero
//! slides is valid input; it yields a disabled widget rather than an
//! error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// One banner slide: a headline, optional lines of copy, an optional
/// link opened on request, and an optional accent color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Headline shown centered in the track.
    pub title: String,
    /// Copy lines below the headline.
    #[serde(default)]
    pub body: Vec<String>,
    /// Link opened in the browser when the slide is active.
    #[serde(default)]
    pub link: Option<String>,
    /// Accent color as a hex string, e.g. "#d8a657".
    #[serde(default)]
    pub accent: Option<String>,
}

/// An ordered, immutable list of slides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title, shown in the status bar.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Load and validate a deck file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Deck(format!("cannot read {}: {}", path.display(), e))
        })?;
        let deck: Deck = toml::from_str(&content)
            .map_err(|e| Error::Deck(format!("{}: {}", path.display(), e)))?;
        deck.validate()?;
        debug!("loaded deck '{}' with {} slides", deck.title, deck.slides.len());
        Ok(deck)
    }

    /// Validate slide fields. An empty deck passes; the widget is simply
    /// disabled for it.
    pub fn validate(&self) -> Result<()> {
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                return Err(Error::Deck(format!("slide {} has an empty title", i + 1)));
            }
            if let Some(ref accent) = slide.accent {
                if parse_hex_color(accent).is_none() {
                    return Err(Error::Deck(format!(
                        "slide {} has an invalid accent color '{}'",
                        i + 1,
                        accent
                    )));
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

/// Parse "#rrggbb" or "rrggbb" into RGB components.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deck() {
        let deck: Deck = toml::from_str(
            r##"
            title = "Front page"

            [[slides]]
            title = "Fresh sourdough, every morning"
            body = ["Baked at 6am"]
            link = "https://example.com/shop"
            accent = "#d8a657"

            [[slides]]
            title = "Weekend special"
            "##,
        )
        .unwrap();
        assert_eq!(deck.title, "Front page");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[0].body, vec!["Baked at 6am"]);
        assert!(deck.slides[1].link.is_none());
        assert!(deck.validate().is_ok());
    }

    #[test]
    fn test_empty_deck_is_valid() {
        let deck: Deck = toml::from_str("title = \"Nothing\"").unwrap();
        assert!(deck.is_empty());
        assert!(deck.validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let deck: Deck = toml::from_str(
            r#"
            [[slides]]
            title = "  "
            "#,
        )
        .unwrap();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_bad_accent_rejected() {
        let deck: Deck = toml::from_str(
            r##"
            [[slides]]
            title = "Ok"
            accent = "#zzz"
            "##,
        )
        .unwrap();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#d8a657"), Some((0xd8, 0xa6, 0x57)));
        assert_eq!(parse_hex_color("ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("not-a-color"), None);
    }
}
