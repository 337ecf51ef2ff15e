use marquee_core::config::{ThemeColorOverrides, ThemeConfig};
use marquee_core::deck::parse_hex_color;
use ratatui::style::Color;
use tracing::warn;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary background
    pub bg0: Color,
    /// Secondary background (status bar)
    pub bg1: Color,
    /// Primary foreground
    pub fg0: Color,
    /// Dimmed foreground
    pub fg1: Color,
    /// Borders, inactive controls
    pub grey: Color,
    /// Active dot, focused controls
    pub accent: Color,
    /// Inactive dots
    pub dot_inactive: Color,
    /// Error messages
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xa8, 0x99, 0x84),
            grey: Color::Rgb(0x7c, 0x6f, 0x64),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            dot_inactive: Color::Rgb(0x92, 0x83, 0x74),
            error: Color::Rgb(0xea, 0x69, 0x62),
        }
    }
}

impl Theme {
    /// Build the theme from config, applying color overrides on top of
    /// the named base palette.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = match config.name.as_str() {
            "gruvbox-dark" => Self::default(),
            other => {
                warn!("unknown theme '{}', falling back to gruvbox-dark", other);
                Self::default()
            }
        };
        theme.apply_overrides(&config.colors);
        theme
    }

    fn apply_overrides(&mut self, colors: &ThemeColorOverrides) {
        apply(&mut self.bg0, &colors.bg0);
        apply(&mut self.bg1, &colors.bg1);
        apply(&mut self.fg0, &colors.fg0);
        apply(&mut self.fg1, &colors.fg1);
        apply(&mut self.accent, &colors.accent);
        apply(&mut self.dot_inactive, &colors.dot_inactive);
        apply(&mut self.error, &colors.error);
    }
}

/// Parse a hex color string into a ratatui color.
pub fn parse_color(s: &str) -> Option<Color> {
    parse_hex_color(s).map(|(r, g, b)| Color::Rgb(r, g, b))
}

fn apply(slot: &mut Color, value: &Option<String>) {
    if let Some(s) = value {
        match parse_color(s) {
            Some(color) => *slot = color,
            None => warn!("ignoring invalid theme color '{}'", s),
        }
    }
}
