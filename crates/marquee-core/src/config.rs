use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default deck file, used when no path is given on the command line
    #[serde(default = "default_deck_path")]
    pub deck_path: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            deck_path: default_deck_path(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Interval between automatic advances in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Start the auto-advance schedule on launch
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Pause automatic advance while the pointer hovers the carousel
    #[serde(default = "default_true")]
    pub pause_on_hover: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            autoplay: default_true(),
            pause_on_hover: default_true(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the clock in the status bar
    #[serde(default = "default_true")]
    pub show_clock: bool,
    /// Show the countdown to the next automatic advance
    #[serde(default = "default_true")]
    pub show_countdown: bool,
    /// Slide motion configuration
    #[serde(default)]
    pub motion: MotionConfig,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_clock: default_true(),
            show_countdown: default_true(),
            motion: MotionConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Slide-motion animation settings. With `enabled = false` the track
/// translation is instantaneous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_motion_duration")]
    pub duration_ms: u64,
    /// Easing function
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while a slide animation runs
    #[serde(default = "default_motion_fps")]
    pub animation_fps: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_motion_duration(),
            easing: EasingType::default(),
            animation_fps: default_motion_fps(),
        }
    }
}

/// Easing curve applied to slide motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
}

/// Theme configuration
/// Accepted as a simple string (theme name) or a table with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (currently only "gruvbox-dark")
    pub name: String,
    /// Optional color overrides, hex strings
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a table
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides, each a hex string (e.g. "#ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (status bar)
    pub bg1: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Dimmed foreground
    pub fg1: Option<String>,
    /// Accent color (active dot, focused controls)
    pub accent: Option<String>,
    /// Inactive dot color
    pub dot_inactive: Option<String>,
    /// Error color
    pub error: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "n", "<Left>", "<Space>", "<C-p>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Advance to the next slide
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Step back to the previous slide
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Toggle manual pause
    #[serde(default = "default_key_toggle_pause")]
    pub toggle_pause: String,
    /// Open the active slide's link in the browser
    #[serde(default = "default_key_open_link")]
    pub open_link: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            prev: default_key_prev(),
            toggle_pause: default_key_toggle_pause(),
            open_link: default_key_open_link(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_prev() -> String { "h".to_string() }
fn default_key_toggle_pause() -> String { "<Space>".to_string() }
fn default_key_open_link() -> String { "o".to_string() }

fn default_deck_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("marquee")
        .join("deck.toml")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    4000
}

fn default_tick_rate() -> u64 {
    100
}

fn default_motion_duration() -> u64 {
    300
}

fn default_motion_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/marquee/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("marquee")
            .join("config.toml")
    }

    /// Get the default deck path (with tilde expansion)
    pub fn deck_path(&self) -> PathBuf {
        expand_tilde(&self.general.deck_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.interval_ms, 4000);
        assert!(config.carousel.autoplay);
        assert!(config.carousel.pause_on_hover);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.motion.easing, EasingType::Cubic);
    }

    #[test]
    fn test_theme_as_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "gruvbox-dark"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table_with_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "gruvbox-dark"

            [ui.theme.colors]
            accent = "#89b482"
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#89b482"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [carousel]
            interval_ms = 2500
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.interval_ms, 2500);
        assert!(config.carousel.autoplay);
        assert_eq!(config.keymap.quit, "q");
    }
}
