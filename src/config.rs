use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// RGB color values
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Theme color palette
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Muted/secondary text color
    pub muted: Rgb,
    /// Folder tiles and links
    pub accent: Rgb,
    /// Positive counts and confirmations
    pub success: Rgb,
    /// Page markers and highlights
    pub warning: Rgb,
    /// Error feedback
    pub error: Rgb,
    /// Dates, badges and secondary highlights
    pub info: Rgb,
}

impl Default for ThemeColors {
    fn default() -> Self {
        // Default theme - readable on most terminals
        Self {
            muted: Rgb::new(140, 140, 140),
            accent: Rgb::new(147, 197, 253),
            success: Rgb::new(134, 239, 172),
            warning: Rgb::new(253, 224, 71),
            error: Rgb::new(252, 129, 129),
            info: Rgb::new(216, 180, 254),
        }
    }
}

impl ThemeColors {
    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            muted: Rgb::new(166, 173, 200),
            accent: Rgb::new(137, 180, 250),
            success: Rgb::new(166, 227, 161),
            warning: Rgb::new(249, 226, 175),
            error: Rgb::new(243, 139, 168),
            info: Rgb::new(203, 166, 247),
        }
    }

    /// Catppuccin Latte theme (light theme)
    pub fn catppuccin_latte() -> Self {
        Self {
            muted: Rgb::new(108, 111, 133),
            accent: Rgb::new(30, 102, 245),
            success: Rgb::new(64, 160, 43),
            warning: Rgb::new(223, 142, 29),
            error: Rgb::new(210, 15, 57),
            info: Rgb::new(136, 57, 239),
        }
    }

    /// High contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            muted: Rgb::new(200, 200, 200),
            accent: Rgb::new(0, 255, 255),
            success: Rgb::new(0, 255, 0),
            warning: Rgb::new(255, 255, 0),
            error: Rgb::new(255, 0, 0),
            info: Rgb::new(255, 0, 255),
        }
    }

    /// Get theme by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace(['-', '_', ' '], "") {
            s if s == "default" => Some(Self::default()),
            s if s == "catppuccinmocha" => Some(Self::catppuccin_mocha()),
            s if s == "catppuccinlatte" => Some(Self::catppuccin_latte()),
            s if s == "highcontrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}

/// Theme configuration - either a preset name or custom colors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeConfig {
    /// Preset theme name
    Preset(String),
    /// Custom color configuration
    Custom(ThemeColors),
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig::Preset("default".to_string())
    }
}

impl ThemeConfig {
    /// Resolve to actual theme colors
    pub fn resolve(&self) -> ThemeColors {
        match self {
            ThemeConfig::Preset(name) => ThemeColors::from_name(name).unwrap_or_default(),
            ThemeConfig::Custom(colors) => colors.clone(),
        }
    }
}

/// Configuration settings for schoolbook
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_content_directory")]
    pub content_directory: String,

    /// Show per-folder item counts in CLI output
    #[serde(default = "default_true")]
    pub display_item_counts: bool,

    /// Show the latest-news panel above the profile page
    #[serde(default = "default_true")]
    pub display_home_news: bool,

    #[serde(default)]
    pub theme: ThemeConfig,
}

fn default_content_directory() -> String {
    "~".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_directory: default_content_directory(),
            display_item_counts: true,
            display_home_news: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.schoolbook.json)
    fn config_file_path() -> PathBuf {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".schoolbook.json")
    }

    /// Load configuration from file, merging with defaults. A missing file
    /// is the default configuration, not an error.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"contentDirectory":"/srv/school"}"#).unwrap();
        assert_eq!(config.content_directory, "/srv/school");
        assert!(config.display_item_counts);
        assert!(config.display_home_news);
    }

    #[test]
    fn test_theme_preset_resolves_by_name() {
        let config: Config = serde_json::from_str(r#"{"theme":"catppuccin-mocha"}"#).unwrap();
        let colors = config.theme.resolve();
        assert_eq!(colors.accent.r, 137);
    }

    #[test]
    fn test_unknown_preset_falls_back_to_default() {
        let config: Config = serde_json::from_str(r#"{"theme":"neon-zebra"}"#).unwrap();
        let colors = config.theme.resolve();
        assert_eq!(colors.muted.r, 140);
    }

    #[test]
    fn test_custom_theme_colors() {
        let config: Config = serde_json::from_str(
            r#"{"theme":{"muted":{"r":1,"g":2,"b":3},"accent":{"r":4,"g":5,"b":6},
                "success":{"r":7,"g":8,"b":9},"warning":{"r":10,"g":11,"b":12},
                "error":{"r":13,"g":14,"b":15},"info":{"r":16,"g":17,"b":18}}}"#,
        )
        .unwrap();
        let colors = config.theme.resolve();
        assert_eq!(colors.error.b, 15);
    }
}
