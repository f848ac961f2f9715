//! Navigation settings resolved from the build environment.
//!
//! The web build has no runtime environment, so every value is captured with
//! `option_env!` when the crate is compiled.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const DEFAULT_NAV_TITLE: &str = "Gallery";

const NAV_HEIGHT_WITH_CAPTION: &str = "min-h-[4rem] sm:min-h-[5rem]";
const NAV_HEIGHT: &str = "min-h-[4rem]";

/// Process-wide configuration, resolved once and provided to the component
/// tree as context.
pub static NAV_CONFIG: Lazy<NavConfig> = Lazy::new(NavConfig::from_build_env);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// When set, the root path highlights the grid view instead of the feed.
    #[serde(default)]
    pub grid_homepage_enabled: bool,
    #[serde(default)]
    pub nav_caption: Option<String>,
    #[serde(default = "default_nav_title")]
    pub nav_title: String,
}

fn default_nav_title() -> String {
    DEFAULT_NAV_TITLE.to_string()
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            grid_homepage_enabled: false,
            nav_caption: None,
            nav_title: default_nav_title(),
        }
    }
}

impl NavConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("GALLERY_GRID_HOMEPAGE"),
            option_env!("GALLERY_NAV_CAPTION"),
            option_env!("GALLERY_NAV_TITLE"),
        )
    }

    pub fn from_values(grid_homepage: Option<&str>, caption: Option<&str>, title: Option<&str>) -> Self {
        Self {
            grid_homepage_enabled: grid_homepage.map(parse_flag).unwrap_or(false),
            nav_caption: caption.and_then(parse_text),
            nav_title: title
                .and_then(parse_text)
                .unwrap_or_else(default_nav_title),
        }
    }

    pub fn nav_height_class(&self) -> &'static str {
        if self.nav_caption.is_some() {
            NAV_HEIGHT_WITH_CAPTION
        } else {
            NAV_HEIGHT
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_feed_homepage_and_no_caption() {
        let config = NavConfig::default();
        assert!(!config.grid_homepage_enabled);
        assert_eq!(config.nav_caption, None);
        assert_eq!(config.nav_title, "Gallery");
    }

    #[test]
    fn test_flag_parsing() {
        for value in ["1", "true", "TRUE", " yes ", "On"] {
            assert!(parse_flag(value), "{value} should be true");
        }
        for value in ["", "0", "false", "no", "enabled"] {
            assert!(!parse_flag(value), "{value} should be false");
        }
    }

    #[test]
    fn test_blank_caption_is_hidden() {
        let config = NavConfig::from_values(Some("true"), Some("   "), None);
        assert!(config.grid_homepage_enabled);
        assert_eq!(config.nav_caption, None);
        assert_eq!(config.nav_height_class(), "min-h-[4rem]");
    }

    #[test]
    fn test_caption_grows_nav_height() {
        let config = NavConfig::from_values(None, Some(" photos & sounds "), Some("example.com"));
        assert_eq!(config.nav_caption.as_deref(), Some("photos & sounds"));
        assert_eq!(config.nav_title, "example.com");
        assert_eq!(config.nav_height_class(), "min-h-[4rem] sm:min-h-[5rem]");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: NavConfig =
            serde_json::from_str(r#"{"nav_caption": "film only"}"#).expect("valid config");
        assert!(!config.grid_homepage_enabled);
        assert_eq!(config.nav_caption.as_deref(), Some("film only"));
        assert_eq!(config.nav_title, "Gallery");
    }

    #[test]
    fn test_config_survives_serialization() {
        let config = NavConfig::from_values(Some("yes"), Some("caption"), Some("example.com"));
        let json = serde_json::to_string(&config).expect("serializable");
        let restored: NavConfig = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(restored, config);
    }
}
