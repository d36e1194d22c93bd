// GUI configuration module
pub mod theme;

use serde::Deserialize;
use shared::ToolbarSettings;

use self::theme::ThemePalette;

// Mirrors assets/config/default.json
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    #[serde(default)]
    pub toolbar: ToolbarSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub title: String,
    pub theme: String, // "dark" or "light"
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub toolbar_mode: ToolbarMode,
}

/// Which toolbar the host mounts next to the editor.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolbarMode {
    /// The library layout (grouped or flat, see `toolbar.layout`).
    #[default]
    Default,
    /// Host-composed: primary buttons plus the snippet exports as text buttons.
    Compact,
    /// Finished markup handed in by the host, no editor actions bound.
    Static,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        Self::from_json(include_str!("../../assets/config/default.json"))
    }

    pub fn from_json(config_str: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }

    pub fn palette(&self) -> ThemePalette {
        if self.app.theme.eq_ignore_ascii_case("light") {
            ThemePalette::default_light()
        } else {
            ThemePalette::default_dark()
        }
    }
}
