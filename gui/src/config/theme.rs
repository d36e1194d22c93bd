// Theme specific colors for the editor shell and toolbar.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub toolbar_background: String,
    pub button_hover: String,
    pub border: String,
    pub accent: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            toolbar_background: "#252526".to_string(),
            button_hover: "#3a3d41".to_string(),
            border: "#3c3c3c".to_string(),
            accent: "#e535ab".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#3b4b68".to_string(),
            toolbar_background: "#f7f7f7".to_string(),
            button_hover: "#e8e8e8".to_string(),
            border: "#dddddd".to_string(),
            accent: "#d60590".to_string(),
        }
    }

    /// Stylesheet injected once at the root of the window.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"
body {{ margin: 0; background: {bg}; color: {fg}; font-family: sans-serif; }}
.graphiql-shell {{ display: flex; height: 100vh; }}
.graphiql-editor {{ flex: 1; display: flex; flex-direction: column; }}
.graphiql-editor textarea {{ flex: 1; background: {bg}; color: {fg}; border: none; padding: 12px; font-family: monospace; font-size: 14px; resize: none; outline: none; }}
.graphiql-status {{ padding: 6px 12px; border-top: 1px solid {border}; font-size: 12px; }}
.graphiql-toolbar {{ display: flex; flex-direction: column; gap: 8px; padding: 8px; background: {toolbar}; border-left: 1px solid {border}; }}
.graphiql-toolbar-button {{ background: transparent; color: {fg}; border: none; border-radius: 4px; padding: 6px; cursor: pointer; }}
.graphiql-toolbar-button:hover {{ background: {hover}; }}
.graphiql-toolbar-icon {{ width: 24px; height: 24px; display: block; }}
.graphiql-toolbar-menu {{ position: relative; }}
.graphiql-toolbar-menu ul {{ position: absolute; right: 100%; top: 0; margin: 0; padding: 4px 0; list-style: none; background: {toolbar}; border: 1px solid {border}; border-radius: 4px; white-space: nowrap; }}
.graphiql-toolbar-menu li {{ padding: 6px 12px; cursor: pointer; }}
.graphiql-toolbar-menu li:hover {{ background: {hover}; color: {accent}; }}
.graphiql-toolbar-separator {{ border-top: 1px solid {border}; }}
"#,
            bg = self.background,
            fg = self.foreground,
            toolbar = self.toolbar_background,
            hover = self.button_hover,
            border = self.border,
            accent = self.accent,
        )
    }
}
