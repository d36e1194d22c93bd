use serde::{Deserialize, Serialize};

use crate::keymap::KeyMap;
use crate::layout::DefaultLayout;

/// Toolbar section of the application config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarSettings {
    #[serde(default)]
    pub layout: DefaultLayout,
    #[serde(default)]
    pub shortcuts: KeyMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::ShortcutId;

    #[test]
    fn test_empty_section_uses_defaults() {
        let settings: ToolbarSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ToolbarSettings::default());
        assert_eq!(settings.layout, DefaultLayout::Grouped);
    }

    #[test]
    fn test_full_section() {
        let settings: ToolbarSettings = serde_json::from_str(
            r#"{"layout": "flat", "shortcuts": {"mergeFragments": {"key": "Ctrl-M"}}}"#,
        )
        .unwrap();
        assert_eq!(settings.layout, DefaultLayout::Flat);
        assert_eq!(settings.shortcuts.display(ShortcutId::MergeFragments), "Ctrl-M");
    }
}
