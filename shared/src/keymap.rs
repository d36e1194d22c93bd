// Keyboard shortcut registry.
// The toolbar only reads display strings from here; the host decides how
// key presses are dispatched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShortcutId {
    Prettify,
    MergeFragments,
    CopyQuery,
}

/// A binding written as modifier names and a key joined by `-`,
/// e.g. `Shift-Ctrl-P`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
}

impl KeyBinding {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    /// Whether a key event with the given modifier state triggers this binding.
    /// Key names compare case-insensitively; modifiers must match exactly.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        let mut parts: Vec<&str> = self.key.split('-').collect();
        let Some(bound_key) = parts.pop() else {
            return false;
        };
        let (mut want_ctrl, mut want_shift, mut want_alt) = (false, false, false);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "cmd" | "mod" => want_ctrl = true,
                "shift" => want_shift = true,
                "alt" | "option" => want_alt = true,
                _ => return false,
            }
        }
        bound_key.eq_ignore_ascii_case(key)
            && want_ctrl == ctrl
            && want_shift == shift
            && want_alt == alt
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMap {
    #[serde(default = "default_prettify")]
    pub prettify: KeyBinding,
    #[serde(default = "default_merge_fragments")]
    pub merge_fragments: KeyBinding,
    #[serde(default = "default_copy_query")]
    pub copy_query: KeyBinding,
}

fn default_prettify() -> KeyBinding {
    KeyBinding::new("Shift-Ctrl-P")
}

fn default_merge_fragments() -> KeyBinding {
    KeyBinding::new("Shift-Ctrl-M")
}

fn default_copy_query() -> KeyBinding {
    KeyBinding::new("Shift-Ctrl-C")
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            prettify: default_prettify(),
            merge_fragments: default_merge_fragments(),
            copy_query: default_copy_query(),
        }
    }
}

impl KeyMap {
    pub fn binding(&self, id: ShortcutId) -> &KeyBinding {
        match id {
            ShortcutId::Prettify => &self.prettify,
            ShortcutId::MergeFragments => &self.merge_fragments,
            ShortcutId::CopyQuery => &self.copy_query,
        }
    }

    pub fn display(&self, id: ShortcutId) -> &str {
        &self.binding(id).key
    }

    /// First shortcut bound to the given key event, if any.
    pub fn lookup(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> Option<ShortcutId> {
        [ShortcutId::Prettify, ShortcutId::MergeFragments, ShortcutId::CopyQuery]
            .into_iter()
            .find(|id| self.binding(*id).matches(key, ctrl, shift, alt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.display(ShortcutId::Prettify), "Shift-Ctrl-P");
        assert_eq!(keymap.display(ShortcutId::MergeFragments), "Shift-Ctrl-M");
        assert_eq!(keymap.display(ShortcutId::CopyQuery), "Shift-Ctrl-C");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let keymap: KeyMap = serde_json::from_str(r#"{"copyQuery": {"key": "Alt-C"}}"#).unwrap();
        assert_eq!(keymap.display(ShortcutId::CopyQuery), "Alt-C");
        assert_eq!(keymap.display(ShortcutId::Prettify), "Shift-Ctrl-P");
    }

    #[test]
    fn test_binding_matches_modifiers_exactly() {
        let binding = KeyBinding::new("Shift-Ctrl-P");
        assert!(binding.matches("p", true, true, false));
        assert!(binding.matches("P", true, true, false));
        assert!(!binding.matches("p", true, false, false));
        assert!(!binding.matches("p", true, true, true));
        assert!(!binding.matches("m", true, true, false));
    }

    #[test]
    fn test_unknown_modifier_never_matches() {
        let binding = KeyBinding::new("Hyper-P");
        assert!(!binding.matches("p", false, false, false));
    }

    #[test]
    fn test_lookup() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.lookup("m", true, true, false), Some(ShortcutId::MergeFragments));
        assert_eq!(keymap.lookup("Enter", true, false, false), None);
    }
}
