// Builds the per-render fragment set from the host's action handles.

use crate::actions::{ActionId, ActionRegistry};
use crate::error::ToolbarError;
use crate::keymap::{KeyMap, ShortcutId};
use crate::models::{Fragment, FragmentSet};

pub struct SlotBuilder<'a> {
    keymap: &'a KeyMap,
}

impl<'a> SlotBuilder<'a> {
    pub fn new(keymap: &'a KeyMap) -> Self {
        Self { keymap }
    }

    /// Label shown (and announced) for an action. Key-bound actions carry
    /// their shortcut hint; snippet exports use static text.
    pub fn label(&self, action: ActionId) -> String {
        match action {
            ActionId::Prettify => format!(
                "Prettify query ({})",
                self.keymap.display(ShortcutId::Prettify)
            ),
            ActionId::Merge => format!(
                "Merge fragments into query ({})",
                self.keymap.display(ShortcutId::MergeFragments)
            ),
            ActionId::Copy => format!("Copy query ({})", self.keymap.display(ShortcutId::CopyQuery)),
            ActionId::CopyCurl => "Copy as cURL".to_string(),
            ActionId::CopyPython => "Copy as Python".to_string(),
            ActionId::CopyNodejs => "Copy as Node.js".to_string(),
        }
    }

    pub fn build(&self, registry: &ActionRegistry) -> Result<FragmentSet, ToolbarError> {
        registry.ensure_distinct()?;

        let fragment = |action: ActionId| {
            Fragment::new(action, self.label(action), registry.handle(action).clone())
        };

        Ok(FragmentSet {
            prettify: fragment(ActionId::Prettify),
            merge: fragment(ActionId::Merge),
            copy: fragment(ActionId::Copy),
            copy_curl: fragment(ActionId::CopyCurl),
            copy_python: fragment(ActionId::CopyPython),
            copy_nodejs: fragment(ActionId::CopyNodejs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::tests::recording_registry;
    use crate::icons::IconId;
    use crate::keymap::KeyBinding;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_labels_with_default_shortcuts() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let keymap = KeyMap::default();
        let set = SlotBuilder::new(&keymap).build(&recording_registry(calls)).unwrap();

        let labels: Vec<&str> = set.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Prettify query (Shift-Ctrl-P)",
                "Merge fragments into query (Shift-Ctrl-M)",
                "Copy query (Shift-Ctrl-C)",
                "Copy as cURL",
                "Copy as Python",
                "Copy as Node.js",
            ]
        );
    }

    #[test]
    fn test_labels_follow_configured_shortcuts() {
        let keymap = KeyMap {
            prettify: KeyBinding::new("Alt-F"),
            ..KeyMap::default()
        };
        let builder = SlotBuilder::new(&keymap);
        assert_eq!(builder.label(ActionId::Prettify), "Prettify query (Alt-F)");
        assert_eq!(builder.label(ActionId::CopyCurl), "Copy as cURL");
    }

    #[test]
    fn test_each_fragment_bound_to_its_own_handle() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(calls.clone());
        let set = SlotBuilder::new(&KeyMap::default()).build(&registry).unwrap();

        for action in ActionId::ALL {
            let fragment = set.get(action);
            assert_eq!(fragment.action(), action);
            assert_eq!(fragment.icon(), IconId::for_action(action));
            calls.borrow_mut().clear();
            fragment.activate();
            assert_eq!(*calls.borrow(), vec![action.slot_name()]);
        }
    }

    #[test]
    fn test_build_rejects_shared_handle() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = recording_registry(calls);
        registry.merge_query = registry.prettify_editors.clone();

        let err = SlotBuilder::new(&KeyMap::default()).build(&registry).unwrap_err();
        assert_eq!(
            err,
            ToolbarError::SharedActionHandle {
                first: ActionId::Prettify,
                second: ActionId::Merge,
            }
        );
    }
}
