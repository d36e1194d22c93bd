// Action handles supplied by the host editor.
//
// The toolbar never implements an action. It only holds the handles long
// enough to bind them to fragments for one render pass.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::ToolbarError;
use crate::keymap::ShortcutId;

/// The six actions the toolbar exposes, in default display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionId {
    Prettify,
    Merge,
    Copy,
    CopyCurl,
    CopyPython,
    CopyNodejs,
}

impl ActionId {
    pub const ALL: [ActionId; 6] = [
        ActionId::Prettify,
        ActionId::Merge,
        ActionId::Copy,
        ActionId::CopyCurl,
        ActionId::CopyPython,
        ActionId::CopyNodejs,
    ];

    /// Key of the fragment slot handed to custom compositions.
    pub fn slot_name(self) -> &'static str {
        match self {
            ActionId::Prettify => "prettify",
            ActionId::Merge => "merge",
            ActionId::Copy => "copy",
            ActionId::CopyCurl => "copyCurl",
            ActionId::CopyPython => "copyPython",
            ActionId::CopyNodejs => "copyNodejs",
        }
    }

    /// Name of the handle in the host's action registry.
    pub fn registry_name(self) -> &'static str {
        match self {
            ActionId::Prettify => "prettifyEditors",
            ActionId::Merge => "mergeQuery",
            ActionId::Copy => "copyQuery",
            ActionId::CopyCurl => "copyCurl",
            ActionId::CopyPython => "copyPython",
            ActionId::CopyNodejs => "copyNodejs",
        }
    }

    /// Snippet exports are the actions the grouped layout tucks into a menu.
    pub fn is_snippet_export(self) -> bool {
        matches!(
            self,
            ActionId::CopyCurl | ActionId::CopyPython | ActionId::CopyNodejs
        )
    }
}

impl From<ShortcutId> for ActionId {
    fn from(shortcut: ShortcutId) -> Self {
        match shortcut {
            ShortcutId::Prettify => ActionId::Prettify,
            ShortcutId::MergeFragments => ActionId::Merge,
            ShortcutId::CopyQuery => ActionId::Copy,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.registry_name())
    }
}

/// Opaque zero-argument invocable owned by the host.
///
/// Clones share the same underlying closure; equality is identity of that
/// closure, which is what lets two renders with the same handles compare equal.
#[derive(Clone)]
pub struct ActionHandle(Rc<dyn Fn()>);

impl ActionHandle {
    pub fn new(action: impl Fn() + 'static) -> Self {
        Self(Rc::new(action))
    }

    pub fn invoke(&self) {
        (self.0)()
    }

    pub fn same_as(&self, other: &ActionHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ActionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl fmt::Debug for ActionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionHandle({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Every handle the toolbar needs. The struct is closed on purpose: adding an
/// action means adding a field here and a slot in `FragmentSet`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRegistry {
    pub copy_query: ActionHandle,
    pub prettify_editors: ActionHandle,
    pub merge_query: ActionHandle,
    pub copy_curl: ActionHandle,
    pub copy_python: ActionHandle,
    pub copy_nodejs: ActionHandle,
}

impl ActionRegistry {
    pub fn handle(&self, id: ActionId) -> &ActionHandle {
        match id {
            ActionId::Prettify => &self.prettify_editors,
            ActionId::Merge => &self.merge_query,
            ActionId::Copy => &self.copy_query,
            ActionId::CopyCurl => &self.copy_curl,
            ActionId::CopyPython => &self.copy_python,
            ActionId::CopyNodejs => &self.copy_nodejs,
        }
    }

    /// Fails if two actions are bound to the same closure.
    pub fn ensure_distinct(&self) -> Result<(), ToolbarError> {
        for (i, first) in ActionId::ALL.iter().enumerate() {
            for second in &ActionId::ALL[i + 1..] {
                if self.handle(*first).same_as(self.handle(*second)) {
                    return Err(ToolbarError::SharedActionHandle {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Source of the action handles for a render pass.
///
/// Hosts usually hand over an `ActionRegistry` directly; the trait exists so
/// the handles can be produced lazily and only when a render needs them.
pub trait ActionProvider {
    fn actions(&self) -> ActionRegistry;
}

impl ActionProvider for ActionRegistry {
    fn actions(&self) -> ActionRegistry {
        self.clone()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Registry whose handles append their slot name to `calls`.
    pub(crate) fn recording_registry(calls: Rc<RefCell<Vec<&'static str>>>) -> ActionRegistry {
        let record = |name: &'static str| {
            let calls = calls.clone();
            ActionHandle::new(move || calls.borrow_mut().push(name))
        };
        ActionRegistry {
            copy_query: record("copy"),
            prettify_editors: record("prettify"),
            merge_query: record("merge"),
            copy_curl: record("copyCurl"),
            copy_python: record("copyPython"),
            copy_nodejs: record("copyNodejs"),
        }
    }

    #[test]
    fn test_handle_lookup_matches_registry_fields() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(calls.clone());

        for id in ActionId::ALL {
            registry.handle(id).invoke();
        }

        assert_eq!(
            *calls.borrow(),
            vec!["prettify", "merge", "copy", "copyCurl", "copyPython", "copyNodejs"]
        );
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = ActionHandle::new(|| {});
        let b = ActionHandle::new(|| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_shared_handle_is_rejected() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = recording_registry(calls);
        assert!(registry.ensure_distinct().is_ok());

        registry.copy_python = registry.copy_curl.clone();
        assert_eq!(
            registry.ensure_distinct(),
            Err(ToolbarError::SharedActionHandle {
                first: ActionId::CopyCurl,
                second: ActionId::CopyPython,
            })
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(ActionId::Merge.slot_name(), "merge");
        assert_eq!(ActionId::Merge.registry_name(), "mergeQuery");
        assert_eq!(ActionId::Copy.to_string(), "copyQuery");
        assert!(ActionId::CopyNodejs.is_snippet_export());
        assert!(!ActionId::Prettify.is_snippet_export());
        assert_eq!(ActionId::from(ShortcutId::MergeFragments), ActionId::Merge);
    }
}
