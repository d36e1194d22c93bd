use crate::actions::{ActionHandle, ActionId};
use crate::icons::IconId;

/// A labelled, clickable unit bound to exactly one action handle.
///
/// Fragments are rebuilt on every render and never change after construction,
/// so the fields are only reachable through getters.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    action: ActionId,
    label: String,
    icon: Option<IconId>,
    handle: ActionHandle,
}

impl Fragment {
    pub(crate) fn new(action: ActionId, label: String, handle: ActionHandle) -> Self {
        Self {
            action,
            label,
            icon: IconId::for_action(action),
            handle,
        }
    }

    pub fn action(&self) -> ActionId {
        self.action
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    /// Runs the bound action once.
    pub fn activate(&self) {
        tracing::debug!("Toolbar fragment activated: {}", self.action);
        self.handle.invoke();
    }
}

/// The six fragments of one render, one per `ActionId`.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSet {
    pub prettify: Fragment,
    pub merge: Fragment,
    pub copy: Fragment,
    pub copy_curl: Fragment,
    pub copy_python: Fragment,
    pub copy_nodejs: Fragment,
}

impl FragmentSet {
    pub fn get(&self, action: ActionId) -> &Fragment {
        match action {
            ActionId::Prettify => &self.prettify,
            ActionId::Merge => &self.merge,
            ActionId::Copy => &self.copy,
            ActionId::CopyCurl => &self.copy_curl,
            ActionId::CopyPython => &self.copy_python,
            ActionId::CopyNodejs => &self.copy_nodejs,
        }
    }

    /// Fragments in default display order.
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> + '_ {
        ActionId::ALL.into_iter().map(move |action| self.get(action))
    }
}
