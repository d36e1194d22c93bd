// Default arrangements of the toolbar fragments.
//
// A layout produces a `ToolbarView`, a plain tree the GUI walks to emit
// elements. Custom compositions may build views of their own.

use serde::{Deserialize, Serialize};

use crate::actions::ActionId;
use crate::icons::IconId;
use crate::models::{Fragment, FragmentSet};

pub const SNIPPET_MENU_LABEL: &str = "Copy code snippet";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultLayout {
    /// Prettify, merge and copy as buttons, snippet exports behind one menu.
    #[default]
    Grouped,
    /// All six fragments as standalone buttons.
    Flat,
}

/// An expandable menu: one trigger button revealing its items.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    pub label: String,
    pub icon: IconId,
    pub items: Vec<Fragment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarNode {
    Button(Fragment),
    Menu(MenuGroup),
    Separator,
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolbarView {
    nodes: Vec<ToolbarNode>,
}

impl From<Vec<ToolbarNode>> for ToolbarView {
    fn from(nodes: Vec<ToolbarNode>) -> Self {
        Self { nodes }
    }
}

impl ToolbarView {
    pub fn nodes(&self) -> &[ToolbarNode] {
        &self.nodes
    }

    /// Affordances a user can hit directly from the closed toolbar.
    pub fn top_level_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, ToolbarNode::Button(_) | ToolbarNode::Menu(_)))
            .count()
    }

    /// Every fragment in the view, menus expanded, in display order.
    pub fn fragments(&self) -> Vec<&Fragment> {
        let mut out = Vec::new();
        for node in &self.nodes {
            match node {
                ToolbarNode::Button(fragment) => out.push(fragment),
                ToolbarNode::Menu(menu) => out.extend(menu.items.iter()),
                ToolbarNode::Separator | ToolbarNode::Text(_) => {}
            }
        }
        out
    }

    pub fn find(&self, action: ActionId) -> Option<&Fragment> {
        self.fragments().into_iter().find(|f| f.action() == action)
    }

    pub fn reachable_actions(&self) -> Vec<ActionId> {
        self.fragments().iter().map(|f| f.action()).collect()
    }
}

pub fn default_layout(set: FragmentSet, layout: DefaultLayout) -> ToolbarView {
    let FragmentSet {
        prettify,
        merge,
        copy,
        copy_curl,
        copy_python,
        copy_nodejs,
    } = set;

    let mut nodes = vec![
        ToolbarNode::Button(prettify),
        ToolbarNode::Button(merge),
        ToolbarNode::Button(copy),
    ];
    match layout {
        DefaultLayout::Grouped => nodes.push(ToolbarNode::Menu(MenuGroup {
            label: SNIPPET_MENU_LABEL.to_string(),
            icon: IconId::CodeSnippet,
            items: vec![copy_curl, copy_python, copy_nodejs],
        })),
        DefaultLayout::Flat => nodes.extend(
            [copy_curl, copy_python, copy_nodejs]
                .into_iter()
                .map(ToolbarNode::Button),
        ),
    }
    ToolbarView { nodes }
}
