#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::{ActionId, FragmentSet, ToolbarContent, ToolbarNode, ToolbarView};

use crate::components::toolbar::ToolbarNodes;
use crate::components::GraphiqlToolbar;
use crate::config::{AppConfig, ToolbarMode};
use crate::services::editor_actions::editor_actions;
use crate::state::app_state::EditorState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let mut state = use_signal(EditorState::default);

    // The toolbar reads both of these from context.
    let registry = use_context_provider(|| editor_actions(state));
    use_context_provider(|| config.toolbar.clone());

    let stylesheet = config.palette().stylesheet();
    let keymap = config.toolbar.shortcuts.clone();
    let content = toolbar_content(config.app.toolbar_mode);
    let query = state.read().query.clone();
    let status = state.read().status_line();

    let handle_keydown = move |evt: KeyboardEvent| {
        let Key::Character(key) = evt.key() else {
            return;
        };
        let modifiers = evt.modifiers();
        let ctrl = modifiers.ctrl() || modifiers.meta();
        if let Some(shortcut) = keymap.lookup(&key, ctrl, modifiers.shift(), modifiers.alt()) {
            tracing::debug!("Shortcut {:?} pressed", shortcut);
            registry.handle(ActionId::from(shortcut)).invoke();
        }
    };

    rsx! {
        style { "{stylesheet}" }
        div {
            class: "graphiql-shell",
            div {
                class: "graphiql-editor",
                textarea {
                    spellcheck: "false",
                    value: "{query}",
                    oninput: move |evt| state.write().query = evt.value(),
                    onkeydown: handle_keydown,
                }
                div { class: "graphiql-status", "{status}" }
            }
            GraphiqlToolbar { content }
        }
    }
}

fn toolbar_content(mode: ToolbarMode) -> ToolbarContent<Element> {
    match mode {
        ToolbarMode::Default => ToolbarContent::Default,
        ToolbarMode::Compact => ToolbarContent::custom(compact_toolbar),
        ToolbarMode::Static => ToolbarContent::PreRendered(rsx! {
            span { class: "graphiql-toolbar-text", "Read-only" }
        }),
    }
}

// Prettify and copy as icons, snippet exports as labelled buttons; merge is left out.
fn compact_toolbar(slots: FragmentSet) -> Element {
    let mut nodes = vec![
        ToolbarNode::Button(slots.prettify.clone()),
        ToolbarNode::Button(slots.copy.clone()),
        ToolbarNode::Separator,
    ];
    nodes.extend(
        slots
            .iter()
            .filter(|fragment| fragment.action().is_snippet_export())
            .cloned()
            .map(ToolbarNode::Button),
    );
    let view = ToolbarView::from(nodes);
    rsx! { ToolbarNodes { view } }
}
