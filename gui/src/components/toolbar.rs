// Toolbar component for the query editor.
//
// The host chooses what the toolbar shows through `content`:
// the library layout, its own composition of the fragments, or finished markup.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::{
    default_layout, render_toolbar, ActionProvider, ActionRegistry, Fragment, MenuGroup,
    ToolbarContent, ToolbarNode, ToolbarSettings, ToolbarView,
};

use super::icon::Icon;

/// Mount inside a host that provides an `ActionRegistry` context.
/// `ToolbarSettings` context is optional and falls back to the defaults.
#[component]
pub fn GraphiqlToolbar(#[props(default)] content: ToolbarContent<Element>) -> Element {
    let registry = try_use_context::<ActionRegistry>();
    let settings = try_use_context::<ToolbarSettings>().unwrap_or_default();
    let layout = settings.layout;

    let rendered = render_toolbar(
        &content,
        registry.as_ref().map(|r| r as &dyn ActionProvider),
        &settings.shortcuts,
        |fragments| {
            let view = default_layout(fragments, layout);
            rsx! { ToolbarNodes { view } }
        },
    );

    match rendered {
        Ok(body) => rsx! {
            div {
                class: "graphiql-toolbar",
                role: "toolbar",
                aria_label: "Editor Commands",
                {body}
            }
        },
        Err(err) => {
            tracing::error!("Cannot render toolbar: {}", err);
            panic!("Cannot render toolbar: {}", err);
        }
    }
}

/// Emits a `ToolbarView`. Also usable from custom compositions that build
/// their own views.
#[component]
pub fn ToolbarNodes(view: ToolbarView) -> Element {
    rsx! {
        {view.nodes().iter().cloned().map(render_node)}
    }
}

fn render_node(node: ToolbarNode) -> Element {
    match node {
        ToolbarNode::Button(fragment) => rsx! { ToolbarButton { fragment } },
        ToolbarNode::Menu(menu) => rsx! { ToolbarMenu { menu } },
        ToolbarNode::Separator => rsx! { div { class: "graphiql-toolbar-separator" } },
        ToolbarNode::Text(text) => rsx! { span { class: "graphiql-toolbar-text", "{text}" } },
    }
}

#[component]
pub fn ToolbarButton(fragment: Fragment) -> Element {
    let label = fragment.label().to_string();
    let body = match fragment.icon() {
        Some(icon) => rsx! { Icon { icon } },
        None => rsx! { "{label}" },
    };

    rsx! {
        button {
            class: "graphiql-toolbar-button",
            r#type: "button",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| fragment.activate(),
            {body}
        }
    }
}

#[component]
pub fn ToolbarMenu(menu: MenuGroup) -> Element {
    let mut open = use_signal(|| false);
    let is_open = *open.read();
    let items = menu.items.clone();

    rsx! {
        div {
            class: "graphiql-toolbar-menu",
            button {
                class: "graphiql-toolbar-button",
                r#type: "button",
                title: "{menu.label}",
                aria_label: "{menu.label}",
                aria_haspopup: "menu",
                aria_expanded: "{is_open}",
                onclick: move |_| open.set(!is_open),
                Icon { icon: menu.icon }
            }
            if is_open {
                ul {
                    role: "menu",
                    {items.into_iter().map(|item| rsx! { ToolbarMenuItem { item, open } })}
                }
            }
        }
    }
}

#[component]
fn ToolbarMenuItem(item: Fragment, open: Signal<bool>) -> Element {
    let label = item.label().to_string();
    rsx! {
        li {
            role: "menuitem",
            onclick: move |_| {
                let mut open = open;
                open.set(false);
                item.activate();
            },
            "{label}"
        }
    }
}
