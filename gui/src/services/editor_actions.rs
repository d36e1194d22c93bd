// Host-side action implementations.
//
// Every handle closes over the editor signal rather than a snapshot, so the
// registry can be provided once and still act on the current query.

use dioxus::prelude::*;
use shared::{ActionHandle, ActionId, ActionRegistry};

use crate::state::app_state::EditorState;

pub fn editor_actions(state: Signal<EditorState>) -> ActionRegistry {
    let record = move |action: ActionId| {
        ActionHandle::new(move || {
            let mut state = state;
            tracing::info!("[EDITOR ACTION] {}", action);
            state.write().record(action);
        })
    };

    ActionRegistry {
        copy_query: ActionHandle::new(move || {
            let mut state = state;
            state.write().copy_query();
            tracing::info!("[EDITOR ACTION] {}: copied query to clipboard buffer", ActionId::Copy);
        }),
        prettify_editors: record(ActionId::Prettify),
        merge_query: record(ActionId::Merge),
        copy_curl: record(ActionId::CopyCurl),
        copy_python: record(ActionId::CopyPython),
        copy_nodejs: record(ActionId::CopyNodejs),
    }
}
