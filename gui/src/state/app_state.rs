// Editor state owned by the host window.
// The toolbar never touches this directly; it only reaches it through the
// action handles built in `services::editor_actions`.

use shared::ActionId;

const DEFAULT_QUERY: &str = "query HeroNameAndFriends {\n  hero {\n    name\n    ...FriendFields\n  }\n}\n\nfragment FriendFields on Character {\n  friends {\n    name\n  }\n}\n";

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub query: String,
    // In-app clipboard buffer; system clipboard access is left to the platform.
    pub clipboard: Option<String>,
    pub history: Vec<ActionId>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            clipboard: None,
            history: Vec::new(),
        }
    }
}

impl EditorState {
    pub fn record(&mut self, action: ActionId) {
        self.history.push(action);
    }

    pub fn copy_query(&mut self) {
        self.clipboard = Some(self.query.clone());
        self.record(ActionId::Copy);
    }

    pub fn last_action(&self) -> Option<ActionId> {
        self.history.last().copied()
    }

    pub fn status_line(&self) -> String {
        match self.last_action() {
            None => "Ready".to_string(),
            Some(ActionId::Copy) => {
                let copied = self.clipboard.as_deref().map(str::len).unwrap_or(0);
                format!("Copied query ({} characters)", copied)
            }
            Some(action) => format!("Ran {}", action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_query_fills_clipboard() {
        let mut state = EditorState {
            query: "{ a }".to_string(),
            ..EditorState::default()
        };
        state.copy_query();
        assert_eq!(state.clipboard.as_deref(), Some("{ a }"));
        assert_eq!(state.last_action(), Some(ActionId::Copy));
        assert_eq!(state.status_line(), "Copied query (5 characters)");
    }

    #[test]
    fn test_status_line() {
        let mut state = EditorState::default();
        assert_eq!(state.status_line(), "Ready");
        state.record(ActionId::CopyCurl);
        assert_eq!(state.status_line(), "Ran copyCurl");
    }
}
