use thiserror::Error;

use crate::actions::ActionId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolbarError {
    // Rendering the default or a custom layout without a host is a
    // programming error, not a degraded toolbar.
    #[error("Action registry unavailable: the toolbar must be rendered inside a host that provides editor actions")]
    MissingActionRegistry,

    #[error("Actions `{first}` and `{second}` are bound to the same handle")]
    SharedActionHandle { first: ActionId, second: ActionId },
}
