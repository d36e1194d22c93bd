// Toolbar model shared by the GUI and its tests.
// Nothing in here depends on a UI framework; the `gui` crate turns a
// `ToolbarView` into Dioxus elements.

pub mod actions;
pub mod error;
pub mod icons;
pub mod keymap;
pub mod layout;
pub mod models;
pub mod settings;
pub mod slots;
pub mod toolbar;

pub use actions::{ActionHandle, ActionId, ActionProvider, ActionRegistry};
pub use error::ToolbarError;
pub use layout::{default_layout, DefaultLayout, MenuGroup, ToolbarNode, ToolbarView};
pub use models::{Fragment, FragmentSet};
pub use settings::ToolbarSettings;
pub use toolbar::{render_toolbar, Composer, ToolbarContent};
