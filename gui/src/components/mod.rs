// GUI components module
pub mod icon;
pub mod toolbar;

pub use toolbar::GraphiqlToolbar;
