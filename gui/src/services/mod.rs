pub mod editor_actions;
