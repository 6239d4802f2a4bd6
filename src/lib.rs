pub mod list_editor;
pub mod models;
pub mod services;
pub mod tui;
