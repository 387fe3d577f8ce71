//! UI Module
//!
//! Terminal user interface using ratatui.

pub mod components;
pub mod renderer;

// Re-exports
pub use components::{
    ActivityPopup, FloatingField, HelpBar, LoginView, LogsState, MessageType, StatusLine,
    SubmitButton, WelcomeView,
};
pub use renderer::{Renderer, UiState};
