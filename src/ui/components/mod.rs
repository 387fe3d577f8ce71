//! UI Components
//!
//! TUI widgets for the login flow.

pub mod field;
pub mod login;
pub mod popup;
pub mod statusline;
pub mod welcome;

// Re-exports
pub use field::FloatingField;
pub use login::{LoginView, SubmitButton};
pub use popup::{centered_rect_fixed, ActivityPopup, LogsState};
pub use statusline::{HelpBar, MessageType, StatusLine};
pub use welcome::WelcomeView;
