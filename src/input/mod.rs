//! Input Module
//!
//! Handles keyboard input for the login and welcome screens.

pub mod handler;
pub mod keymap;

// Re-exports
pub use handler::{InputHandler, KeyContext};
pub use keymap::Action;
