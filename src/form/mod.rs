//! Form Module
//!
//! Field and form state for the login flow, decoupled from rendering.

pub mod field;
pub mod login;
pub mod reset;

/// Entry style of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    /// Plain identifier entry (email or account id)
    Identifier,
    /// Secret entry, masked unless revealed
    Secret,
}

impl FieldStyle {
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::Secret)
    }
}

// Re-exports
pub use field::{FieldPhase, FormField};
pub use login::{ChangeSource, FieldId, FormChange, LoginCredentials, LoginForm};
pub use reset::{ResetLink, ResetOutcome, ResetSignal};
