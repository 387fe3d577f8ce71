//! Login Form
//!
//! Identifier and secret fields aggregated into one submit-gated form.

use secrecy::SecretString;

use super::field::FormField;
use super::FieldStyle;

/// Form-level listener, called once per state-affecting operation
pub type StateListener = Box<dyn FnMut(FormChange)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Identifier,
    Secret,
}

impl FieldId {
    pub fn other(&self) -> Self {
        match self {
            Self::Identifier => Self::Secret,
            Self::Secret => Self::Identifier,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Secret => "secret",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    Field(FieldId),
    Reset,
}

/// Post-mutation notification handed to the form listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormChange {
    pub source: ChangeSource,
    pub submit_enabled: bool,
}

/// Values handed over by an accepted login action
#[derive(Debug)]
pub struct LoginCredentials {
    pub identifier: String,
    pub secret: SecretString,
}

/// Two-field login form.
///
/// All child mutations go through the form so the submit state and the
/// form listener stay in step with every change.
pub struct LoginForm {
    identifier: FormField,
    secret: FormField,
    on_state_changed: Option<StateListener>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(FieldStyle::Identifier, FieldStyle::Secret)
    }
}

impl LoginForm {
    pub fn new(identifier_style: FieldStyle, secret_style: FieldStyle) -> Self {
        Self {
            identifier: FormField::new(identifier_style),
            secret: FormField::new(secret_style),
            on_state_changed: None,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Identifier => &self.identifier,
            FieldId::Secret => &self.secret,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Identifier => &mut self.identifier,
            FieldId::Secret => &mut self.secret,
        }
    }

    pub fn current_identifier(&self) -> &str {
        self.identifier.value()
    }

    pub fn current_secret(&self) -> &str {
        self.secret.value()
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.identifier.value().is_empty() && !self.secret.value().is_empty()
    }

    pub fn focused(&self) -> Option<FieldId> {
        if self.identifier.is_focused() {
            Some(FieldId::Identifier)
        } else if self.secret.is_focused() {
            Some(FieldId::Secret)
        } else {
            None
        }
    }

    /// Register the form listener, discarding any previous one
    pub fn on_state_changed(&mut self, listener: impl FnMut(FormChange) + 'static) {
        self.on_state_changed = Some(Box::new(listener));
    }

    /// Register an external listener on one child field
    pub fn on_field_change(&mut self, id: FieldId, listener: impl FnMut(&str) + 'static) {
        self.field_mut(id).on_change(listener);
    }

    pub fn set_text(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).set_text(value);
        self.notify(ChangeSource::Field(id));
    }

    pub fn clear(&mut self, id: FieldId) {
        self.field_mut(id).clear();
        self.notify(ChangeSource::Field(id));
    }

    pub fn tap_clear_control(&mut self, id: FieldId) {
        let blurred = self.field_mut(id.other()).unfocus();
        let changed = self.field_mut(id).tap_clear_control();
        if blurred || changed {
            self.notify(ChangeSource::Field(id));
        }
    }

    pub fn insert_char(&mut self, id: FieldId, c: char) {
        self.field_mut(id).insert_char(c);
        self.notify(ChangeSource::Field(id));
    }

    pub fn delete_char(&mut self, id: FieldId) {
        self.edit(id, FormField::delete_char);
    }

    pub fn delete_char_forward(&mut self, id: FieldId) {
        self.edit(id, FormField::delete_char_forward);
    }

    pub fn cursor_left(&mut self, id: FieldId) {
        self.edit(id, FormField::cursor_left);
    }

    pub fn cursor_right(&mut self, id: FieldId) {
        self.edit(id, FormField::cursor_right);
    }

    pub fn cursor_home(&mut self, id: FieldId) {
        self.edit(id, FormField::cursor_home);
    }

    pub fn cursor_end(&mut self, id: FieldId) {
        self.edit(id, FormField::cursor_end);
    }

    /// Focus one field; the other one loses focus
    pub fn focus(&mut self, id: FieldId) {
        let blurred = self.field_mut(id.other()).unfocus();
        let focused = self.field_mut(id).focus();
        if blurred || focused {
            self.notify(ChangeSource::Field(id));
        }
    }

    pub fn unfocus(&mut self, id: FieldId) {
        self.edit(id, FormField::unfocus);
    }

    pub fn focus_next(&mut self) {
        let next = match self.focused() {
            None => FieldId::Identifier,
            Some(id) => id.other(),
        };
        self.focus(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focused() {
            None => FieldId::Secret,
            Some(id) => id.other(),
        };
        self.focus(prev);
    }

    /// Drop focus from whichever field holds it
    pub fn end_editing(&mut self) {
        if let Some(id) = self.focused() {
            self.unfocus(id);
        }
    }

    /// Ignored without notification on a plain field
    pub fn toggle_secure_visibility(&mut self, id: FieldId) {
        self.edit(id, FormField::toggle_secure_visibility);
    }

    /// Clear both fields and hide the secret again, with a single notification
    pub fn reset(&mut self) {
        self.identifier.clear();
        self.secret.clear();
        self.identifier.hide_secure();
        self.secret.hide_secure();
        self.notify(ChangeSource::Reset);
    }

    /// The login action. `None` while submit is disabled.
    pub fn submit(&self) -> Option<LoginCredentials> {
        if !self.is_submit_enabled() {
            return None;
        }
        Some(LoginCredentials {
            identifier: self.identifier.value().to_string(),
            secret: SecretString::from(self.secret.value().to_string()),
        })
    }

    fn edit(&mut self, id: FieldId, op: impl FnOnce(&mut FormField) -> bool) {
        if op(self.field_mut(id)) {
            self.notify(ChangeSource::Field(id));
        }
    }

    fn notify(&mut self, source: ChangeSource) {
        let change = FormChange {
            source,
            submit_enabled: self.is_submit_enabled(),
        };
        if let Some(listener) = self.on_state_changed.as_mut() {
            listener(change);
        }
    }
}
