//! Floating Field
//!
//! Text, focus and secure-visibility state of one input field.

use std::fmt;

use zeroize::Zeroize;

use super::FieldStyle;

/// Single-slot change listener, called with the resulting value
pub type ChangeListener = Box<dyn FnMut(&str)>;

/// Discrete field state, derived from focus and emptiness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    BlurredEmpty,
    BlurredFilled,
    FocusedEmpty,
    FocusedFilled,
}

/// One input field: value, cursor, focus and secure visibility.
///
/// Every operation is total. Value changes notify the registered
/// listener synchronously, after the new state is in place.
pub struct FormField {
    style: FieldStyle,
    value: String,
    /// Cursor position in chars
    cursor: usize,
    focused: bool,
    secure_visible: bool,
    on_change: Option<ChangeListener>,
}

impl FormField {
    pub fn new(style: FieldStyle) -> Self {
        Self {
            style,
            value: String::new(),
            cursor: 0,
            focused: false,
            secure_visible: false,
            on_change: None,
        }
    }

    pub fn identifier() -> Self {
        Self::new(FieldStyle::Identifier)
    }

    pub fn secret() -> Self {
        Self::new(FieldStyle::Secret)
    }

    pub fn style(&self) -> FieldStyle {
        self.style
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_secure(&self) -> bool {
        self.style.is_secure()
    }

    /// Whether raw characters of a secret field are shown. Always false for plain fields.
    pub fn secure_visible(&self) -> bool {
        self.is_secure() && self.secure_visible
    }

    pub fn should_float_label(&self) -> bool {
        self.focused || !self.value.is_empty()
    }

    pub fn show_clear_control(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn masks_input(&self) -> bool {
        self.is_secure() && !self.secure_visible
    }

    pub fn phase(&self) -> FieldPhase {
        match (self.focused, self.value.is_empty()) {
            (false, true) => FieldPhase::BlurredEmpty,
            (false, false) => FieldPhase::BlurredFilled,
            (true, true) => FieldPhase::FocusedEmpty,
            (true, false) => FieldPhase::FocusedFilled,
        }
    }

    /// Value as it should be painted: one mask glyph per char when masked
    pub fn display_value(&self, mask: char) -> String {
        if self.masks_input() {
            std::iter::repeat_n(mask, self.char_len()).collect()
        } else {
            self.value.clone()
        }
    }

    /// Register the change listener, discarding any previous one
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    pub fn set_text(&mut self, new_value: impl Into<String>) {
        self.scrub();
        self.value = new_value.into();
        self.cursor = self.char_len();
        self.notify();
    }

    /// Empty the value and drop focus. Idempotent.
    pub fn clear(&mut self) {
        self.scrub();
        self.cursor = 0;
        self.focused = false;
        self.notify();
    }

    /// Inline clear button: empties the value but keeps the field focused.
    ///
    /// The control is hidden on an empty field, so tapping it there only
    /// focuses. Returns true if the value or focus changed.
    pub fn tap_clear_control(&mut self) -> bool {
        let focused = self.focus();
        if self.value.is_empty() {
            return focused;
        }
        self.scrub();
        self.cursor = 0;
        self.notify();
        true
    }

    /// Returns true if focus changed
    pub fn focus(&mut self) -> bool {
        !std::mem::replace(&mut self.focused, true)
    }

    /// Returns true if focus changed. The value is kept.
    pub fn unfocus(&mut self) -> bool {
        std::mem::replace(&mut self.focused, false)
    }

    /// Flip raw-character visibility on a secret field.
    ///
    /// Plain fields ignore the call and report false.
    pub fn toggle_secure_visibility(&mut self) -> bool {
        if !self.is_secure() {
            return false;
        }
        self.secure_visible = !self.secure_visible;
        true
    }

    pub fn hide_secure(&mut self) {
        self.secure_visible = false;
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        self.notify();
    }

    /// Backspace. Returns true if a char was removed.
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        self.notify();
        true
    }

    /// Delete key. Returns true if a char was removed.
    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        self.notify();
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn cursor_home(&mut self) -> bool {
        std::mem::replace(&mut self.cursor, 0) != 0
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.char_len();
        std::mem::replace(&mut self.cursor, end) != end
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn scrub(&mut self) {
        if self.is_secure() {
            self.value.zeroize();
        } else {
            self.value.clear();
        }
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.value);
        }
    }
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Debug = if self.is_secure() { &"<redacted>" } else { &self.value };
        f.debug_struct("FormField")
            .field("style", &self.style)
            .field("value", value)
            .field("cursor", &self.cursor)
            .field("focused", &self.focused)
            .field("secure_visible", &self.secure_visible)
            .finish()
    }
}

impl Drop for FormField {
    fn drop(&mut self) {
        self.scrub();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(field: &mut FormField) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        field.on_change(move |v| sink.borrow_mut().push(v.to_string()));
        seen
    }

    #[test]
    fn test_set_text_reads_back_exactly() {
        let mut field = FormField::identifier();
        for s in ["", "a@b.com", "  spaced  ", "한글 아이디", "emoji 🦀"] {
            field.set_text(s);
            assert_eq!(field.value(), s);
            assert_eq!(field.cursor(), s.chars().count());
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut field = FormField::secret();
        field.focus();
        field.set_text("hunter2");

        field.clear();
        assert_eq!(field.value(), "");
        assert!(!field.is_focused());

        field.clear();
        assert_eq!(field.value(), "");
        assert!(!field.is_focused());
        assert_eq!(field.phase(), FieldPhase::BlurredEmpty);
    }

    #[test]
    fn test_float_label_across_focus_and_emptiness() {
        let mut field = FormField::identifier();
        assert!(!field.should_float_label());
        assert_eq!(field.phase(), FieldPhase::BlurredEmpty);

        field.focus();
        assert!(field.should_float_label());
        assert_eq!(field.phase(), FieldPhase::FocusedEmpty);

        field.set_text("x");
        assert!(field.should_float_label());
        assert_eq!(field.phase(), FieldPhase::FocusedFilled);

        field.unfocus();
        assert!(field.should_float_label());
        assert_eq!(field.phase(), FieldPhase::BlurredFilled);
        assert_eq!(field.value(), "x");
    }

    #[test]
    fn test_clear_control_visibility() {
        let mut field = FormField::identifier();
        assert!(!field.show_clear_control());
        field.set_text("a");
        assert!(field.show_clear_control());
        field.set_text("");
        assert!(!field.show_clear_control());
    }

    #[test]
    fn test_listener_fires_on_set_and_clear() {
        let mut field = FormField::identifier();
        let seen = recorder(&mut field);

        field.set_text("abc");
        field.set_text("abc");
        field.clear();

        assert_eq!(*seen.borrow(), vec!["abc", "abc", ""]);
    }

    #[test]
    fn test_listener_replacement_discards_previous() {
        let mut field = FormField::identifier();
        let first = recorder(&mut field);
        let second = recorder(&mut field);

        field.set_text("z");

        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec!["z"]);
    }

    #[test]
    fn test_toggle_on_plain_field_is_ignored() {
        let mut field = FormField::identifier();
        field.set_text("visible");
        let seen = recorder(&mut field);

        assert!(!field.toggle_secure_visibility());
        assert!(!field.secure_visible());
        assert!(!field.masks_input());
        assert_eq!(field.value(), "visible");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_toggle_secret_visibility() {
        let mut field = FormField::secret();
        field.set_text("pw");
        assert!(field.masks_input());
        assert_eq!(field.display_value('•'), "••");

        assert!(field.toggle_secure_visibility());
        assert!(field.secure_visible());
        assert_eq!(field.display_value('•'), "pw");

        assert!(field.toggle_secure_visibility());
        assert!(!field.secure_visible());
    }

    #[test]
    fn test_tap_clear_control_keeps_focus() {
        let mut field = FormField::identifier();
        field.set_text("abc");
        let seen = recorder(&mut field);

        assert!(field.tap_clear_control());

        assert_eq!(field.value(), "");
        assert!(field.is_focused());
        assert_eq!(*seen.borrow(), vec![""]);
    }

    #[test]
    fn test_tap_clear_control_on_empty_field_only_focuses() {
        let mut field = FormField::identifier();
        let seen = recorder(&mut field);

        assert!(field.tap_clear_control());
        assert!(field.is_focused());

        assert!(!field.tap_clear_control());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_cursor_editing_on_multibyte_text() {
        let mut field = FormField::identifier();
        field.set_text("가나");
        field.cursor_left();
        field.insert_char('x');
        assert_eq!(field.value(), "가x나");
        assert_eq!(field.cursor(), 2);

        assert!(field.delete_char());
        assert_eq!(field.value(), "가나");

        field.cursor_home();
        assert!(!field.delete_char());
        assert!(field.delete_char_forward());
        assert_eq!(field.value(), "나");

        field.cursor_end();
        assert!(!field.delete_char_forward());
        assert!(!field.cursor_right());
    }

    #[test]
    fn test_cursor_moves_do_not_notify() {
        let mut field = FormField::identifier();
        field.set_text("ab");
        let seen = recorder(&mut field);

        field.cursor_left();
        field.cursor_home();
        field.cursor_end();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let mut field = FormField::secret();
        field.set_text("top-secret");
        let printed = format!("{:?}", field);
        assert!(!printed.contains("top-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
