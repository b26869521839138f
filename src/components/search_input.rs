//! Single-line search field that either owns its text or mirrors a value
//! owned by its caller.
//!
//! The ownership mode is chosen once, when the input is built: supplying a
//! `value` makes the input *controlled* (the caller decides what is shown
//! and is told about every edit), omitting it makes the input
//! *uncontrolled* (the input keeps its own text and may still notify a
//! listener). Nothing can switch the mode afterwards.

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_PLACEHOLDER: &str = "Search";

/// Receives every new text value, once per edit.
pub type OnChange = Box<dyn FnMut(&str) + Send>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchInputError {
    #[error("search input owns its text; an external value cannot be supplied")]
    NotControlled,
}

/// Construction options for a [`SearchInput`].
#[derive(Default)]
pub struct SearchInputProps {
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub on_change: Option<OnChange>,
}

impl SearchInputProps {
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn on_change(mut self, on_change: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// The input is the source of truth for its text.
    Uncontrolled { text: String },
    /// Last value supplied by the owner.
    Controlled { value: String },
}

pub struct SearchInput {
    placeholder: String,
    mode: Mode,
    on_change: Option<OnChange>,
    /// Byte offset into the displayed text. May run ahead of a controlled
    /// value until the owner echoes the edit back, so reads go through
    /// [`SearchInput::cursor`].
    cursor: usize,
}

impl SearchInput {
    pub fn new(props: SearchInputProps) -> Self {
        let mode = match props.value {
            Some(value) => Mode::Controlled { value },
            None => Mode::Uncontrolled {
                text: String::new(),
            },
        };
        let cursor = match &mode {
            Mode::Controlled { value } => value.len(),
            Mode::Uncontrolled { .. } => 0,
        };
        Self {
            placeholder: props
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            mode,
            on_change: props.on_change,
            cursor,
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Text currently displayed in the field.
    pub fn value(&self) -> &str {
        match &self.mode {
            Mode::Uncontrolled { text } => text,
            Mode::Controlled { value } => value,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, Mode::Controlled { .. })
    }

    /// Record an edit. An uncontrolled input adopts `new_text`; a controlled
    /// one keeps showing its supplied value. Either way the change callback,
    /// if any, sees `new_text` exactly once.
    pub fn handle_change(&mut self, new_text: &str) {
        if let Mode::Uncontrolled { text } = &mut self.mode {
            text.clear();
            text.push_str(new_text);
        }
        tracing::debug!(
            controlled = self.is_controlled(),
            len = new_text.len(),
            "search input changed"
        );
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(new_text);
        }
    }

    /// Supply a new value from the owner of a controlled input.
    pub fn set_value(&mut self, new_value: impl Into<String>) -> Result<(), SearchInputError> {
        match &mut self.mode {
            Mode::Controlled { value } => {
                *value = new_value.into();
                self.cursor = self.cursor();
                Ok(())
            }
            Mode::Uncontrolled { .. } => Err(SearchInputError::NotControlled),
        }
    }

    /// Cursor byte offset, clamped to the displayed text and snapped back to
    /// a char boundary.
    pub fn cursor(&self) -> usize {
        let value = self.value();
        let mut pos = self.cursor.min(value.len());
        while !value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    /// Terminal column of the cursor relative to the start of the text.
    pub fn cursor_column(&self) -> usize {
        self.value()[..self.cursor()].width()
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor();
        let mut text = self.value().to_string();
        text.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
        self.handle_change(&text);
    }

    pub fn delete_back(&mut self) {
        let cursor = self.cursor();
        if cursor == 0 {
            return;
        }
        let mut text = self.value().to_string();
        let prev = text[..cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        text.drain(prev..cursor);
        self.cursor = prev;
        self.handle_change(&text);
    }

    pub fn delete_forward(&mut self) {
        let cursor = self.cursor();
        let mut text = self.value().to_string();
        if cursor >= text.len() {
            return;
        }
        let next = text[cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| cursor + i)
            .unwrap_or(text.len());
        text.drain(cursor..next);
        self.cursor = cursor;
        self.handle_change(&text);
    }

    pub fn delete_word_back(&mut self) {
        let cursor = self.cursor();
        if cursor == 0 {
            return;
        }
        let mut text = self.value().to_string();
        let head = &text[..cursor];
        let trimmed = head.trim_end_matches(' ');
        let start = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
        text.drain(start..cursor);
        self.cursor = start;
        self.handle_change(&text);
    }

    pub fn clear(&mut self) {
        if self.value().is_empty() {
            return;
        }
        self.cursor = 0;
        self.handle_change("");
    }

    pub fn move_left(&mut self) {
        let cursor = self.cursor();
        self.cursor = self.value()[..cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub fn move_right(&mut self) {
        let cursor = self.cursor();
        let value = self.value();
        self.cursor = value[cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| cursor + i)
            .unwrap_or(value.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value().len();
    }
}

impl std::fmt::Debug for SearchInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchInput")
            .field("placeholder", &self.placeholder)
            .field("mode", &self.mode)
            .field("has_on_change", &self.on_change.is_some())
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(&str) + Send + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |text: &str| {
            sink.lock().unwrap().push(text.to_string());
        })
    }

    #[test]
    fn test_default_placeholder_and_empty_value() {
        let input = SearchInput::new(SearchInputProps::default());
        assert_eq!(input.placeholder(), "Search");
        assert_eq!(input.value(), "");
        assert!(!input.is_controlled());
    }

    #[test]
    fn test_custom_placeholder() {
        let input = SearchInput::new(SearchInputProps::default().placeholder("Custom search"));
        assert_eq!(input.placeholder(), "Custom search");
    }

    #[test]
    fn test_uncontrolled_adopts_edit() {
        let mut input = SearchInput::new(SearchInputProps::default());
        for s in ["test", "", "Brisbane 4000", "Café ☕"] {
            input.handle_change(s);
            assert_eq!(input.value(), s);
        }
    }

    #[test]
    fn test_uncontrolled_still_notifies() {
        let (calls, on_change) = recorder();
        let mut input = SearchInput::new(SearchInputProps::default().on_change(on_change));
        input.handle_change("a");
        input.handle_change("a");
        assert_eq!(input.value(), "a");
        assert_eq!(*calls.lock().unwrap(), vec!["a", "a"]);
    }

    #[test]
    fn test_controlled_keeps_supplied_value() {
        let (calls, on_change) = recorder();
        let mut input = SearchInput::new(
            SearchInputProps::default()
                .value("controlled")
                .on_change(on_change),
        );
        assert!(input.is_controlled());
        assert_eq!(input.value(), "controlled");

        input.handle_change("new value");
        assert_eq!(input.value(), "controlled");
        assert_eq!(*calls.lock().unwrap(), vec!["new value"]);
    }

    #[test]
    fn test_controlled_empty_value_is_still_controlled() {
        let mut input = SearchInput::new(SearchInputProps::default().value(""));
        assert!(input.is_controlled());
        input.insert_char('x');
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_controlled_follows_owner() {
        let (calls, on_change) = recorder();
        let mut input =
            SearchInput::new(SearchInputProps::default().value("").on_change(on_change));
        input.insert_char('s');
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);

        let latest = calls.lock().unwrap().last().cloned().unwrap();
        input.set_value(latest).unwrap();
        assert_eq!(input.value(), "s");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_set_value_rejected_when_uncontrolled() {
        let mut input = SearchInput::new(SearchInputProps::default());
        input.handle_change("mine");
        assert_eq!(
            input.set_value("theirs"),
            Err(SearchInputError::NotControlled)
        );
        assert_eq!(input.value(), "mine");
    }

    #[test]
    fn test_editing_keys() {
        let mut input = SearchInput::new(SearchInputProps::default());
        for c in "sydny".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.insert_char('e');
        assert_eq!(input.value(), "sydney");
        assert_eq!(input.cursor(), 5);

        input.move_end();
        input.delete_back();
        assert_eq!(input.value(), "sydne");

        input.move_home();
        input.delete_forward();
        assert_eq!(input.value(), "ydne");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = SearchInput::new(SearchInputProps::default());
        input.handle_change("houses in sydney  ");
        input.move_end();
        input.delete_word_back();
        assert_eq!(input.value(), "houses in ");
        input.delete_word_back();
        assert_eq!(input.value(), "houses ");
    }

    #[test]
    fn test_clear_notifies_once() {
        let (calls, on_change) = recorder();
        let mut input = SearchInput::new(SearchInputProps::default().on_change(on_change));
        input.clear();
        assert!(calls.lock().unwrap().is_empty());
        input.insert_char('a');
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(*calls.lock().unwrap(), vec!["a", ""]);
    }

    #[test]
    fn test_multibyte_cursor_stays_on_boundary() {
        let mut input = SearchInput::new(SearchInputProps::default());
        input.insert_char('é');
        input.insert_char('中');
        assert_eq!(input.value(), "é中");
        assert_eq!(input.cursor(), "é中".len());
        assert_eq!(input.cursor_column(), 3);

        input.move_left();
        assert_eq!(input.cursor(), 'é'.len_utf8());
        input.delete_back();
        assert_eq!(input.value(), "中");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamped_after_owner_shrinks_value() {
        let mut input = SearchInput::new(SearchInputProps::default().value("melbourne"));
        assert_eq!(input.cursor(), 9);
        input.set_value("mel").unwrap();
        assert_eq!(input.cursor(), 3);
        input.set_value("ü").unwrap();
        assert!(input.value().is_char_boundary(input.cursor()));
    }
}
