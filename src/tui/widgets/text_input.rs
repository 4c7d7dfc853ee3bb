//! Single-line text input with a character-indexed cursor.
//!
//! Shared by the search box and the table's name filter box.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::theme;

/// What a key press did to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The text changed.
    Edited,
    /// Only the cursor moved.
    Moved,
    /// The key is not an editing key.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, `0..=char_count`.
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map_or(self.value.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the char before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Apply an editing key.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> InputOutcome {
        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                if self.value.is_empty() {
                    InputOutcome::Moved
                } else {
                    self.clear();
                    InputOutcome::Edited
                }
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.insert(c);
                InputOutcome::Edited
            }
            (_, KeyCode::Backspace) => edited_if(self.backspace()),
            (_, KeyCode::Delete) => edited_if(self.delete()),
            (_, KeyCode::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
                InputOutcome::Moved
            }
            (_, KeyCode::Right) => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                InputOutcome::Moved
            }
            (_, KeyCode::Home) => {
                self.cursor = 0;
                InputOutcome::Moved
            }
            (_, KeyCode::End) => {
                self.cursor = self.char_count();
                InputOutcome::Moved
            }
            _ => InputOutcome::Ignored,
        }
    }

    /// Render as one line: placeholder when empty and unfocused, block
    /// cursor when focused.
    pub fn render_line(&self, placeholder: &str, focused: bool) -> Line<'static> {
        if !focused {
            return if self.value.is_empty() {
                Line::from(Span::styled(placeholder.to_string(), theme::dim()))
            } else {
                Line::from(Span::styled(self.value.clone(), Style::default().fg(theme::TEXT)))
            };
        }

        let split = self.byte_offset(self.cursor);
        let (before, rest) = self.value.split_at(split);
        let mut rest_chars = rest.chars();
        let under = rest_chars.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = rest_chars.collect();

        Line::from(vec![
            Span::styled(before.to_string(), Style::default().fg(theme::TEXT)),
            Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(after, Style::default().fg(theme::TEXT)),
        ])
    }
}

fn edited_if(changed: bool) -> InputOutcome {
    if changed {
        InputOutcome::Edited
    } else {
        InputOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_insert_and_cursor() {
        let input = typed("hi");
        assert_eq!(input.value(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("é★a");
        assert_eq!(input.cursor(), 3);
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(input.handle_key(KeyCode::Backspace, KeyModifiers::NONE), InputOutcome::Edited);
        assert_eq!(input.value(), "éa");
        input.insert('x');
        assert_eq!(input.value(), "éxa");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = typed("ab");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(input.handle_key(KeyCode::Backspace, KeyModifiers::NONE), InputOutcome::Moved);
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = typed("abc");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "bc");
        input.handle_key(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(input.handle_key(KeyCode::Delete, KeyModifiers::NONE), InputOutcome::Moved);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = typed("dusk");
        assert_eq!(
            input.handle_key(KeyCode::Char('u'), KeyModifiers::CONTROL),
            InputOutcome::Edited
        );
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_uppercase_with_shift() {
        let mut input = TextInput::new();
        input.handle_key(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(input.value(), "A");
    }

    #[test]
    fn test_navigation_keys_ignored_otherwise() {
        let mut input = TextInput::new();
        assert_eq!(input.handle_key(KeyCode::Esc, KeyModifiers::NONE), InputOutcome::Ignored);
        assert_eq!(input.handle_key(KeyCode::Enter, KeyModifiers::NONE), InputOutcome::Ignored);
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let input = TextInput::new();
        let line = input.render_line("Search characters...", false);
        assert_eq!(line.to_string(), "Search characters...");
    }

    #[test]
    fn test_render_focused_shows_cursor_cell() {
        let input = typed("ab");
        assert_eq!(input.render_line("", true).to_string(), "ab ");
    }
}
