use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MASK_CHAR: char = '•';
const CURSOR_CHAR: char = '█';

/// A single-line text input with cursor support
///
/// This widget provides:
/// - Character-by-character input handling
/// - Maximum length enforcement (in characters)
/// - Cursor position tracking
/// - Optional masking for secrets
/// - Visual feedback for focus state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    /// Current input value
    pub value: String,

    /// Placeholder text shown when empty
    pub placeholder: String,

    /// Maximum allowed length (None = unlimited)
    pub max_length: Option<usize>,

    /// Cursor position, counted in characters
    pub cursor_pos: usize,

    /// Render every character as a bullet
    pub masked: bool,

    pub is_focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Set the initial value, placing the cursor at the end
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_pos = self.char_len();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the given character position
    fn byte_offset(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Handle keyboard input
    ///
    /// Returns true if the value or cursor changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                if self.max_length.map_or(true, |max| self.char_len() < max) {
                    let at = self.byte_offset(self.cursor_pos);
                    self.value.insert(at, c);
                    self.cursor_pos += 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                let at = self.byte_offset(self.cursor_pos - 1);
                self.value.remove(at);
                self.cursor_pos -= 1;
                true
            }
            KeyCode::Delete if self.cursor_pos < self.char_len() => {
                let at = self.byte_offset(self.cursor_pos);
                self.value.remove(at);
                true
            }
            KeyCode::Left if self.cursor_pos > 0 => {
                self.cursor_pos -= 1;
                true
            }
            KeyCode::Right if self.cursor_pos < self.char_len() => {
                self.cursor_pos += 1;
                true
            }
            KeyCode::Home if self.cursor_pos > 0 => {
                self.cursor_pos = 0;
                true
            }
            KeyCode::End if self.cursor_pos < self.char_len() => {
                self.cursor_pos = self.char_len();
                true
            }
            _ => false,
        }
    }

    /// Text as it should appear on screen, without the cursor
    pub fn display_value(&self) -> String {
        if self.masked {
            std::iter::repeat(MASK_CHAR).take(self.char_len()).collect()
        } else {
            self.value.clone()
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default().borders(Borders::ALL).style(border_style);

        let display_text = if self.value.is_empty() && !self.is_focused {
            Line::from(self.placeholder.clone()).style(Style::default().fg(Color::DarkGray))
        } else if self.is_focused {
            let mut chars: Vec<char> = self.display_value().chars().collect();
            chars.insert(self.cursor_pos.min(chars.len()), CURSOR_CHAR);
            Line::from(chars.into_iter().collect::<String>())
        } else {
            Line::from(self.display_value())
        };

        frame.render_widget(Paragraph::new(display_text).block(block), area);
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
