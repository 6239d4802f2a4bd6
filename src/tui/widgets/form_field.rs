use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::text_input::TextInput;

/// Rows a field occupies: label, bordered input, message line
pub const FIELD_HEIGHT: u16 = 5;

/// A labelled text input with an inline validation message
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: String,
    pub input: TextInput,
    pub validation_state: ValidationState,
    pub is_focused: bool,
    /// Shown under the input when there is no validation message
    pub help_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    Idle,
    Invalid(String),
}

impl ValidationState {
    pub fn color(&self) -> Color {
        match self {
            Self::Idle => Color::White,
            Self::Invalid(_) => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Invalid(_) => "✗",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            Self::Idle => None,
        }
    }
}

impl FormField {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: TextInput::new(),
            validation_state: ValidationState::Idle,
            is_focused: false,
            help_text: None,
        }
    }

    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input;
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
        self.input.set_focused(focused);
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.validation_state = ValidationState::Invalid(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.validation_state = ValidationState::Idle;
    }

    /// Handle keyboard input
    ///
    /// Returns true if the value changed; cursor movement alone returns
    /// false. A changed value clears a previous validation error.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.input.value.clone();
        self.input.handle_key(key);
        let changed = self.input.value != before;
        if changed {
            self.clear_error();
        }
        changed
    }

    /// Empty the input and forget validation state
    pub fn reset(&mut self) {
        self.input.clear();
        self.validation_state = ValidationState::Idle;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input
            Constraint::Length(1), // Help/validation message
        ])
        .split(area);

        let label_style = if self.is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let validation_icon = self.validation_state.icon();
        let label_line = if validation_icon.is_empty() {
            Line::from(Span::styled(self.label.clone(), label_style))
        } else {
            Line::from(vec![
                Span::styled(self.label.clone(), label_style),
                Span::raw(" "),
                Span::styled(validation_icon, Style::default().fg(self.validation_state.color())),
            ])
        };
        frame.render_widget(Paragraph::new(label_line), chunks[0]);

        self.input.render(frame, chunks[1]);

        let message = match (self.validation_state.message(), &self.help_text) {
            (Some(msg), _) => Some((msg, self.validation_state.color())),
            (None, Some(help)) => Some((help.as_str(), Color::DarkGray)),
            (None, None) => None,
        };
        if let Some((text, color)) = message {
            let para = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))));
            frame.render_widget(para, chunks[2]);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_valid(&self) -> bool {
        self.validation_state == ValidationState::Idle
    }
}
