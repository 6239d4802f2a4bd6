use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::common;
use super::form_field::{FormField, FIELD_HEIGHT};
use crate::tui::screen_trait::ScreenId;
use crate::tui::state::Navigable;

const PANEL_WIDTH: u16 = 60;

/// What a button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Submit,
    GoTo(ScreenId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub label: &'static str,
    pub action: PanelAction,
}

impl ActionButton {
    pub fn new(label: &'static str, action: PanelAction) -> Self {
        Self { label, action }
    }
}

/// Result of feeding a key to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The field at this index changed
    Edited(usize),
    Activated(PanelAction),
    FocusMoved,
    Unhandled,
}

/// A column of form fields followed by buttons, with one focus ring over both
///
/// Enter inside a field submits the form; Enter on a button activates it.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialsPanel {
    pub fields: Vec<FormField>,
    pub buttons: Vec<ActionButton>,
    focused: usize,
}

impl CredentialsPanel {
    pub fn new(fields: Vec<FormField>, buttons: Vec<ActionButton>) -> Self {
        let mut panel = Self {
            fields,
            buttons,
            focused: 0,
        };
        panel.set_selected(0);
        panel
    }

    pub fn field(&self, index: usize) -> &FormField {
        &self.fields[index]
    }

    pub fn field_mut(&mut self, index: usize) -> &mut FormField {
        &mut self.fields[index]
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields[index].value()
    }

    /// Button currently holding focus, if focus is past the fields
    pub fn focused_button(&self) -> Option<&ActionButton> {
        self.focused
            .checked_sub(self.fields.len())
            .and_then(|i| self.buttons.get(i))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PanelEvent {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next();
                PanelEvent::FocusMoved
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous();
                PanelEvent::FocusMoved
            }
            KeyCode::Enter => match self.focused_button() {
                Some(button) => PanelEvent::Activated(button.action),
                None => PanelEvent::Activated(PanelAction::Submit),
            },
            _ => {
                let index = self.focused;
                let edited = match self.fields.get_mut(index) {
                    Some(field) => field.handle_key(key),
                    None => false,
                };
                if edited {
                    PanelEvent::Edited(index)
                } else {
                    PanelEvent::Unhandled
                }
            }
        }
    }

    /// Empty every field and move focus back to the first one
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.first();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, help: &[(&str, &str)]) {
        let [title_area, content, help_area] = common::render_screen_layout(area);
        common::render_title(frame, title_area, title);

        let frame_block = Block::default().borders(Borders::ALL);
        let column = common::centered_column(PANEL_WIDTH, frame_block.inner(content));
        frame.render_widget(frame_block, content);

        let mut constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Length(1));
        constraints.extend(self.buttons.iter().map(|_| Constraint::Length(1)));
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(column);

        for (i, field) in self.fields.iter().enumerate() {
            field.render(frame, rows[i]);
        }

        let first_button_row = self.fields.len() + 1;
        for (i, button) in self.buttons.iter().enumerate() {
            let is_selected = self.focused == self.fields.len() + i;
            let (prefix, style) = common::selection_style(is_selected);
            let line = Line::from(format!("{}{}", prefix, button.label)).style(style);
            frame.render_widget(Paragraph::new(line), rows[first_button_row + i]);
        }

        common::render_help(frame, help_area, help);
    }
}

impl Navigable for CredentialsPanel {
    fn len(&self) -> usize {
        self.fields.len() + self.buttons.len()
    }

    fn selected(&self) -> usize {
        self.focused
    }

    fn set_selected(&mut self, index: usize) {
        self.focused = index;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == index);
        }
    }
}
