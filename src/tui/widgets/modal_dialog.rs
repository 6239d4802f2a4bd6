use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::common::centered_popup;

const MAX_WIDTH: u16 = 64;
const MIN_WIDTH: u16 = 30;
const DISMISS_HINT: &str = "[Press any key]";

/// Popup kind; decides the border color and title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Error,
    Success,
}

impl DialogType {
    pub fn border_color(&self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Success => Color::Green,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Success => "Success",
        }
    }
}

/// A centered popup carrying one message and a dismiss hint
///
/// The popup is sized in cells from the message, so a short
/// "Passwords do not match" does not fill half the screen while a long
/// service error still wraps inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalDialog {
    pub dialog_type: DialogType,
    pub message: String,
}

impl ModalDialog {
    pub fn new(dialog_type: DialogType, message: impl Into<String>) -> Self {
        Self {
            dialog_type,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DialogType::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(DialogType::Success, message)
    }

    /// Outer width in cells, borders included
    pub fn width(&self) -> u16 {
        let text = self.message.chars().count().max(DISMISS_HINT.len());
        u16::try_from(text)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .clamp(MIN_WIDTH, MAX_WIDTH)
    }

    /// Outer height in cells for the given width
    pub fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2).max(1) as usize;
        let rows = self.message.chars().count().div_ceil(inner).max(1);
        // blank, message, blank, hint, plus two borders
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(5)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = self.width();
        let popup = centered_popup(width, self.height(width), area);

        let block = Block::default()
            .title(self.dialog_type.title())
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .style(
                Style::default()
                    .fg(self.dialog_type.border_color())
                    .add_modifier(Modifier::BOLD),
            );

        let lines = vec![
            Line::from(""),
            Line::from(self.message.as_str()),
            Line::from(""),
            Line::from(DISMISS_HINT).style(Style::default().fg(Color::DarkGray)),
        ];
        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(Clear, popup);
        frame.render_widget(body, popup);
    }
}
