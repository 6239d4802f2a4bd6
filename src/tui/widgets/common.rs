//! Layout and styling helpers shared by every screen

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Standard 3-section screen layout (title, content, help)
///
/// # Example
/// ```no_run
/// # use ratatui::layout::Rect;
/// # use authlist::tui::widgets::common::render_screen_layout;
/// # let area = Rect::default();
/// let [title, content, help] = render_screen_layout(area);
/// ```
pub fn render_screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(0),    // Content
        Constraint::Length(3), // Help
    ])
    .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

/// Horizontally center a column of `width` cells inside `area`
pub fn centered_column(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

pub fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(widget, area);
}

/// Render a bar of key hints, keys highlighted
pub fn render_help(frame: &mut Frame, area: Rect, items: &[(&str, &str)]) {
    let key_style = Style::default().fg(Color::Yellow);
    let spans: Vec<Span> = items
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!("[{}]", key), key_style),
                Span::raw(format!(" {}  ", desc)),
            ]
        })
        .collect();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// Placeholder shown instead of an empty list
pub fn render_empty_state(frame: &mut Frame, area: Rect, message: &str) {
    let widget = Paragraph::new(Line::from(message).style(Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Get selection marker and style for list rows and buttons
///
/// Selected entries get a ">" prefix and yellow bold styling.
pub fn selection_style(is_selected: bool) -> (&'static str, Style) {
    if is_selected {
        (
            "> ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default())
    }
}
