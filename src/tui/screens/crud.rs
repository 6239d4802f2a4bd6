use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::info;

use crate::list_editor::{EditState, ListEditor};
use crate::services::AuthService;
use crate::tui::app::AppContext;
use crate::tui::screen_trait::{Screen, ScreenId, ScreenTransition};
use crate::tui::state::Navigable;
use crate::tui::widgets::{common, TextInput};

const MAX_ITEM_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudMode {
    /// Moving through the list
    List,
    /// Typing into the input box, either a new item or an edit
    Input,
}

pub struct CrudState {
    pub editor: ListEditor,
    pub input: TextInput,
    pub selected: usize,
    pub mode: CrudMode,
}

impl Default for CrudState {
    fn default() -> Self {
        Self::new()
    }
}

impl CrudState {
    pub fn new() -> Self {
        Self {
            editor: ListEditor::new(),
            input: Self::empty_input(),
            selected: 0,
            mode: CrudMode::List,
        }
    }

    fn empty_input() -> TextInput {
        TextInput::new()
            .with_placeholder("Press 'a' to add an item")
            .with_max_length(MAX_ITEM_LENGTH)
    }

    /// Rebuild the input widget from the editor's buffer
    fn load_input(&mut self) {
        self.input.set_value(self.editor.input());
        self.input.set_focused(self.mode == CrudMode::Input);
    }

    fn set_mode(&mut self, mode: CrudMode) {
        self.mode = mode;
        self.input.set_focused(mode == CrudMode::Input);
    }

    fn handle_list_mode(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => self.previous(),
            KeyCode::Down => self.next(),
            KeyCode::Home => self.first(),
            KeyCode::End => self.last(),
            KeyCode::Char('a') | KeyCode::Char('n') => {
                self.editor.cancel_edit();
                self.set_mode(CrudMode::Input);
                self.load_input();
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if self.editor.start_edit_at(self.selected) {
                    self.set_mode(CrudMode::Input);
                    self.load_input();
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.editor.delete_at(self.selected) {
                    self.clamp();
                }
            }
            KeyCode::Char('q') => return ScreenTransition::Quit,
            _ => {}
        }
        ScreenTransition::Stay
    }

    fn handle_input_mode(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc => {
                self.editor.cancel_edit();
                self.set_mode(CrudMode::List);
                self.load_input();
            }
            KeyCode::Enter => {
                let text = self.input.value().to_string();
                if self.editor.is_editing() {
                    if self.editor.commit_edit(&text) {
                        self.set_mode(CrudMode::List);
                        self.load_input();
                    }
                } else if let Some(id) = self.editor.add(&text) {
                    if let Some(index) = self.editor.index_of(id) {
                        self.set_selected(index);
                    }
                    self.set_mode(CrudMode::List);
                    self.load_input();
                }
            }
            _ => {
                if self.input.handle_key(key) {
                    self.editor.set_input(self.input.value());
                }
            }
        }
        ScreenTransition::Stay
    }

    fn render_items(&self, frame: &mut Frame, area: Rect) {
        if self.editor.is_empty() {
            common::render_empty_state(frame, area, "No items yet. Press 'a' to add one.");
            return;
        }

        let editing = match self.editor.edit_state() {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        };

        let items: Vec<ListItem> = self
            .editor
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (prefix, style) = common::selection_style(i == self.selected && self.mode == CrudMode::List);
                let mut spans = vec![Span::styled(format!("{}{}", prefix, item.text), style)];
                if editing == Some(item.id) {
                    spans.push(Span::styled("  (editing)", Style::default().fg(Color::Cyan)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} item(s)", self.editor.len())),
        );

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn input_title(&self) -> &'static str {
        match (self.mode, self.editor.is_editing()) {
            (CrudMode::Input, true) => "Edit item",
            (CrudMode::Input, false) => "New item",
            (CrudMode::List, _) => "Input",
        }
    }
}

impl Navigable for CrudState {
    fn len(&self) -> usize {
        self.editor.len()
    }

    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, index: usize) {
        self.selected = index;
    }
}

#[async_trait]
impl<A: AuthService> Screen<A> for CrudState {
    fn render(&self, frame: &mut Frame, _context: &AppContext<A>) {
        let [title, content, help] = common::render_screen_layout(frame.area());
        common::render_title(frame, title, "Items");

        let chunks = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1), // Input title
            Constraint::Length(3), // Input box
        ])
        .split(content);

        self.render_items(frame, chunks[0]);
        let input_title = Line::from(Span::styled(self.input_title(), Style::default().fg(Color::Cyan)));
        frame.render_widget(Paragraph::new(input_title), chunks[1]);
        self.input.render(frame, chunks[2]);

        match self.mode {
            CrudMode::List => common::render_help(
                frame,
                help,
                &[
                    ("↑/↓", "Navigate"),
                    ("a", "Add"),
                    ("e", "Edit"),
                    ("d", "Delete"),
                    ("q", "Quit"),
                ],
            ),
            CrudMode::Input => common::render_help(frame, help, &[("Enter", "Save"), ("Esc", "Cancel")]),
        }
    }

    async fn handle_key(&mut self, _context: &mut AppContext<A>, key: KeyEvent) -> Result<ScreenTransition> {
        let transition = match self.mode {
            CrudMode::List => self.handle_list_mode(key),
            CrudMode::Input => self.handle_input_mode(key),
        };
        Ok(transition)
    }

    async fn on_enter(&mut self, _context: &mut AppContext<A>) -> Result<()> {
        info!("Opened item list with {} item(s)", self.editor.len());
        Ok(())
    }

    async fn on_exit(&mut self, _context: &mut AppContext<A>) -> Result<()> {
        self.editor.clear();
        self.input = Self::empty_input();
        self.selected = 0;
        self.mode = CrudMode::List;
        Ok(())
    }

    fn id(&self) -> ScreenId {
        ScreenId::Crud
    }
}
