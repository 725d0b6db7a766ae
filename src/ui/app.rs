use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use log::debug;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::FruitId;
use crate::view::FruitList;

use super::forms::{InputField, RenameForm};
use super::helpers::{
    centered_rect, cursor_offset, fruit_line, shift_selection, surface_error,
};

/// Height of the bordered add field at the top of the screen.
const INPUT_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp / PageDown.
const PAGE_STEP: isize = 5;

/// Interaction modes. Normal mode types into the add field and works on the
/// selected row; the rename dialog captures every key until it closes.
enum Mode {
    Normal,
    Renaming(RenameForm),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Screen state: the list binder plus everything that only matters to the
/// presentation (typed text, selected row, dialog draft, status line).
pub struct App {
    list: FruitList,
    input: InputField,
    selected: usize,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(list: FruitList) -> Self {
        Self {
            list,
            input: InputField::default(),
            selected: 0,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Route a key through the active mode. Returns `true` when the user asked
    /// to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Renaming(form) => self.handle_rename(code, form)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Esc => *exit = true,
            KeyCode::Enter => self.add_from_input(),
            KeyCode::Delete => self.delete_selected(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.list.len().saturating_sub(1),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Char(ch) => {
                self.input.push_char(ch);
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_rename(&mut self, code: KeyCode, mut form: RenameForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Update cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter => match self.list.on_update(form.id, &form.draft) {
                Ok(()) => {
                    self.select_id(form.id);
                    self.set_status(format!("Updated to \"{}\".", form.draft), StatusKind::Info);
                    Ok(Mode::Normal)
                }
                Err(err) if err.is_saved() => {
                    self.set_status(surface_error(&err), StatusKind::Error);
                    Ok(Mode::Normal)
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                    Ok(Mode::Renaming(form))
                }
            },
            KeyCode::Backspace => {
                form.backspace();
                Ok(Mode::Renaming(form))
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
                Ok(Mode::Renaming(form))
            }
            _ => Ok(Mode::Renaming(form)),
        }
    }

    /// Ctrl+A mirrors the toolbar add button: same as Enter in normal mode.
    pub(crate) fn handle_ctrl_a(&mut self) -> Result<()> {
        if matches!(self.mode, Mode::Normal) {
            self.add_from_input();
        }
        Ok(())
    }

    /// Ctrl+E opens the rename dialog for the selected row.
    pub(crate) fn handle_ctrl_e(&mut self) -> Result<()> {
        if !matches!(self.mode, Mode::Normal) {
            return Ok(());
        }

        let Some(fruit) = self.list.get(self.selected).cloned() else {
            self.set_status("No fruit selected to update.", StatusKind::Error);
            return Ok(());
        };

        debug!("event=row_open id={} index={}", fruit.id, self.selected);
        match self.list.begin_edit(fruit.id) {
            Ok(draft) => {
                self.clear_status();
                self.mode = Mode::Renaming(RenameForm::new(&fruit, draft));
            }
            Err(err) => self.set_status(surface_error(&err), StatusKind::Error),
        }
        Ok(())
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_input(frame, chunks[0]);
        self.draw_list(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        if let Mode::Renaming(form) = &self.mode {
            self.draw_rename(frame, area, form);
        }
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("New fruit");
        let paragraph = Paragraph::new(self.input.build_line()).block(block.clone());
        frame.render_widget(paragraph, area);

        if matches!(self.mode, Mode::Normal) {
            let inner = block.inner(area);
            if inner.width > 0 && inner.height > 0 {
                let offset = cursor_offset(0, self.input.value_len(), inner.width);
                frame.set_cursor_position((inner.x + offset, inner.y));
            }
        }
    }

    fn draw_list(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Fruits ({})", self.list.len()));

        if self.list.is_empty() {
            let message = Paragraph::new("No fruits yet. Type a name and press Enter to add one.")
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = self
            .list
            .projection()
            .iter()
            .map(|fruit| ListItem::new(fruit_line(fruit)))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.mode {
            Mode::Normal => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Add   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Ctrl+E]", key_style),
                Span::raw(" Rename   "),
                Span::styled("[Del]", key_style),
                Span::raw(" Delete   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Quit"),
            ]),
            Mode::Renaming(_) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Update   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
        }
    }

    fn draw_rename(&self, frame: &mut Frame, area: Rect, form: &RenameForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Update fruit").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            Line::from(form.message()),
            Line::from(""),
            form.build_line(),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to update • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);

        if inner.width > 0 && inner.height > 2 {
            let offset = cursor_offset("Name: ".len(), form.value_len(), inner.width);
            frame.set_cursor_position((inner.x + offset, inner.y + 2));
        }
    }

    fn add_from_input(&mut self) {
        let text = self.input.text.clone();
        match self.list.on_add(&text) {
            Ok(fruit) => {
                self.select_id(fruit.id);
                self.set_status(format!("Added \"{}\".", fruit.name), StatusKind::Info);
            }
            Err(err) => self.set_status(surface_error(&err), StatusKind::Error),
        }
    }

    fn delete_selected(&mut self) {
        match self.list.on_delete_at(self.selected) {
            Ok(Some(fruit)) => {
                self.clamp_selection();
                self.set_status(format!("Deleted \"{}\".", fruit.name), StatusKind::Info);
            }
            Ok(None) => {}
            Err(err) => self.set_status(surface_error(&err), StatusKind::Error),
        }
    }

    fn move_selection(&mut self, offset: isize) {
        self.selected = shift_selection(self.selected, offset, self.list.len());
    }

    fn select_id(&mut self, id: FruitId) {
        match self.list.position_of(id) {
            Some(idx) => self.selected = idx,
            None => self.clamp_selection(),
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
