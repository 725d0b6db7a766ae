use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Fruit, FruitId};

/// Placeholder shown while the add field is empty.
pub(crate) const INPUT_PLACEHOLDER: &str = "Add fruit here...";
/// Placeholder shown while the rename draft is empty.
pub(crate) const RENAME_PLACEHOLDER: &str = "Enter new fruit name...";

/// Text typed into the always-visible add field. Nothing is trimmed or
/// validated; whatever is here becomes the new fruit's name.
#[derive(Default, Clone)]
pub(crate) struct InputField {
    pub(crate) text: String,
}

impl InputField {
    /// Append a printable character. Control characters are refused.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            false
        } else {
            self.text.push(ch);
            true
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.text.pop();
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        draft_line(&self.text, INPUT_PLACEHOLDER)
    }

    pub(crate) fn value_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Draft state of the "Update fruit" dialog. The draft is owned here, not by
/// the list, and only reaches the store when the user confirms.
#[derive(Clone)]
pub(crate) struct RenameForm {
    pub(crate) id: FruitId,
    pub(crate) original: String,
    pub(crate) draft: String,
    pub(crate) error: Option<String>,
}

impl RenameForm {
    /// Seed the dialog for `fruit` with `draft`, normally its current name.
    pub(crate) fn new(fruit: &Fruit, draft: String) -> Self {
        Self {
            id: fruit.id,
            original: fruit.name.clone(),
            draft,
            error: None,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            false
        } else {
            self.draft.push(ch);
            true
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Prompt line echoing the name being replaced.
    pub(crate) fn message(&self) -> String {
        format!("Update the name for {}", self.original)
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw("Name: ")];
        spans.extend(draft_line(&self.draft, RENAME_PLACEHOLDER).spans);
        Line::from(spans)
    }

    pub(crate) fn value_len(&self) -> usize {
        self.draft.chars().count()
    }
}

fn draft_line(value: &str, placeholder: &'static str) -> Line<'static> {
    if value.is_empty() {
        Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(Color::Yellow),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_keeps_spaces_and_refuses_control_chars() {
        let mut input = InputField::default();
        assert!(input.push_char(' '));
        assert!(input.push_char('K'));
        assert!(!input.push_char('\n'));
        assert_eq!(input.text, " K");
        assert_eq!(input.value_len(), 2);

        input.backspace();
        input.backspace();
        input.backspace();
        assert!(input.text.is_empty());
    }

    #[test]
    fn rename_form_tracks_draft_separately_from_original() {
        let fruit = Fruit {
            id: FruitId(7),
            name: "Pear".to_string(),
        };
        let mut form = RenameForm::new(&fruit, fruit.name.clone());
        form.backspace();
        form.backspace();
        form.push_char('c');
        form.push_char('h');

        assert_eq!(form.draft, "Peach");
        assert_eq!(form.original, "Pear");
        assert_eq!(form.message(), "Update the name for Pear");
        assert_eq!(form.value_len(), 5);
    }

    #[test]
    fn empty_draft_renders_placeholder() {
        let fruit = Fruit {
            id: FruitId(1),
            name: String::new(),
        };
        let form = RenameForm::new(&fruit, String::new());
        let text: String = form
            .build_line()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, format!("Name: {RENAME_PLACEHOLDER}"));
    }
}
