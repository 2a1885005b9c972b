//! New-lecture dialog component
//!
//! Collects the course code, lecture title, and date for one scaffold.
//! Course and title must be non-empty before submission goes through; the
//! date is free text, prefilled with today.

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_popup, clip_tail};
use crate::config::Config;
use crate::model::LectureRequest;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Which input field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Course,
    Title,
    Date,
}

impl Field {
    fn next(&self) -> Field {
        match self {
            Field::Course => Field::Title,
            Field::Title => Field::Date,
            Field::Date => Field::Course,
        }
    }

    fn prev(&self) -> Field {
        match self {
            Field::Course => Field::Date,
            Field::Title => Field::Course,
            Field::Date => Field::Title,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Course => "Course",
            Field::Title => "Title",
            Field::Date => "Date",
        }
    }
}

/// New-lecture prompt dialog
pub struct LectureDialog {
    course: String,
    title: String,
    date: String,
    focus: Field,
    error: Option<String>,
}

impl Default for LectureDialog {
    fn default() -> Self {
        Self {
            course: String::new(),
            title: String::new(),
            date: String::new(),
            focus: Field::Course,
            error: None,
        }
    }
}

impl LectureDialog {
    /// Reset the dialog for a fresh prompt, prefilling the default course
    /// and today's date.
    pub fn open(&mut self, config: &Config) {
        self.course = config.default_course.clone();
        self.title = String::new();
        self.date = Local::now().format("%Y-%m-%d").to_string();
        // Jump straight to the title when a default course is set
        self.focus = if self.course.is_empty() {
            Field::Course
        } else {
            Field::Title
        };
        self.error = None;
    }

    /// The request built from the current field values
    pub fn request(&self) -> LectureRequest {
        LectureRequest::new(self.course.trim(), self.title.trim(), self.date.trim())
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Course => &mut self.course,
            Field::Title => &mut self.title,
            Field::Date => &mut self.date,
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Course => &self.course,
            Field::Title => &self.title,
            Field::Date => &self.date,
        }
    }

    fn draw_field(&self, lines: &mut Vec<Line>, field: Field, inner_width: u16) {
        let focused = self.focus == field;
        let marker = if focused { "> " } else { "  " };
        let cursor = if focused { "_" } else { "" };

        // Keep the tail of long input visible within the dialog
        let budget = inner_width.saturating_sub(14) as usize;
        let shown = clip_tail(self.value(field), budget);

        let value_style = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<8}", field.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(format!("{}{}", shown, cursor), value_style),
        ]));
    }
}

impl Component for LectureDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc => Ok(Some(Action::CloseModal)),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                Ok(None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                Ok(None)
            }
            KeyCode::Enter => {
                let request = self.request();
                match request.validate() {
                    Some(problem) => {
                        self.error = Some(problem);
                        Ok(None)
                    }
                    None => Ok(Some(Action::LectureSubmitted)),
                }
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                self.error = None;
                Ok(None)
            }
            KeyCode::Char(c) => {
                self.focused_input().push(c);
                self.error = None;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, 13);
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from("")];
        let inner_width = popup_area.width.saturating_sub(2);
        self.draw_field(&mut lines, Field::Course, inner_width);
        lines.push(Line::from(""));
        self.draw_field(&mut lines, Field::Title, inner_width);
        lines.push(Line::from(""));
        self.draw_field(&mut lines, Field::Date, inner_width);
        lines.push(Line::from(""));

        if let Some(ref error) = self.error {
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "  Enter  Create   Tab  Next field   Esc  Cancel",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" New Lecture ")
                .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    fn type_text(dialog: &mut LectureDialog, text: &str) {
        for c in text.chars() {
            dialog
                .handle_key_event(KeyEvent::from(KeyCode::Char(c)))
                .unwrap();
        }
    }

    #[test]
    fn test_open_prefills_defaults() {
        let mut dialog = LectureDialog::default();
        let config = Config {
            default_course: "ECE2711".to_string(),
            ..Config::default()
        };
        dialog.open(&config);

        let request = dialog.request();
        assert_eq!(request.course, "ECE2711");
        assert!(request.title.is_empty());
        // Date is prefilled and ISO shaped
        assert_eq!(request.date.len(), 10);
        assert_eq!(dialog.focus, Field::Title);
    }

    #[test]
    fn test_enter_blocks_on_empty_title() {
        let mut dialog = LectureDialog::default();
        dialog.open(&Config::default());
        type_text(&mut dialog, "ECE2711");

        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert_eq!(action, None);
        assert!(dialog.error.is_some());
    }

    #[test]
    fn test_enter_submits_complete_request() {
        let mut dialog = LectureDialog::default();
        let config = Config {
            default_course: "ECE2711".to_string(),
            ..Config::default()
        };
        dialog.open(&config);
        type_text(&mut dialog, "RL Frequency Response");

        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Enter))
            .unwrap();
        assert_eq!(action, Some(Action::LectureSubmitted));
        assert_eq!(dialog.request().title, "RL Frequency Response");
    }

    #[test]
    fn test_escape_cancels() {
        let mut dialog = LectureDialog::default();
        dialog.open(&Config::default());

        let action = dialog
            .handle_key_event(KeyEvent::from(KeyCode::Esc))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut dialog = LectureDialog::default();
        dialog.open(&Config::default());
        assert_eq!(dialog.focus, Field::Course);

        dialog.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        assert_eq!(dialog.focus, Field::Title);
        dialog.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        assert_eq!(dialog.focus, Field::Date);
        dialog.handle_key_event(KeyEvent::from(KeyCode::Tab)).unwrap();
        assert_eq!(dialog.focus, Field::Course);
    }

}
