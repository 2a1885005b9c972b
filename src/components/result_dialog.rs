//! Scaffold result dialog component
//!
//! Shown after a submission: which files were written or skipped, and what
//! the drawing-tool bridge did.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Outcome of one scaffold submission, for display
#[derive(Debug, Clone, Default)]
pub struct ScaffoldSummary {
    pub folder: String,
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    /// Name of the external tool launched on the drawing, if any
    pub drawing_tool: Option<String>,
    /// Non-blocking warning (e.g. no drawing tool configured)
    pub warning: Option<String>,
}

/// Post-scaffold summary dialog
#[derive(Default)]
pub struct ResultDialog {
    summary: ScaffoldSummary,
}

impl ResultDialog {
    pub fn set(&mut self, summary: ScaffoldSummary) {
        self.summary = summary;
    }
}

impl Component for ResultDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = (9 + self.summary.written.len() + self.summary.skipped.len()) as u16;
        let popup_area = centered_popup(area, 64, height.min(area.height));
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Folder: ", Style::default().fg(Color::Cyan)),
                Span::raw(self.summary.folder.clone()),
            ]),
            Line::from(""),
        ];

        for path in &self.summary.written {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                Span::raw(path.clone()),
            ]));
        }
        for path in &self.summary.skipped {
            lines.push(Line::from(vec![
                Span::styled("  ◦ ", Style::default().fg(Color::DarkGray)),
                Span::raw(path.clone()),
                Span::styled(" (already existed)", Style::default().fg(Color::DarkGray)),
            ]));
        }

        lines.push(Line::from(""));
        if let Some(ref tool) = self.summary.drawing_tool {
            lines.push(Line::from(vec![
                Span::styled("Opened with: ", Style::default().fg(Color::Cyan)),
                Span::raw(tool.clone()),
            ]));
        }
        if let Some(ref warning) = self.summary.warning {
            lines.push(Line::from(Span::styled(
                warning.clone(),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(Span::styled(
            "  Enter/Esc  Close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Lecture Created ")
                .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
