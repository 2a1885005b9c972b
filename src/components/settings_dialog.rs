//! Settings dialog component
//!
//! Edits the persisted configuration: vault root, default course, the
//! missing-drawing-tool warning toggle, and the three canvas rectangles.
//! Rectangles are edited as `x, y, width, height` number lists.

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_popup, clip_tail};
use crate::config::Config;
use crate::model::{BlockRect, CanvasLayout};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    VaultRoot,
    DefaultCourse,
    WarnToggle,
    MetadataBlock,
    DrawingBlock,
    SlidesBlock,
}

const FIELD_ORDER: [Field; 6] = [
    Field::VaultRoot,
    Field::DefaultCourse,
    Field::WarnToggle,
    Field::MetadataBlock,
    Field::DrawingBlock,
    Field::SlidesBlock,
];

impl Field {
    fn next(&self) -> Field {
        let i = FIELD_ORDER.iter().position(|f| f == self).unwrap_or(0);
        FIELD_ORDER[(i + 1) % FIELD_ORDER.len()]
    }

    fn prev(&self) -> Field {
        let i = FIELD_ORDER.iter().position(|f| f == self).unwrap_or(0);
        FIELD_ORDER[(i + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()]
    }

    fn label(&self) -> &'static str {
        match self {
            Field::VaultRoot => "Vault root",
            Field::DefaultCourse => "Default course",
            Field::WarnToggle => "Warn if no drawing tool",
            Field::MetadataBlock => "Summary block",
            Field::DrawingBlock => "Drawing block",
            Field::SlidesBlock => "Slides block",
        }
    }
}

/// Settings editor dialog
pub struct SettingsDialog {
    vault_root: String,
    default_course: String,
    warn_missing_drawing_tool: bool,
    metadata_block: String,
    drawing_block: String,
    slides_block: String,
    focus: Field,
    error: Option<String>,
    /// Validated config staged by the last successful Enter
    staged: Option<Config>,
}

impl Default for SettingsDialog {
    fn default() -> Self {
        Self {
            vault_root: String::new(),
            default_course: String::new(),
            warn_missing_drawing_tool: true,
            metadata_block: String::new(),
            drawing_block: String::new(),
            slides_block: String::new(),
            focus: Field::VaultRoot,
            error: None,
            staged: None,
        }
    }
}

fn format_rect(rect: &BlockRect) -> String {
    format!("{}, {}, {}, {}", rect.x, rect.y, rect.width, rect.height)
}

fn parse_rect(input: &str, label: &str) -> Result<BlockRect, String> {
    let parts: Vec<f64> = input
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("{}: expected four numbers (x, y, width, height)", label))?;

    if parts.len() != 4 {
        return Err(format!("{}: expected four numbers, got {}", label, parts.len()));
    }

    Ok(BlockRect::new(parts[0], parts[1], parts[2], parts[3]))
}

impl SettingsDialog {
    /// Populate the editor from the current config
    pub fn open(&mut self, config: &Config) {
        self.vault_root = config.vault_root.clone();
        self.default_course = config.default_course.clone();
        self.warn_missing_drawing_tool = config.warn_missing_drawing_tool;
        self.metadata_block = format_rect(&config.layout.metadata_block);
        self.drawing_block = format_rect(&config.layout.drawing_block);
        self.slides_block = format_rect(&config.layout.slides_block);
        self.focus = Field::VaultRoot;
        self.error = None;
        self.staged = None;
    }

    /// The config staged by the last successful submission.
    /// External tools are not editable here; the caller merges them back.
    pub fn take_staged(&mut self) -> Option<Config> {
        self.staged.take()
    }

    fn validate(&self) -> Result<Config, String> {
        if self.vault_root.trim().is_empty() {
            return Err("Vault root is required".to_string());
        }

        let layout = CanvasLayout {
            metadata_block: parse_rect(&self.metadata_block, "Summary block")?,
            drawing_block: parse_rect(&self.drawing_block, "Drawing block")?,
            slides_block: parse_rect(&self.slides_block, "Slides block")?,
        };

        Ok(Config {
            vault_root: self.vault_root.trim().to_string(),
            default_course: self.default_course.trim().to_string(),
            warn_missing_drawing_tool: self.warn_missing_drawing_tool,
            layout,
            external_tools: Vec::new(),
        })
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::VaultRoot => Some(&mut self.vault_root),
            Field::DefaultCourse => Some(&mut self.default_course),
            Field::WarnToggle => None,
            Field::MetadataBlock => Some(&mut self.metadata_block),
            Field::DrawingBlock => Some(&mut self.drawing_block),
            Field::SlidesBlock => Some(&mut self.slides_block),
        }
    }

    fn field_text(&self, field: Field) -> String {
        match field {
            Field::VaultRoot => self.vault_root.clone(),
            Field::DefaultCourse => self.default_course.clone(),
            Field::WarnToggle => {
                if self.warn_missing_drawing_tool {
                    "[x] yes".to_string()
                } else {
                    "[ ] no".to_string()
                }
            }
            Field::MetadataBlock => self.metadata_block.clone(),
            Field::DrawingBlock => self.drawing_block.clone(),
            Field::SlidesBlock => self.slides_block.clone(),
        }
    }
}

impl Component for SettingsDialog {
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
            KeyCode::Enter => match self.validate() {
                Ok(config) => {
                    self.staged = Some(config);
                    Ok(Some(Action::SettingsSaved))
                }
                Err(problem) => {
                    self.error = Some(problem);
                    Ok(None)
                }
            },
            KeyCode::Char(' ') if self.focus == Field::WarnToggle => {
                self.warn_missing_drawing_tool = !self.warn_missing_drawing_tool;
                self.error = None;
                Ok(None)
            }
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                    self.error = None;
                }
                Ok(None)
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.focused_input() {
                    input.push(c);
                    self.error = None;
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 64, 18);
        frame.render_widget(Clear, popup_area);

        let inner_width = popup_area.width.saturating_sub(2);
        let budget = inner_width.saturating_sub(28) as usize;

        let mut lines = vec![Line::from("")];
        for field in FIELD_ORDER {
            let focused = self.focus == field;
            let marker = if focused { "> " } else { "  " };
            let cursor = if focused && field != Field::WarnToggle { "_" } else { "" };
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
                    format!("{:<24}", field.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{}{}", clip_tail(&self.field_text(field), budget), cursor),
                    value_style,
                ),
            ]));
            lines.push(Line::from(""));
        }

        if let Some(ref error) = self.error {
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "  Enter  Save   Space  Toggle   Esc  Discard",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Settings ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
