//! First-run setup wizard component
//!
//! Collects the vault root and default course when no config exists yet.

use crate::action::Action;
use crate::component::Component;
use crate::config::Config;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Setup wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Welcome,
    VaultRoot,
    DefaultCourse,
    Confirm,
}

impl SetupStep {
    fn next(&self) -> Option<SetupStep> {
        match self {
            SetupStep::Welcome => Some(SetupStep::VaultRoot),
            SetupStep::VaultRoot => Some(SetupStep::DefaultCourse),
            SetupStep::DefaultCourse => Some(SetupStep::Confirm),
            SetupStep::Confirm => None,
        }
    }

    fn prev(&self) -> Option<SetupStep> {
        match self {
            SetupStep::Welcome => None,
            SetupStep::VaultRoot => Some(SetupStep::Welcome),
            SetupStep::DefaultCourse => Some(SetupStep::VaultRoot),
            SetupStep::Confirm => Some(SetupStep::DefaultCourse),
        }
    }

    fn title(&self) -> &str {
        match self {
            SetupStep::Welcome => "Welcome",
            SetupStep::VaultRoot => "Vault Root",
            SetupStep::DefaultCourse => "Default Course",
            SetupStep::Confirm => "Confirm",
        }
    }

    fn step_number(&self) -> usize {
        match self {
            SetupStep::Welcome => 1,
            SetupStep::VaultRoot => 2,
            SetupStep::DefaultCourse => 3,
            SetupStep::Confirm => 4,
        }
    }
}

/// Setup wizard component
pub struct SetupComponent {
    pub step: SetupStep,
    /// Config being built
    pub config: Config,
    /// Current input text
    pub input: String,
    pub error: Option<String>,
    /// Whether setup saved successfully
    pub complete: bool,
}

impl Default for SetupComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupComponent {
    pub fn new() -> Self {
        Self {
            step: SetupStep::Welcome,
            config: Config::default(),
            input: String::new(),
            error: None,
            complete: false,
        }
    }

    /// The saved config, once setup completed
    pub fn get_config(&self) -> Option<&Config> {
        if self.complete {
            Some(&self.config)
        } else {
            None
        }
    }

    fn validate_current_step(&mut self) -> bool {
        self.error = None;

        match self.step {
            SetupStep::Welcome | SetupStep::Confirm => true,
            SetupStep::VaultRoot => {
                if self.input.trim().is_empty() {
                    self.error = Some("Vault root is required".to_string());
                    return false;
                }
                self.config.vault_root = self.input.trim().to_string();
                true
            }
            SetupStep::DefaultCourse => {
                // Optional; the new-lecture dialog asks again anyway
                self.config.default_course = self.input.trim().to_string();
                true
            }
        }
    }

    fn advance_step(&mut self) {
        if self.validate_current_step() {
            if let Some(next) = self.step.next() {
                self.step = next;
                self.input = match self.step {
                    SetupStep::VaultRoot => self.config.vault_root.clone(),
                    SetupStep::DefaultCourse => self.config.default_course.clone(),
                    _ => String::new(),
                };
            } else {
                self.save_config();
            }
        }
    }

    fn go_back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            self.error = None;
            self.input = match self.step {
                SetupStep::VaultRoot => self.config.vault_root.clone(),
                SetupStep::DefaultCourse => self.config.default_course.clone(),
                _ => String::new(),
            };
        }
    }

    fn save_config(&mut self) {
        match self.config.save() {
            Ok(()) => {
                self.complete = true;
            }
            Err(e) => {
                self.error = Some(format!("Failed to save config: {}", e));
            }
        }
    }
}

impl Component for SetupComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.step {
            SetupStep::Welcome => match key.code {
                KeyCode::Enter => {
                    self.advance_step();
                    Ok(None)
                }
                KeyCode::Esc => Ok(Some(Action::ForceQuit)),
                _ => Ok(None),
            },
            SetupStep::VaultRoot | SetupStep::DefaultCourse => match key.code {
                KeyCode::Enter => {
                    self.advance_step();
                    Ok(None)
                }
                KeyCode::Esc => {
                    self.go_back();
                    Ok(None)
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    self.error = None;
                    Ok(None)
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    self.error = None;
                    Ok(None)
                }
                _ => Ok(None),
            },
            SetupStep::Confirm => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.save_config();
                    if self.complete {
                        Ok(Some(Action::SetupConfirm))
                    } else {
                        Ok(None)
                    }
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Backspace => {
                    self.go_back();
                    Ok(None)
                }
                _ => Ok(None),
            },
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(Color::Reset));
        frame.render_widget(background, area);

        let margin = 4;
        let content_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(content_area);

        let title = Paragraph::new(Line::from(vec![Span::styled(
            " lectern Setup ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let progress = format!(
            "Step {} of 4: {}",
            self.step.step_number(),
            self.step.title()
        );
        let progress_widget = Paragraph::new(Line::from(vec![Span::styled(
            progress,
            Style::default().fg(Color::DarkGray),
        )]));
        frame.render_widget(progress_widget, chunks[1]);

        self.draw_step_content(frame, chunks[2]);

        let help_text = match self.step {
            SetupStep::Welcome => " Enter  Continue   Esc  Quit",
            SetupStep::VaultRoot | SetupStep::DefaultCourse => {
                " Enter  Continue   Esc  Back   Type to edit"
            }
            SetupStep::Confirm => " Enter/y  Save & Continue   Esc/n  Go Back",
        };
        let help = Paragraph::new(Line::from(vec![Span::styled(
            help_text,
            Style::default().fg(Color::DarkGray),
        )]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);

        Ok(())
    }
}

impl SetupComponent {
    fn draw_step_content(&self, frame: &mut Frame, area: Rect) {
        match self.step {
            SetupStep::Welcome => self.draw_welcome(frame, area),
            SetupStep::VaultRoot => self.draw_input_step(
                frame,
                area,
                " Vault Root ",
                "Folder under which lecture scaffolds are created:",
                "(relative to where you run lectern, or an absolute path)",
            ),
            SetupStep::DefaultCourse => self.draw_input_step(
                frame,
                area,
                " Default Course ",
                "Course code to prefill in the new-lecture prompt:",
                "(optional, leave empty to skip)",
            ),
            SetupStep::Confirm => self.draw_confirm(frame, area),
        }
    }

    fn draw_welcome(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Welcome to lectern!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("lectern scaffolds one folder per lecture in your notes vault:"),
            Line::from("a drawing canvas, a metadata note, a slides placeholder, and a"),
            Line::from("whiteboard file that ties them together."),
            Line::from(""),
            Line::from("You will need to provide:"),
            Line::from(vec![Span::styled(
                "  1. The vault folder lectures go under",
                Style::default().fg(Color::Cyan),
            )]),
            Line::from(vec![Span::styled(
                "  2. An optional default course code",
                Style::default().fg(Color::Cyan),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press Enter to begin...",
                Style::default().fg(Color::Yellow),
            )]),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Welcome ")
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_input_step(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        prompt: &str,
        hint: &str,
    ) {
        let mut lines = vec![
            Line::from(""),
            Line::from(prompt.to_string()),
            Line::from(hint.to_string()),
            Line::from(""),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{}_", &self.input),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_confirm(&self, frame: &mut Frame, area: Rect) {
        let config_dir = Config::config_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "~/.lectern".to_string());

        let course_display = if self.config.default_course.is_empty() {
            "(none)".to_string()
        } else {
            self.config.default_course.clone()
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Review your configuration:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Vault root:     ", Style::default().fg(Color::Cyan)),
                Span::raw(&self.config.vault_root),
            ]),
            Line::from(vec![
                Span::styled("Default course: ", Style::default().fg(Color::Cyan)),
                Span::raw(course_display),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "Config will be saved to: ",
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{}/config.json", config_dir)),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press Enter or 'y' to save and continue...",
                Style::default().fg(Color::Yellow),
            )]),
        ];

        if let Some(ref error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm Configuration ")
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(paragraph, area);
    }
}
