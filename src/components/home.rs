//! Home component - Main application screen
//!
//! Shows the vault summary, the recent-scaffold list, and the key hints.
//! Owns the history list selection state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_home_layout;
use crate::config::Config;
use crate::model::ScaffoldHistoryEntry;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Data the home screen renders, borrowed from the App each frame
pub struct HomeRenderContext<'a> {
    pub config: &'a Config,
    pub history: &'a [ScaffoldHistoryEntry],
    pub status_message: Option<&'a str>,
}

/// Home component for the main application view
pub struct HomeComponent {
    pub list_state: ListState,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(prev));
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('n') => Some(Action::OpenNewLecture),
            KeyCode::Char('s') => Some(Action::OpenSettings),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextEntry),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevEntry),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Home is drawn through draw_home_screen with a render context
        Ok(())
    }
}

/// Draw the full home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) {
    let layout = calculate_home_layout(area);

    draw_vault_panel(frame, layout.vault_info, ctx);
    draw_history_list(frame, layout.history, home, ctx);
    draw_status_line(frame, layout.status, ctx);
    draw_help_bar(frame, layout.help);
}

fn draw_vault_panel(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let course_display = if ctx.config.default_course.is_empty() {
        "(none)".to_string()
    } else {
        ctx.config.default_course.clone()
    };

    let tool_count = ctx.config.external_tools.len();

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Vault root:     ", Style::default().fg(Color::Cyan)),
            Span::raw(ctx.config.vault_root.clone()),
        ]),
        Line::from(vec![
            Span::styled("Default course: ", Style::default().fg(Color::Cyan)),
            Span::raw(course_display),
        ]),
        Line::from(vec![
            Span::styled("External tools: ", Style::default().fg(Color::Cyan)),
            Span::raw(tool_count.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Scaffolds:      ", Style::default().fg(Color::Cyan)),
            Span::raw(ctx.history.len().to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press n to scaffold a lecture",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" lectern ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_history_list(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) {
    let items: Vec<ListItem> = ctx
        .history
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", entry.status_icon())),
                Span::styled(
                    format!("{} ", entry.formatted_time()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", entry.course),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(entry.title.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent Scaffolds "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, &mut home.list_state);
}

fn draw_status_line(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    if let Some(message) = ctx.status_message {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(paragraph, area);
    }
}

fn draw_help_bar(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        " n  New lecture   s  Settings   ?  Help   q  Quit",
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_clamps_to_list() {
        let mut home = HomeComponent::new();

        home.select_next(0);
        assert_eq!(home.list_state.selected(), None);

        home.select_next(2);
        assert_eq!(home.list_state.selected(), Some(0));
        home.select_next(2);
        assert_eq!(home.list_state.selected(), Some(1));
        home.select_next(2);
        assert_eq!(home.list_state.selected(), Some(1));

        home.select_prev(2);
        assert_eq!(home.list_state.selected(), Some(0));
        home.select_prev(2);
        assert_eq!(home.list_state.selected(), Some(0));
    }
}
