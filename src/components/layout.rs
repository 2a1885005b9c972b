//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthChar;

/// Home screen layout areas
pub struct HomeLayout {
    pub vault_info: Rect,
    pub history: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the home screen layout: vault panel on the left, recent
/// scaffolds on the right, status line and help bar below.
pub fn calculate_home_layout(area: Rect) -> HomeLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(vertical[0]);

    HomeLayout {
        vault_info: horizontal[0],
        history: horizontal[1],
        status: vertical[1],
        help: vertical[2],
    }
}

/// Tail of `input` that fits within `max_width` terminal columns.
/// Dialogs use this to keep the end of long typed input visible.
pub fn clip_tail(input: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut chars: Vec<char> = Vec::new();
    for ch in input.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        chars.push(ch);
    }
    chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_tail_keeps_end_of_input() {
        assert_eq!(clip_tail("abcdef", 3), "def");
        assert_eq!(clip_tail("abc", 10), "abc");
        assert_eq!(clip_tail("", 5), "");
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(area, 50, 20);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_home_layout_partitions_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_home_layout(area);
        assert_eq!(layout.help.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(
            layout.vault_info.height + layout.status.height + layout.help.height,
            area.height
        );
    }
}
