//! Status bar rendering with keybindings and pile statistics

use crate::memory::BoundedStack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub stack: &'a BoundedStack,
    pub is_entering: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    if area.height == 0 {
        return;
    }

    let bar_style = Style::default().bg(DEFAULT_THEME.status_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    // Left side: fill level, status message and extrema
    let mut left_spans = vec![
        Span::styled(
            format!(" {}/{} ", data.stack.len(), data.stack.capacity()),
            Style::default()
                .bg(if data.is_entering {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.message),
            bar_style.fg(DEFAULT_THEME.fg),
        ),
    ];

    if let (Some(top), Some(max), Some(min)) =
        (data.stack.peek(), data.stack.max(), data.stack.min())
    {
        left_spans.push(Span::styled("│", sep_style));
        left_spans.push(Span::styled(
            format!(" top {} ", top),
            bar_style.fg(DEFAULT_THEME.fg),
        ));
        left_spans.push(Span::styled(
            format!("max {} ", max),
            bar_style.fg(DEFAULT_THEME.max),
        ));
        left_spans.push(Span::styled(
            format!("min {} ", min),
            bar_style.fg(DEFAULT_THEME.min),
        ));
    }

    // Right side: keybinds for the current mode
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);

    let hints: &[(&str, &str)] = if data.is_entering {
        &[
            (" 0-9 ", "type "),
            (" ⌫ ", "del "),
            (" ↵ ", "push "),
            (" esc ", "cancel "),
        ]
    } else {
        &[
            (" a ", "add "),
            (" d ", "pop "),
            (" x ", "max "),
            (" n ", "min "),
            (" q ", "quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (key, desc) in hints {
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let right_line = Line::from(right_spans);
    let right_width = right_line.width() as u16;

    // Split status bar into left and right; the keybinds keep their width
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let right_paragraph = Paragraph::new(right_line)
        .style(bar_style)
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
